// Support chat prompt. Business facts are answered from here; the fleet list
// is appended from the catalog so prices never drift from the vehicle grid.

use crate::catalog::Catalog;
use crate::llm_client::prompts::{fill_template, PERSONA};

/// Replace: {persona}, {fleet}
pub const SUPPORT_SYSTEM_TEMPLATE: &str = r#"{persona}
หน้าที่ของคุณคือการตอบคำถามและให้ความช่วยเหลือลูกค้าด้วยความเป็นมิตรและเป็นประโยชน์ โปรดใช้ข้อมูลต่อไปนี้ในการตอบคำถาม:

**ข้อมูลสำคัญ:**
- **เอกสารที่ต้องใช้:** สำหรับคนไทยใช้แค่ บัตรประชาชน และ ใบขับขี่
- **ค่ามัดจำ:** 3,000 - 5,000 บาท ขึ้นอยู่กับรุ่นรถที่เช่า
- **บริการพิเศษ:** เรามีบริการรับ-ส่งฟรีที่สนามบินอุดรธานี
- **ประกันภัย:** รถทุกคันมีประกันภัยชั้น 1 ฟรี
- **ประเภทเกียร์:** รถทุกคันเป็นเกียร์ออโต้เมติค
- **จุดเด่นอื่นๆ:** เราส่งรถเช่าถึงบ้านฟรีในเขตอุดรธานี, เจ้าของร้านส่งมอบรถด้วยตนเอง

**รถที่ให้เช่า (ราคาต่อวัน):**
{fleet}

**แนวทางการตอบ:**
- ตอบเป็นภาษาไทยเสมอ
- ใช้ภาษาที่สุภาพ เป็นมิตร และให้ความช่วยเหลือ
- ตอบให้กระชับและตรงประเด็น
- แนะนำเฉพาะรถที่อยู่ในรายการด้านบนเท่านั้น
- หากไม่ทราบคำตอบสำหรับคำถามใดๆ ให้ตอบอย่างสุภาพว่า "{fallback}""#;

/// Reply the model must give when it does not know the answer.
pub const FALLBACK_ANSWER: &str = "ขออภัยค่ะ เรื่องนี้เป็นข้อมูลที่ดิฉันยังไม่ทราบ รบกวนคุณลูกค้าติดต่อสอบถามโดยตรงกับพนักงานทาง Line ID: rungroj_carrent นะคะ";

/// `- <name> (<type>, <seats> ที่นั่ง): <price> บาท`
fn fleet_summary(catalog: &Catalog) -> String {
    catalog
        .vehicles()
        .iter()
        .map(|v| {
            format!(
                "- {} ({}, {} ที่นั่ง): {} บาท",
                v.name, v.vehicle_type, v.seats, v.price
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn support_system(catalog: &Catalog) -> String {
    let fleet = fleet_summary(catalog);
    fill_template(
        SUPPORT_SYSTEM_TEMPLATE,
        &[
            ("persona", PERSONA),
            ("fleet", fleet.as_str()),
            ("fallback", FALLBACK_ANSWER),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_lists_fleet_with_prices() {
        let catalog = Catalog::fleet();
        let system = support_system(&catalog);
        assert!(system.contains("- Honda City (Sedan, 5 ที่นั่ง): 856 บาท"));
        assert!(system.contains("- Isuzu MU-X (SUV, 7 ที่นั่ง): 1498 บาท"));
        for name in catalog.names() {
            assert!(system.contains(name));
        }
    }

    #[test]
    fn test_system_prompt_has_business_facts_and_fallback() {
        let system = support_system(&Catalog::fleet());
        assert!(system.starts_with(PERSONA));
        assert!(system.contains("3,000 - 5,000 บาท"));
        assert!(system.contains("สนามบินอุดรธานี"));
        assert!(system.contains(FALLBACK_ANSWER));
        assert!(!system.contains("{fleet}"));
    }
}
