// The fleet table. Names are the recommendation matching keys and must
// never be edited casually: the model is told to copy them byte-for-byte.

use super::{Vehicle, VehicleType};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

#[allow(clippy::too_many_arguments)]
fn vehicle(
    name: &str,
    image_hint: &str,
    price: u32,
    vehicle_type: VehicleType,
    seats: u32,
    rating: f32,
    reviews: u32,
    use_cases: &str,
) -> Vehicle {
    Vehicle {
        name: name.to_string(),
        vehicle_type,
        seats,
        price,
        rating,
        reviews,
        use_cases: use_cases.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        image_hint: image_hint.to_string(),
    }
}

pub(super) fn fleet() -> Vec<Vehicle> {
    vec![
        vehicle(
            "Honda City",
            "modern sedan",
            856,
            VehicleType::Sedan,
            5,
            4.7,
            142,
            "เหมาะสำหรับการขับขี่ในเมืองและการเดินทางธุรกิจ ประหยัดน้ำมันเป็นเลิศ",
        ),
        vehicle(
            "Toyota Yaris Ativ",
            "white sedan",
            749,
            VehicleType::Sedan,
            5,
            4.6,
            130,
            "รถซีดานที่เชื่อถือได้และสะดวกสบายสำหรับครอบครัวและการเดินทางไกล",
        ),
        vehicle(
            "Nissan Almera",
            "black sedan sport",
            749,
            VehicleType::Sedan,
            5,
            4.4,
            95,
            "ซีดานที่มีสไตล์พร้อมความสปอร์ต เหมาะสำหรับการสร้างความประทับใจ",
        ),
        vehicle(
            "Suzuki Swift",
            "red hatchback",
            642,
            VehicleType::Hatchback,
            5,
            4.3,
            88,
            "ตัวเลือกที่ประหยัดและคล่องตัวสำหรับการเดินทางในเมือง",
        ),
        vehicle(
            "Ford Ranger Raptor",
            "blue truck offroad",
            1800,
            VehicleType::Truck,
            5,
            4.9,
            210,
            "สำหรับนักผจญภัยที่ต้องการสำรวจเส้นทางออฟโรด",
        ),
        vehicle(
            "ISUZU D-MAX CAB",
            "silver truck pickup",
            856,
            VehicleType::Truck,
            4,
            4.6,
            180,
            "รถกระบะที่แข็งแกร่งและเชื่อถือได้สำหรับงานบรรทุกหนักและการสำรวจชนบท",
        ),
        vehicle(
            "Toyota Veloz",
            "maroon suv family",
            1070,
            VehicleType::Suv,
            7,
            4.7,
            155,
            "SUV 7 ที่นั่งที่ทันสมัย เหมาะสำหรับครอบครัวใหญ่และการเดินทางเป็นกลุ่ม",
        ),
        vehicle(
            "Pajero Sport Elite edition",
            "white suv luxury",
            1498,
            VehicleType::Suv,
            7,
            4.8,
            195,
            "การผสมผสานระหว่างความหรูหราและสมรรถนะเพื่อประสบการณ์การเดินทางระดับพรีเมียม",
        ),
        vehicle(
            "Mitsubishi Xpander Cross",
            "orange suv compact",
            1284,
            VehicleType::Suv,
            7,
            4.6,
            140,
            "SUV สไตล์ MPV ที่กว้างขวางและยืดหยุ่นสำหรับครอบครัวพร้อมสัมภาระมากมาย",
        ),
        vehicle(
            "Isuzu MU-X",
            "black suv rugged",
            1498,
            VehicleType::Suv,
            7,
            4.7,
            170,
            "SUV ที่แข็งแกร่งและมีความสามารถ ออกแบบมาเพื่อความสะดวกสบายในการเดินทางไกล",
        ),
    ]
}
