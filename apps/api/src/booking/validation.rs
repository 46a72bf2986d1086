//! Booking form validation: the rules the booking dialog enforces,
//! re-checked server-side before a booking is accepted.

use chrono::{DateTime, FixedOffset, NaiveTime, Utc};
use serde::Deserialize;

use crate::catalog::{Catalog, Vehicle};
use crate::errors::ValidationErrors;

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 10;
/// Udon Thani local time, UTC+7 with no DST. "Today" is judged here.
const BANGKOK_OFFSET_SECS: i32 = 7 * 3600;

/// Where the car is handed over and returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupLocation {
    UdonThaniAirport,
    MainBranch,
    Other,
}

impl PickupLocation {
    /// Parses the select value sent by the form.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value.trim() {
            "สนามบินอุดรธานี" => Some(PickupLocation::UdonThaniAirport),
            "สาขาหลัก rungroj carrent" => Some(PickupLocation::MainBranch),
            "อื่นๆ" => Some(PickupLocation::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PickupLocation::UdonThaniAirport => "สนามบินอุดรธานี",
            PickupLocation::MainBranch => "สาขาหลัก Rungroj Carrent",
            PickupLocation::Other => "อื่นๆ",
        }
    }
}

/// Booking form as submitted. Every field is optional on the wire and the
/// datetimes stay text until validation, so missing or malformed values
/// become field errors instead of a rejected body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub vehicle_name: Option<String>,
    pub location: Option<String>,
    pub other_location: Option<String>,
    /// RFC 3339, e.g. `2026-03-11T10:00:00+07:00`.
    pub pickup_date_time: Option<String>,
    pub return_date_time: Option<String>,
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    pub contact: Option<String>,
    pub special_requests: Option<String>,
}

/// A booking that passed every rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBooking {
    pub vehicle: Vehicle,
    pub location: PickupLocation,
    /// Free-text address, set only for `PickupLocation::Other`.
    pub other_location: Option<String>,
    pub pickup: DateTime<Utc>,
    pub return_at: DateTime<Utc>,
    pub customer_name: String,
    pub phone: String,
    pub contact: Option<String>,
    pub special_requests: Option<String>,
}

impl ValidatedBooking {
    /// Whole days billed, rounding any started day up. At least one.
    pub fn rental_days(&self) -> u32 {
        let secs = (self.return_at - self.pickup).num_seconds().max(1);
        let days = (secs + 86_399) / 86_400;
        days as u32
    }

    pub fn estimated_price(&self) -> u64 {
        u64::from(self.rental_days()) * u64::from(self.vehicle.price)
    }

    /// Human-readable hand-over place.
    pub fn location_label(&self) -> String {
        match (&self.location, &self.other_location) {
            (PickupLocation::Other, Some(place)) => place.clone(),
            (location, _) => location.label().to_string(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parses an RFC 3339 timestamp. Blank or absent yields `Ok(None)`.
fn parse_date_time(raw: &Option<String>) -> Result<Option<DateTime<Utc>>, chrono::ParseError> {
    match non_blank(raw) {
        None => Ok(None),
        Some(text) => DateTime::parse_from_rfc3339(&text).map(|dt| Some(dt.with_timezone(&Utc))),
    }
}

/// Start of the current calendar day in Udon Thani, as UTC.
fn start_of_local_day(now: DateTime<Utc>) -> DateTime<Utc> {
    let Some(offset) = FixedOffset::east_opt(BANGKOK_OFFSET_SECS) else {
        return now;
    };
    let local_midnight = now
        .with_timezone(&offset)
        .date_naive()
        .and_time(NaiveTime::MIN);
    local_midnight
        .and_local_timezone(offset)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(now)
}

/// Checks a booking against the catalog. `now` is injected so the
/// "not in the past" rule is testable.
pub fn validate_booking(
    request: &BookingRequest,
    catalog: &Catalog,
    now: DateTime<Utc>,
) -> Result<ValidatedBooking, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let vehicle = match non_blank(&request.vehicle_name) {
        None => {
            errors.push("vehicleName", "กรุณาเลือกรถที่ต้องการจอง");
            None
        }
        Some(name) => match catalog.find(&name) {
            Some(v) => Some(v.clone()),
            None => {
                errors.push("vehicleName", format!("ไม่พบรถรุ่น {name}"));
                None
            }
        },
    };

    let location = match request.location.as_deref().map(PickupLocation::from_form_value) {
        Some(Some(location)) => Some(location),
        _ => {
            errors.push("location", "กรุณาเลือกสถานที่รับ-คืนรถ");
            None
        }
    };

    let other_location = non_blank(&request.other_location);
    if location == Some(PickupLocation::Other) && other_location.is_none() {
        errors.push("otherLocation", "กรุณาระบุสถานที่อื่นๆ");
    }

    let pickup = match parse_date_time(&request.pickup_date_time) {
        Ok(Some(p)) => {
            if p < start_of_local_day(now) {
                errors.push("pickupDateTime", "ไม่สามารถเลือกวันรับรถที่ผ่านมาแล้ว");
            }
            Some(p)
        }
        Ok(None) => {
            errors.push("pickupDateTime", "กรุณาเลือกวันและเวลารับรถ");
            None
        }
        Err(_) => {
            errors.push("pickupDateTime", "รูปแบบวันและเวลารับรถไม่ถูกต้อง");
            None
        }
    };

    let return_at = match parse_date_time(&request.return_date_time) {
        Ok(Some(r)) => {
            if pickup.is_some_and(|p| r <= p) {
                errors.push(
                    "returnDateTime",
                    "วันและเวลาคืนรถต้องอยู่หลังวันและเวลารับรถ",
                );
            }
            Some(r)
        }
        Ok(None) => {
            errors.push("returnDateTime", "กรุณาเลือกวันและเวลาคืนรถ");
            None
        }
        Err(_) => {
            errors.push("returnDateTime", "รูปแบบวันและเวลาคืนรถไม่ถูกต้อง");
            None
        }
    };

    let customer_name = non_blank(&request.customer_name).unwrap_or_default();
    if customer_name.chars().count() < MIN_NAME_CHARS {
        errors.push("customerName", "กรุณากรอกชื่อ-นามสกุล");
    }

    let phone = non_blank(&request.phone).unwrap_or_default();
    if phone.chars().count() < MIN_PHONE_CHARS {
        errors.push("phone", "กรุณากรอกเบอร์โทรศัพท์ให้ถูกต้อง");
    }

    errors.into_result()?;

    match (vehicle, location, pickup, return_at) {
        (Some(vehicle), Some(location), Some(pickup), Some(return_at)) => Ok(ValidatedBooking {
            vehicle,
            location,
            other_location: other_location.filter(|_| location == PickupLocation::Other),
            pickup,
            return_at,
            customer_name,
            phone,
            contact: non_blank(&request.contact),
            special_requests: non_blank(&request.special_requests),
        }),
        // Every None above recorded an error, so this arm is unreachable.
        _ => {
            let mut errors = ValidationErrors::new();
            errors.push("booking", "ข้อมูลการจองไม่ครบถ้วน");
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    // 2026-03-10 09:00 in Udon Thani
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 2, 0, 0).unwrap()
    }

    fn stamp(dt: DateTime<Utc>) -> Option<String> {
        Some(dt.to_rfc3339())
    }

    fn valid_request() -> BookingRequest {
        BookingRequest {
            vehicle_name: Some("Toyota Veloz".to_string()),
            location: Some("สนามบินอุดรธานี".to_string()),
            other_location: None,
            pickup_date_time: stamp(now() + Duration::days(1)),
            return_date_time: stamp(now() + Duration::days(3)),
            customer_name: Some("สมชาย ใจดี".to_string()),
            phone: Some("0812345678".to_string()),
            contact: Some("line: somchai".to_string()),
            special_requests: Some("  ".to_string()),
        }
    }

    fn fields(err: &ValidationErrors) -> Vec<&'static str> {
        err.fields().iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_booking_passes() {
        let booking = validate_booking(&valid_request(), &Catalog::fleet(), now()).unwrap();
        assert_eq!(booking.vehicle.name, "Toyota Veloz");
        assert_eq!(booking.location, PickupLocation::UdonThaniAirport);
        assert_eq!(booking.rental_days(), 2);
        assert_eq!(booking.estimated_price(), 2 * 1070);
        assert_eq!(booking.contact.as_deref(), Some("line: somchai"));
        assert!(booking.special_requests.is_none());
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let err =
            validate_booking(&BookingRequest::default(), &Catalog::fleet(), now()).unwrap_err();
        assert_eq!(
            fields(&err),
            vec![
                "vehicleName",
                "location",
                "pickupDateTime",
                "returnDateTime",
                "customerName",
                "phone"
            ]
        );
    }

    #[test]
    fn test_unknown_vehicle_is_rejected() {
        let mut req = valid_request();
        req.vehicle_name = Some("Tesla Model S".to_string());
        let err = validate_booking(&req, &Catalog::fleet(), now()).unwrap_err();
        assert_eq!(fields(&err), vec!["vehicleName"]);
    }

    #[test]
    fn test_unknown_location_is_rejected() {
        let mut req = valid_request();
        req.location = Some("Bangkok".to_string());
        let err = validate_booking(&req, &Catalog::fleet(), now()).unwrap_err();
        assert_eq!(fields(&err), vec!["location"]);
    }

    #[test]
    fn test_other_location_requires_text() {
        let mut req = valid_request();
        req.location = Some("อื่นๆ".to_string());
        let err = validate_booking(&req, &Catalog::fleet(), now()).unwrap_err();
        assert_eq!(fields(&err), vec!["otherLocation"]);

        req.other_location = Some("โรงแรมเซ็นทารา อุดรธานี".to_string());
        let booking = validate_booking(&req, &Catalog::fleet(), now()).unwrap();
        assert_eq!(booking.location_label(), "โรงแรมเซ็นทารา อุดรธานี");
    }

    #[test]
    fn test_other_location_ignored_for_fixed_locations() {
        let mut req = valid_request();
        req.other_location = Some("somewhere".to_string());
        let booking = validate_booking(&req, &Catalog::fleet(), now()).unwrap();
        assert!(booking.other_location.is_none());
        assert_eq!(booking.location_label(), "สนามบินอุดรธานี");
    }

    #[test]
    fn test_return_must_be_after_pickup() {
        let mut req = valid_request();
        req.return_date_time = req.pickup_date_time.clone();
        let err = validate_booking(&req, &Catalog::fleet(), now()).unwrap_err();
        assert_eq!(fields(&err), vec!["returnDateTime"]);

        req.return_date_time = stamp(now());
        let err = validate_booking(&req, &Catalog::fleet(), now()).unwrap_err();
        assert_eq!(fields(&err), vec!["returnDateTime"]);
    }

    #[test]
    fn test_pickup_earlier_today_is_allowed_but_yesterday_is_not() {
        let mut req = valid_request();
        // 00:30 local on the same day
        req.pickup_date_time = stamp(Utc.with_ymd_and_hms(2026, 3, 9, 17, 30, 0).unwrap());
        assert!(validate_booking(&req, &Catalog::fleet(), now()).is_ok());

        // 23:30 local the previous day
        req.pickup_date_time = stamp(Utc.with_ymd_and_hms(2026, 3, 9, 16, 30, 0).unwrap());
        let err = validate_booking(&req, &Catalog::fleet(), now()).unwrap_err();
        assert_eq!(fields(&err), vec!["pickupDateTime"]);
    }

    #[test]
    fn test_malformed_datetimes_are_field_errors() {
        let mut req = valid_request();
        req.pickup_date_time = Some("2030-01-01".to_string());
        req.return_date_time = Some("next tuesday".to_string());
        let err = validate_booking(&req, &Catalog::fleet(), now()).unwrap_err();
        assert_eq!(fields(&err), vec!["pickupDateTime", "returnDateTime"]);
    }

    #[test]
    fn test_blank_datetime_counts_as_missing() {
        let mut req = valid_request();
        req.pickup_date_time = Some("  ".to_string());
        let err = validate_booking(&req, &Catalog::fleet(), now()).unwrap_err();
        assert_eq!(fields(&err), vec!["pickupDateTime"]);
        assert!(err.to_string().contains("กรุณาเลือกวันและเวลารับรถ"));
    }

    #[test]
    fn test_short_name_and_phone_rejected() {
        let mut req = valid_request();
        req.customer_name = Some("ก".to_string());
        req.phone = Some("081234".to_string());
        let err = validate_booking(&req, &Catalog::fleet(), now()).unwrap_err();
        assert_eq!(fields(&err), vec!["customerName", "phone"]);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let mut req = valid_request();
        req.return_date_time = stamp(now() + Duration::days(1) + Duration::hours(5));
        let booking = validate_booking(&req, &Catalog::fleet(), now()).unwrap();
        assert_eq!(booking.rental_days(), 1);

        req.return_date_time = stamp(now() + Duration::days(2) + Duration::minutes(1));
        let booking = validate_booking(&req, &Catalog::fleet(), now()).unwrap();
        assert_eq!(booking.rental_days(), 2);
    }

    #[test]
    fn test_request_deserializes_rfc3339_with_offset() {
        let req: BookingRequest = serde_json::from_str(
            r#"{
                "vehicleName": "Honda City",
                "location": "สาขาหลัก rungroj carrent",
                "pickupDateTime": "2026-03-11T10:00:00+07:00",
                "returnDateTime": "2026-03-12T10:00:00+07:00",
                "customerName": "Somchai",
                "phone": "0812345678"
            }"#,
        )
        .unwrap();
        let booking = validate_booking(&req, &Catalog::fleet(), now()).unwrap();
        assert_eq!(booking.pickup, Utc.with_ymd_and_hms(2026, 3, 11, 3, 0, 0).unwrap());
        assert_eq!(booking.location, PickupLocation::MainBranch);
        assert_eq!(booking.rental_days(), 1);
    }
}
