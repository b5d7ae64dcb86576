// 📐 Shape Layer - Receipt Validation
// Format checks that must pass before a receipt is scored or stored

use crate::error::ValidationError;
use crate::receipt::Receipt;
use chrono::NaiveDate;

pub type ValidationResult = Result<(), ValidationError>;

// ============================================================================
// RECEIPT VALIDATION
// ============================================================================

/// Validate a decoded receipt.
///
/// Checks run in a fixed order (date, time, total, item prices) and stop at
/// the first failure. A receipt with no items is valid.
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult {
    if !is_calendar_date(&receipt.purchase_date) {
        return Err(ValidationError::PurchaseDate);
    }

    if !is_clock_time(&receipt.purchase_time) {
        return Err(ValidationError::PurchaseTime);
    }

    if !is_dollar_amount(&receipt.total) {
        return Err(ValidationError::Total);
    }

    if let Some(index) = receipt
        .items
        .iter()
        .position(|item| !is_dollar_amount(&item.price))
    {
        return Err(ValidationError::ItemPrice { index });
    }

    Ok(())
}

// ============================================================================
// FIELD FORMATS
// ============================================================================

/// `YYYY-MM-DD` naming a day that exists on the calendar.
///
/// chrono alone accepts single-digit months and days, so the fixed width
/// layout is checked first.
pub fn is_calendar_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return false;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// `HH:MM` with hours 00-23 and minutes 00-59.
pub fn is_clock_time(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }

    let (h1, h2, m1, m2) = (bytes[0], bytes[1], bytes[3], bytes[4]);
    if ![h1, h2, m1, m2].iter().all(u8::is_ascii_digit) {
        return false;
    }

    let hour_ok = matches!(h1, b'0' | b'1') || (h1 == b'2' && h2 <= b'3');
    hour_ok && m1 <= b'5'
}

/// One or more digits, a dot, exactly two digits. No sign, no separators.
pub fn is_dollar_amount(value: &str) -> bool {
    match value.split_once('.') {
        Some((dollars, cents)) => {
            !dollars.is_empty()
                && dollars.bytes().all(|b| b.is_ascii_digit())
                && cents.len() == 2
                && cents.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::Item;

    fn create_test_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
            ],
            total: "18.74".to_string(),
        }
    }

    #[test]
    fn test_valid_receipt() {
        assert_eq!(validate_receipt(&create_test_receipt()), Ok(()));
    }

    #[test]
    fn test_receipt_without_items_is_valid() {
        let mut receipt = create_test_receipt();
        receipt.items.clear();
        assert_eq!(validate_receipt(&receipt), Ok(()));
    }

    #[test]
    fn test_invalid_purchase_dates() {
        for date in [
            "yyyy-mm-dd",
            "01-01-2022",
            "2022/01/01",
            "20220101",
            "2022-13-01",
            "2022-02-30",
            "2022-1-01",
            "",
        ] {
            let mut receipt = create_test_receipt();
            receipt.purchase_date = date.to_string();
            assert_eq!(
                validate_receipt(&receipt),
                Err(ValidationError::PurchaseDate),
                "date {:?}",
                date
            );
        }
    }

    #[test]
    fn test_leap_day() {
        assert!(is_calendar_date("2024-02-29"));
        assert!(!is_calendar_date("2023-02-29"));
    }

    #[test]
    fn test_invalid_purchase_times() {
        for time in ["1301", "25:00", "13:60", "1:01", "24:00", "ab:cd", "13:01 "] {
            let mut receipt = create_test_receipt();
            receipt.purchase_time = time.to_string();
            assert_eq!(
                validate_receipt(&receipt),
                Err(ValidationError::PurchaseTime),
                "time {:?}",
                time
            );
        }
    }

    #[test]
    fn test_clock_time_bounds() {
        assert!(is_clock_time("00:00"));
        assert!(is_clock_time("19:59"));
        assert!(is_clock_time("23:59"));
    }

    #[test]
    fn test_invalid_totals() {
        for total in ["18.7a", "18.7", "18", "18.789", "abc", ".74", "-1.00", "1,018.74"] {
            let mut receipt = create_test_receipt();
            receipt.total = total.to_string();
            assert_eq!(
                validate_receipt(&receipt),
                Err(ValidationError::Total),
                "total {:?}",
                total
            );
        }
    }

    #[test]
    fn test_invalid_item_price_reports_first_bad_index() {
        for price in ["6.4", "6", "6.789", "xyz"] {
            let mut receipt = create_test_receipt();
            receipt.items.push(Item::new("Chips", price));
            receipt.items.push(Item::new("Salsa", "bad"));
            assert_eq!(
                validate_receipt(&receipt),
                Err(ValidationError::ItemPrice { index: 2 }),
                "price {:?}",
                price
            );
        }
    }

    #[test]
    fn test_checks_stop_at_first_failure() {
        let mut receipt = create_test_receipt();
        receipt.purchase_time = "25:00".to_string();
        receipt.total = "18.7".to_string();
        assert_eq!(validate_receipt(&receipt), Err(ValidationError::PurchaseTime));
    }

    #[test]
    fn test_zero_total_is_well_formed() {
        assert!(is_dollar_amount("0.00"));
        assert!(is_dollar_amount("0123.45"));
    }
}
