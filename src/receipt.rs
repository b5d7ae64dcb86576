// 🧾 Receipt Model - What the customer submits
// Plain values: every field stays exactly as received, scoring reads the strings

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

const RECEIPT_FIELDS: [&str; 5] = ["retailer", "purchaseDate", "purchaseTime", "items", "total"];
const ITEM_FIELDS: [&str; 2] = ["shortDescription", "price"];

// ============================================================================
// ITEM
// ============================================================================

/// A single purchased line on a receipt
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    /// Free-text description as printed on the receipt
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,

    /// Dollar amount with cents, e.g. "6.49"
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// ============================================================================
// RECEIPT
// ============================================================================

/// Purchase receipt as decoded from the wire
///
/// Missing or `null` fields decode to empty values instead of failing the
/// decode; the validator decides whether an empty field is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Receipt {
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,

    /// Calendar date, YYYY-MM-DD
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,

    /// 24-hour clock, HH:MM
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,

    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Item>,

    /// Dollar amount with cents, e.g. "18.74"
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,
}

impl Receipt {
    /// Decode a receipt from a JSON body.
    ///
    /// Field names match case-insensitively when the exact camelCase key is
    /// absent, so `"PurchaseDate"` fills `purchaseDate`. A `null` body is an
    /// empty receipt.
    pub fn from_json_slice(body: &[u8]) -> serde_json::Result<Self> {
        let mut value: Value = serde_json::from_slice(body)?;

        match &mut value {
            Value::Null => return Ok(Receipt::default()),
            Value::Object(fields) => {
                canonicalize_keys(fields, &RECEIPT_FIELDS);
                if let Some(Value::Array(items)) = fields.get_mut("items") {
                    for item in items.iter_mut() {
                        if let Value::Object(item_fields) = item {
                            canonicalize_keys(item_fields, &ITEM_FIELDS);
                        }
                    }
                }
            }
            _ => {}
        }

        serde_json::from_value(value)
    }
}

/// Rename the first case-insensitive match of each known field to its exact name.
fn canonicalize_keys(fields: &mut Map<String, Value>, known: &[&str]) {
    for name in known {
        if fields.contains_key(*name) {
            continue;
        }

        let matched = fields
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned();
        if let Some(key) = matched {
            if let Some(value) = fields.remove(&key) {
                fields.insert(name.to_string(), value);
            }
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_camel_case_fields() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"}
            ],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items, vec![Item::new("Mountain Dew 12PK", "6.49")]);
        assert_eq!(receipt.total, "6.49");
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let receipt: Receipt = serde_json::from_str(r#"{"retailer": "Target"}"#).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert!(receipt.purchase_date.is_empty());
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<Receipt>(r#"{"total": 18.74}"#);
        assert!(result.is_err());
        assert!(Receipt::from_json_slice(br#"{"total": 18.74}"#).is_err());
        assert!(Receipt::from_json_slice(b"[]").is_err());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let json = br#"{
            "retailer": null,
            "purchaseDate": "2022-01-02",
            "items": null,
            "total": "2.25"
        }"#;

        let receipt = Receipt::from_json_slice(json).unwrap();
        assert!(receipt.retailer.is_empty());
        assert!(receipt.items.is_empty());
        assert_eq!(receipt.total, "2.25");

        let item: Item = serde_json::from_str(r#"{"shortDescription": null, "price": "1.00"}"#).unwrap();
        assert_eq!(item, Item::new("", "1.00"));
    }

    #[test]
    fn test_null_body_is_empty_receipt() {
        assert_eq!(Receipt::from_json_slice(b"null").unwrap(), Receipt::default());
    }

    #[test]
    fn test_field_names_match_case_insensitively() {
        let json = br#"{
            "Retailer": "Target",
            "PurchaseDate": "2022-01-01",
            "PURCHASETIME": "13:01",
            "Items": [{"ShortDescription": "Apple", "PRICE": "3.00"}],
            "total": "3.00"
        }"#;

        let receipt = Receipt::from_json_slice(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items, vec![Item::new("Apple", "3.00")]);
        assert_eq!(receipt.total, "3.00");
    }

    #[test]
    fn test_exact_key_wins_over_case_variant() {
        let json = br#"{"purchaseDate": "2022-01-01", "PurchaseDate": "1999-12-31"}"#;
        let receipt = Receipt::from_json_slice(json).unwrap();
        assert_eq!(receipt.purchase_date, "2022-01-01");
    }
}
