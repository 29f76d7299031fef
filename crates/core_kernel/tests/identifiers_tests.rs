//! Unit tests for the Identifiers module
//!
//! Tests cover creation, parsing, conversion, ordering, and display
//! formatting of the insurance record identifier.

use core_kernel::InsuranceId;
use proptest::prelude::*;

mod insurance_id_tests {
    use super::*;

    #[test]
    fn test_new_and_value() {
        let id = InsuranceId::new(17);
        assert_eq!(id.value(), 17);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(InsuranceId::prefix(), "INS");
    }

    #[test]
    fn test_display_format() {
        let id = InsuranceId::new(1);
        assert_eq!(id.to_string(), "INS-1");
    }

    #[test]
    fn test_from_str_without_prefix() {
        let parsed: InsuranceId = "250".parse().unwrap();
        assert_eq!(parsed, InsuranceId::new(250));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("INS-abc".parse::<InsuranceId>().is_err());
        assert!("".parse::<InsuranceId>().is_err());
    }

    #[test]
    fn test_ordering_follows_store_key() {
        assert!(InsuranceId::new(1) < InsuranceId::new(2));
    }

    #[test]
    fn test_json_is_a_bare_number() {
        let id = InsuranceId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");

        let deserialized: InsuranceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

proptest! {
    #[test]
    fn prop_display_parse_roundtrip(raw in any::<i64>()) {
        let id = InsuranceId::new(raw);
        let parsed: InsuranceId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
    }
}
