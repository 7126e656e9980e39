//! Delivery search queries
//!
//! The provider's search endpoint accepts a fixed set of filterable fields.
//! The query struct is that allow-list: serde rejects any other key, and an
//! unrecognized `type` value fails at deserialization, so a bad query is
//! rejected whole rather than partially filtered.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::models::Delivery;
use crate::error::BostaError;

/// Delivery type tags accepted by the search filter
///
/// The wire values are the provider's exact tags, mixed casing included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchDeliveryType {
    #[serde(rename = "SEND")]
    Send,
    #[serde(rename = "CASH_COLLECTION")]
    CashCollection,
    #[serde(rename = "Return")]
    Return,
    #[serde(rename = "RTO")]
    Rto,
    #[serde(rename = "EXCHANGE")]
    Exchange,
    #[serde(rename = "CUSTOMER_RETURN_PICKUP")]
    CustomerReturnPickup,
}

impl SearchDeliveryType {
    /// The provider's wire tag for this type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Send => "SEND",
            Self::CashCollection => "CASH_COLLECTION",
            Self::Return => "Return",
            Self::Rto => "RTO",
            Self::Exchange => "EXCHANGE",
            Self::CustomerReturnPickup => "CUSTOMER_RETURN_PICKUP",
        }
    }
}

/// A delivery search query restricted to the provider's filterable fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct SearchQuery {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<SearchDeliveryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_numbers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_attempts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customers_first_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customers_last_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customers_full_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_reference: Option<String>,
    /// Numeric delivery state code filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_zone_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_city_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_off_zone_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_off_city_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_off_district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_city_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_zone_ids: Option<Vec<String>>,
}

impl SearchQuery {
    /// Build from loosely-typed JSON; a key outside the allow-list or an
    /// unrecognized `type` value rejects the whole query
    pub fn from_json(value: Value) -> Result<Self, BostaError> {
        serde_json::from_value(value)
            .map_err(|e| BostaError::Validation(format!("Invalid search query: {e}")))
    }

    /// Whether no filter is set at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Serialize into query parameters, joining list filters with commas
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        let mut push = |name: &str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((name.to_string(), value));
            }
        };
        let join = |list: &Option<Vec<String>>| list.as_ref().map(|v| v.join(","));

        push("type", self.delivery_type.map(|t| t.as_str().to_string()));
        push("trackingNumbers", join(&self.tracking_numbers));
        push(
            "numberOfAttempts",
            self.number_of_attempts.map(|n| n.to_string()),
        );
        push("customersFirstNames", join(&self.customers_first_names));
        push("customersLastNames", join(&self.customers_last_names));
        push("customersFullNames", join(&self.customers_full_names));
        push("mobilePhones", join(&self.mobile_phones));
        push("notes", self.notes.clone());
        push("businessReference", self.business_reference.clone());
        push("state", self.state.map(|s| s.to_string()));
        push("pickupZoneIds", join(&self.pickup_zone_ids));
        push("pickupCityIds", join(&self.pickup_city_ids));
        push("pickupDistrict", self.pickup_district.clone());
        push("dropOffZoneIds", join(&self.drop_off_zone_ids));
        push("dropOffCityIds", join(&self.drop_off_city_ids));
        push("dropOffDistrict", self.drop_off_district.clone());
        push("customerCityIds", join(&self.customer_city_ids));
        push("customerZoneIds", join(&self.customer_zone_ids));

        pairs
    }
}

/// A page of search matches
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub deliveries: Vec<Delivery>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_query_is_detected() {
        assert!(SearchQuery::default().is_empty());

        let query = SearchQuery {
            notes: Some("fragile".to_string()),
            ..SearchQuery::default()
        };
        assert!(!query.is_empty());
    }

    #[test]
    fn unknown_key_rejects_whole_query() {
        let result = SearchQuery::from_json(json!({
            "trackingNumbers": ["7234258"],
            "favouriteColour": "green"
        }));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("favouriteColour"));
    }

    #[test]
    fn unknown_type_value_rejects_whole_query() {
        let result = SearchQuery::from_json(json!({"type": "TELEPORT"}));
        assert!(result.is_err());
    }

    #[test]
    fn recognized_type_tags_parse() {
        for (tag, expected) in [
            ("SEND", SearchDeliveryType::Send),
            ("CASH_COLLECTION", SearchDeliveryType::CashCollection),
            ("Return", SearchDeliveryType::Return),
            ("RTO", SearchDeliveryType::Rto),
            ("EXCHANGE", SearchDeliveryType::Exchange),
            (
                "CUSTOMER_RETURN_PICKUP",
                SearchDeliveryType::CustomerReturnPickup,
            ),
        ] {
            let query = SearchQuery::from_json(json!({"type": tag})).unwrap();
            assert_eq!(query.delivery_type, Some(expected));
        }
    }

    #[test]
    fn type_tag_casing_is_exact() {
        // "Return" is the one mixed-case tag the provider accepts
        assert!(SearchQuery::from_json(json!({"type": "RETURN"})).is_err());
        assert!(SearchQuery::from_json(json!({"type": "Return"})).is_ok());
    }

    #[test]
    fn query_pairs_use_provider_field_names() {
        let query = SearchQuery {
            delivery_type: Some(SearchDeliveryType::Send),
            tracking_numbers: Some(vec!["A1".to_string(), "B2".to_string()]),
            state: Some(45),
            drop_off_city_ids: Some(vec!["city-1".to_string()]),
            ..SearchQuery::default()
        };

        let pairs = query.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("type".to_string(), "SEND".to_string()),
                ("trackingNumbers".to_string(), "A1,B2".to_string()),
                ("state".to_string(), "45".to_string()),
                ("dropOffCityIds".to_string(), "city-1".to_string()),
            ]
        );
    }

    #[test]
    fn unset_filters_produce_no_pairs() {
        assert!(SearchQuery::default().to_query_pairs().is_empty());
    }

    #[test]
    fn loose_json_round_trips() {
        let query = SearchQuery::from_json(json!({
            "mobilePhones": ["01234567890"],
            "numberOfAttempts": 2
        }))
        .unwrap();
        assert_eq!(query.number_of_attempts, Some(2));
        assert_eq!(
            query.mobile_phones,
            Some(vec!["01234567890".to_string()])
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    const FILTER_NAMES: [&str; 18] = [
        "type",
        "trackingNumbers",
        "numberOfAttempts",
        "customersFirstNames",
        "customersLastNames",
        "customersFullNames",
        "mobilePhones",
        "notes",
        "businessReference",
        "state",
        "pickupZoneIds",
        "pickupCityIds",
        "pickupDistrict",
        "dropOffZoneIds",
        "dropOffCityIds",
        "dropOffDistrict",
        "customerCityIds",
        "customerZoneIds",
    ];

    proptest! {
        #[test]
        fn list_filters_join_without_losing_entries(
            numbers in proptest::collection::vec("[A-Z0-9]{4,10}", 1..5)
        ) {
            let query = SearchQuery {
                tracking_numbers: Some(numbers.clone()),
                ..SearchQuery::default()
            };
            let pairs = query.to_query_pairs();
            prop_assert_eq!(pairs.len(), 1);
            prop_assert_eq!(pairs[0].1.split(',').count(), numbers.len());
        }

        #[test]
        fn pair_names_stay_inside_the_allow_list(
            notes in "[a-z ]{1,20}",
            state in 0u16..100,
            attempts in 0u32..10
        ) {
            let query = SearchQuery {
                notes: Some(notes),
                state: Some(state),
                number_of_attempts: Some(attempts),
                ..SearchQuery::default()
            };
            for (name, _) in query.to_query_pairs() {
                prop_assert!(FILTER_NAMES.contains(&name.as_str()));
            }
        }

        #[test]
        fn keys_outside_the_allow_list_are_rejected(key in "[a-z]{3,12}") {
            prop_assume!(!FILTER_NAMES.contains(&key.as_str()));

            let mut object = Map::new();
            object.insert(key, Value::String("x".to_string()));
            prop_assert!(SearchQuery::from_json(Value::Object(object)).is_err());
        }
    }
}
