//! Pricing calculators
//!
//! Two independent endpoints with their own required fields and enumerated
//! values. A query with an out-of-range or unrecognized value fails
//! validation and is never dispatched.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;
use validator::Validate;

use crate::client::{ApiClient, ApiRequest};
use crate::error::BostaError;
use crate::validate::{check, non_blank};

/// Service types accepted by the sector-based price calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    Send,
    CashCollection,
    Rto,
    CustomerReturnPickup,
    Exchange,
    International,
    SignAndReturn,
}

impl ServiceType {
    /// The provider's wire tag for this service
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Send => "SEND",
            Self::CashCollection => "CASH_COLLECTION",
            Self::Rto => "RTO",
            Self::CustomerReturnPickup => "CUSTOMER_RETURN_PICKUP",
            Self::Exchange => "EXCHANGE",
            Self::International => "INTERNATIONAL",
            Self::SignAndReturn => "SIGN_AND_RETURN",
        }
    }
}

/// Service types accepted by the shipment price calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentServiceType {
    Send,
    CashCollection,
    CustomerReturnPickup,
    Exchange,
    SignAndReturn,
}

impl ShipmentServiceType {
    /// The provider's wire tag for this service
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Send => "SEND",
            Self::CashCollection => "CASH_COLLECTION",
            Self::CustomerReturnPickup => "CUSTOMER_RETURN_PICKUP",
            Self::Exchange => "EXCHANGE",
            Self::SignAndReturn => "SIGN_AND_RETURN",
        }
    }
}

/// Shipment size classes priced by the shipment calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentSize {
    Normal,
    #[serde(rename = "Light Bulky")]
    LightBulky,
    #[serde(rename = "Heavy Bulky")]
    HeavyBulky,
}

impl ShipmentSize {
    /// The provider's wire tag for this size
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::LightBulky => "Light Bulky",
            Self::HeavyBulky => "Heavy Bulky",
        }
    }
}

/// The pricing calculator's two opaque tier selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "c__CT4DU9I")]
    TierC,
    #[serde(rename = "yiqKg_aGM1")]
    TierY,
}

impl PriceTier {
    /// The provider's wire id for this tier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TierC => "c__CT4DU9I",
            Self::TierY => "yiqKg_aGM1",
        }
    }
}

/// Query for the sector-based price calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PriceQuery {
    #[validate(range(min = 1, message = "must be a positive sector id"))]
    pub dropoff_sector_id: u32,
    #[serde(rename = "type")]
    pub service: ServiceType,
    pub vat_included: bool,
    #[validate(range(min = 1, message = "must be a positive sector id"))]
    pub pickup_sector_id: u32,
    pub tier_id_selector: PriceTier,
}

impl PriceQuery {
    /// Build from loosely-typed JSON; unrecognized keys or values reject the query
    pub fn from_json(value: Value) -> Result<Self, BostaError> {
        serde_json::from_value(value)
            .map_err(|e| BostaError::Validation(format!("Invalid price query: {e}")))
    }

    /// Serialize into the calculator's query parameters
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        vec![
            (
                "dropoffSectorId".to_string(),
                self.dropoff_sector_id.to_string(),
            ),
            ("type".to_string(), self.service.as_str().to_string()),
            ("vatIncluded".to_string(), self.vat_included.to_string()),
            (
                "pickupSectorId".to_string(),
                self.pickup_sector_id.to_string(),
            ),
            (
                "tierIdSelector".to_string(),
                self.tier_id_selector.as_str().to_string(),
            ),
        ]
    }
}

/// Query for the shipment price calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShippingPriceQuery {
    /// Cash on delivery amount
    #[validate(range(min = 0.0, message = "must be a non-negative amount"))]
    pub cod: f64,
    #[validate(custom(function = non_blank))]
    pub drop_off_city: String,
    #[validate(custom(function = non_blank))]
    pub pickup_city: String,
    pub size: ShipmentSize,
    #[serde(rename = "type")]
    pub service: ShipmentServiceType,
}

impl ShippingPriceQuery {
    /// Build from loosely-typed JSON; unrecognized keys or values reject the query
    pub fn from_json(value: Value) -> Result<Self, BostaError> {
        serde_json::from_value(value)
            .map_err(|e| BostaError::Validation(format!("Invalid shipping price query: {e}")))
    }

    /// Serialize into the calculator's query parameters
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("cod".to_string(), self.cod.to_string()),
            ("dropOffCity".to_string(), self.drop_off_city.clone()),
            ("pickupCity".to_string(), self.pickup_city.clone()),
            ("size".to_string(), self.size.as_str().to_string()),
            ("type".to_string(), self.service.as_str().to_string()),
        ]
    }
}

/// Pricing resource operations
#[derive(Clone)]
pub struct Pricing {
    api: Arc<dyn ApiClient>,
}

impl std::fmt::Debug for Pricing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pricing").finish_non_exhaustive()
    }
}

impl Pricing {
    /// Create the resource over an injected transport
    #[must_use]
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    /// Price a shipment between two sectors
    #[instrument(skip(self, query))]
    pub async fn quote(&self, query: PriceQuery) -> Result<Value, BostaError> {
        check(&query)?;

        self.api
            .send(ApiRequest::get("pricing/calculator").with_query(query.to_query_pairs()))
            .await
    }

    /// Price a shipment between two cities
    #[instrument(skip(self, query))]
    pub async fn shipment_quote(&self, query: ShippingPriceQuery) -> Result<Value, BostaError> {
        check(&query)?;

        self.api
            .send(
                ApiRequest::get("pricing/shipment/calculator")
                    .with_query(query.to_query_pairs()),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::{MockApiClient, Payload};

    fn pricing_with(mock: MockApiClient) -> Pricing {
        Pricing::new(Arc::new(mock))
    }

    fn sample_query() -> PriceQuery {
        PriceQuery {
            dropoff_sector_id: 3,
            service: ServiceType::Send,
            vat_included: true,
            pickup_sector_id: 7,
            tier_id_selector: PriceTier::TierC,
        }
    }

    fn sample_shipping_query() -> ShippingPriceQuery {
        ShippingPriceQuery {
            cod: 150.0,
            drop_off_city: "Cairo".to_string(),
            pickup_city: "Alexandria".to_string(),
            size: ShipmentSize::Normal,
            service: ShipmentServiceType::Send,
        }
    }

    #[tokio::test]
    async fn quote_sends_provider_parameter_names() {
        let mut mock = MockApiClient::new();
        mock.expect_send()
            .withf(|request| {
                request.path == "pricing/calculator"
                    && request.payload
                        == Some(Payload::Query(vec![
                            ("dropoffSectorId".to_string(), "3".to_string()),
                            ("type".to_string(), "SEND".to_string()),
                            ("vatIncluded".to_string(), "true".to_string()),
                            ("pickupSectorId".to_string(), "7".to_string()),
                            ("tierIdSelector".to_string(), "c__CT4DU9I".to_string()),
                        ]))
            })
            .times(1)
            .returning(|_| Ok(json!({"priceBeforeVat": 42})));

        let data = pricing_with(mock).quote(sample_query()).await.unwrap();
        assert_eq!(data["priceBeforeVat"], 42);
    }

    #[tokio::test]
    async fn zero_sector_id_makes_no_call() {
        let mut mock = MockApiClient::new();
        mock.expect_send().times(0);

        let query = PriceQuery {
            pickup_sector_id: 0,
            ..sample_query()
        };
        let err = pricing_with(mock).quote(query).await.unwrap_err();
        assert!(err.to_string().contains("pickup_sector_id"));
    }

    #[test]
    fn unknown_tier_selector_rejects_query() {
        let result = PriceQuery::from_json(json!({
            "dropoffSectorId": 3,
            "type": "SEND",
            "vatIncluded": true,
            "pickupSectorId": 7,
            "tierIdSelector": "made-up-tier"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_service_type_rejects_query() {
        let result = PriceQuery::from_json(json!({
            "dropoffSectorId": 3,
            "type": "CARRIER_PIGEON",
            "vatIncluded": true,
            "pickupSectorId": 7,
            "tierIdSelector": "c__CT4DU9I"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_rejects_query() {
        let result = PriceQuery::from_json(json!({
            "dropoffSectorId": 3,
            "type": "SEND",
            "vatIncluded": true,
            "pickupSectorId": 7,
            "tierIdSelector": "c__CT4DU9I",
            "discountCode": "SAVE10"
        }));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn shipment_quote_sends_provider_parameter_names() {
        let mut mock = MockApiClient::new();
        mock.expect_send()
            .withf(|request| {
                request.path == "pricing/shipment/calculator"
                    && request.payload
                        == Some(Payload::Query(vec![
                            ("cod".to_string(), "150".to_string()),
                            ("dropOffCity".to_string(), "Cairo".to_string()),
                            ("pickupCity".to_string(), "Alexandria".to_string()),
                            ("size".to_string(), "Normal".to_string()),
                            ("type".to_string(), "SEND".to_string()),
                        ]))
            })
            .times(1)
            .returning(|_| Ok(json!({"price": 55})));

        let data = pricing_with(mock)
            .shipment_quote(sample_shipping_query())
            .await
            .unwrap();
        assert_eq!(data["price"], 55);
    }

    #[tokio::test]
    async fn blank_city_makes_no_call() {
        let mut mock = MockApiClient::new();
        mock.expect_send().times(0);

        let query = ShippingPriceQuery {
            pickup_city: "  ".to_string(),
            ..sample_shipping_query()
        };
        let err = pricing_with(mock).shipment_quote(query).await.unwrap_err();
        assert!(err.to_string().contains("pickup_city"));
    }

    #[tokio::test]
    async fn negative_cod_makes_no_call() {
        let mut mock = MockApiClient::new();
        mock.expect_send().times(0);

        let query = ShippingPriceQuery {
            cod: -5.0,
            ..sample_shipping_query()
        };
        assert!(pricing_with(mock).shipment_quote(query).await.is_err());
    }

    #[test]
    fn unknown_size_rejects_shipping_query() {
        let result = ShippingPriceQuery::from_json(json!({
            "cod": 10,
            "dropOffCity": "Cairo",
            "pickupCity": "Giza",
            "size": "Gigantic",
            "type": "SEND"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn shipment_type_set_excludes_rto_and_international() {
        assert!(
            serde_json::from_value::<ShipmentServiceType>(json!("RTO")).is_err()
        );
        assert!(
            serde_json::from_value::<ShipmentServiceType>(json!("INTERNATIONAL")).is_err()
        );
        assert!(
            serde_json::from_value::<ShipmentServiceType>(json!("SIGN_AND_RETURN")).is_ok()
        );
    }

    #[test]
    fn wire_tags_match_provider_values() {
        assert_eq!(ServiceType::CustomerReturnPickup.as_str(), "CUSTOMER_RETURN_PICKUP");
        assert_eq!(PriceTier::TierY.as_str(), "yiqKg_aGM1");
        assert_eq!(ShipmentSize::HeavyBulky.as_str(), "Heavy Bulky");
        assert_eq!(
            serde_json::to_string(&ServiceType::SignAndReturn).unwrap(),
            "\"SIGN_AND_RETURN\""
        );
    }
}
