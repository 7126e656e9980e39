//! Delivery payloads
//!
//! Request structs mirror the provider's create and update schemas: serde
//! rejects unrecognized keys outright, and the `validator` rule set encodes
//! required fields, numeric bounds, and the cross-field constraints tied to
//! the delivery type. Response structs model the fields this client relies
//! on and keep the rest of the provider object in `extra`.

use domain::DeliveryType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use crate::error::BostaError;
use crate::validate::{non_blank, phone_11_digits};

/// Maximum cash-on-delivery amount the provider accepts
pub const MAX_COD: f64 = 30_000.0;

/// Package size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageSize {
    #[serde(rename = "SMALL")]
    Small,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LARGE")]
    Large,
    #[serde(rename = "Light Bulky")]
    LightBulky,
    #[serde(rename = "Heavy Bulky")]
    HeavyBulky,
}

/// Package kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageType {
    Parcel,
    Document,
    #[serde(rename = "Light Bulky")]
    LightBulky,
    #[serde(rename = "Heavy Bulky")]
    HeavyBulky,
}

/// Shipment specs: size, kind, free-form details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PackageSpecs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<PackageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<PackageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_details: Option<Value>,
}

/// A full address as required when creating a delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Address {
    #[validate(custom(function = non_blank))]
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[validate(custom(function = non_blank))]
    pub district_id: String,
    #[validate(custom(function = non_blank))]
    pub first_line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_work_address: Option<bool>,
}

/// A return address; every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReturnAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_work_address: Option<bool>,
}

/// The delivery recipient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Receiver {
    #[validate(custom(function = non_blank))]
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[validate(custom(function = non_blank))]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
}

/// Payload for creating a delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[validate(schema(function = validate_create_rules))]
pub struct CreateDelivery {
    /// Delivery type wire code
    #[serde(rename = "type")]
    pub delivery_type: DeliveryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub specs: Option<PackageSpecs>,
    /// Specs of the returned shipment; CRP and Exchange only
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub return_specs: Option<PackageSpecs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// CRP and Exchange only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_notes: Option<String>,
    /// Cash on delivery amount
    #[validate(range(min = 0.0, max = 30_000.0, message = "COD amount must not exceed 30,000"))]
    pub cod: f64,
    #[validate(nested)]
    pub drop_off_address: Address,
    /// Exchange only: business address the exchanged order returns to
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub pickup_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub return_address: Option<ReturnAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_to_open_package: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_reference: Option<String>,
    /// Must be unique across all of the caller's orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_business_reference: Option<String>,
    #[validate(nested)]
    pub receiver: Receiver,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "must be a valid URL"))]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_custom_headers: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_location_id: Option<String>,
}

impl CreateDelivery {
    /// Build from loosely-typed JSON; unrecognized keys reject the whole input
    pub fn from_json(value: Value) -> Result<Self, BostaError> {
        serde_json::from_value(value)
            .map_err(|e| BostaError::Validation(format!("Invalid delivery data: {e}")))
    }
}

fn validate_create_rules(delivery: &CreateDelivery) -> Result<(), ValidationError> {
    let ty = delivery.delivery_type;

    if ty == DeliveryType::Exchange && delivery.pickup_address.is_none() {
        let mut err = ValidationError::new("exchange_pickup_address");
        err.message = Some("pickupAddress is required for Exchange deliveries".into());
        return Err(err);
    }

    let uses_return_fields = delivery.return_specs.is_some() || delivery.return_notes.is_some();
    if uses_return_fields && !matches!(ty, DeliveryType::Exchange | DeliveryType::Crp) {
        let mut err = ValidationError::new("return_fields_type");
        err.message =
            Some("returnSpecs and returnNotes are only allowed for Exchange and CRP deliveries".into());
        return Err(err);
    }

    Ok(())
}

/// City reference embedded in an update's drop-off address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CityRef {
    #[serde(rename = "_id")]
    #[validate(custom(function = non_blank))]
    pub id: String,
    #[validate(custom(function = non_blank))]
    pub name: String,
}

/// Drop-off address fields that may be updated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = non_blank))]
    pub district_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = non_blank))]
    pub first_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_work_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub city: Option<CityRef>,
}

/// Receiver fields that may be updated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReceiverUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = phone_11_digits))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = phone_11_digits))]
    pub second_phone: Option<String>,
}

/// Payload for updating a delivery; at least one field must be present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[validate(schema(function = validate_update_rules))]
pub struct UpdateDelivery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_to_open_package: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "COD must be a non-negative number"))]
    pub cod: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub drop_off_address: Option<UpdateAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub receiver: Option<ReceiverUpdate>,
}

impl UpdateDelivery {
    /// Build from loosely-typed JSON; unrecognized keys reject the whole input
    pub fn from_json(value: Value) -> Result<Self, BostaError> {
        serde_json::from_value(value)
            .map_err(|e| BostaError::Validation(format!("Invalid delivery data: {e}")))
    }

    /// Whether no field is set at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.allow_to_open_package.is_none()
            && self.cod.is_none()
            && self.drop_off_address.is_none()
            && self.receiver.is_none()
    }
}

fn validate_update_rules(update: &UpdateDelivery) -> Result<(), ValidationError> {
    if update.is_empty() {
        let mut err = ValidationError::new("empty_update");
        err.message = Some("At least one field must be provided for update".into());
        return Err(err);
    }
    Ok(())
}

/// A delivery's lifecycle state as reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeliveryStateInfo {
    /// Numeric state code; gates which operations are currently allowed
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable label
    #[serde(default)]
    pub value: Option<String>,
}

/// A delivery object as returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub state: Option<DeliveryStateInfo>,
    /// Everything else the provider attaches to the object
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of creating a delivery
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedDelivery {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
