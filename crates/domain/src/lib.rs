//! Domain layer for the Bosta client
//!
//! Contains the provider's static reference tables (delivery states, pickup
//! states, delivery types, pickup time slots), validated value objects, and
//! domain errors. This layer has no I/O and defines the ubiquitous language.

pub mod delivery_state;
pub mod delivery_type;
pub mod errors;
pub mod pickup_state;
pub mod time_slot;
pub mod value_objects;

pub use delivery_state::{DeliveryState, UPDATABLE_STATE_CODES, is_updatable_state};
pub use delivery_type::DeliveryType;
pub use errors::DomainError;
pub use pickup_state::PickupState;
pub use time_slot::PickupTimeSlot;
pub use value_objects::*;
