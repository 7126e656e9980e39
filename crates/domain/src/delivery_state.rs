//! Delivery lifecycle states
//!
//! The provider reports a delivery's lifecycle stage as a numeric state code
//! plus a human-readable label. The label table is static reference data; the
//! numeric codes gate which operations are currently allowed on a delivery.

use std::fmt;

use serde::{Deserialize, Serialize};

/// State codes in which a delivery may still be updated.
///
/// A delivery whose current state code is outside this set rejects updates
/// before any request is sent.
pub const UPDATABLE_STATE_CODES: [u16; 9] = [10, 11, 20, 21, 22, 24, 30, 41, 47];

/// Whether a delivery in the given state code may still be updated
#[must_use]
pub fn is_updatable_state(code: u16) -> bool {
    UPDATABLE_STATE_CODES.contains(&code)
}

/// Human-readable delivery lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryState {
    PickupRequested,
    WaitingForRoute,
    RouteAssigned,
    WaitingForPickup,
    PickingUp,
    PickingUpFromWarehouse,
    ArrivedAtBusiness,
    ReceivedAtWarehouse,
    PickedUp,
    PickedUpFromBusiness,
    Delivering,
    ArrivedAtCustomer,
    Delivered,
    Canceled,
    Exception,
    ReturnedToBusiness,
    Terminated,
    InTransitBetweenHubs,
    DeliveryConfirmed,
    Lost,
    Damaged,
    Investigation,
}

impl DeliveryState {
    /// All states, in the provider's listing order
    pub const ALL: [Self; 22] = [
        Self::PickupRequested,
        Self::WaitingForRoute,
        Self::RouteAssigned,
        Self::WaitingForPickup,
        Self::PickingUp,
        Self::PickingUpFromWarehouse,
        Self::ArrivedAtBusiness,
        Self::ReceivedAtWarehouse,
        Self::PickedUp,
        Self::PickedUpFromBusiness,
        Self::Delivering,
        Self::ArrivedAtCustomer,
        Self::Delivered,
        Self::Canceled,
        Self::Exception,
        Self::ReturnedToBusiness,
        Self::Terminated,
        Self::InTransitBetweenHubs,
        Self::DeliveryConfirmed,
        Self::Lost,
        Self::Damaged,
        Self::Investigation,
    ];

    /// The provider's display label for this state
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PickupRequested => "Pickup requested",
            Self::WaitingForRoute => "Waiting for route",
            Self::RouteAssigned => "Route Assigned",
            Self::WaitingForPickup => "Waiting for Pickup",
            Self::PickingUp => "Picking up",
            Self::PickingUpFromWarehouse => "Picking up from warehouse",
            Self::ArrivedAtBusiness => "Arrived at business",
            Self::ReceivedAtWarehouse => "Received at warehouse",
            Self::PickedUp => "Picked up",
            Self::PickedUpFromBusiness => "Picked up from business",
            Self::Delivering => "Delivering",
            Self::ArrivedAtCustomer => "Arrived at customer",
            Self::Delivered => "Delivered",
            Self::Canceled => "Canceled",
            Self::Exception => "Exception",
            Self::ReturnedToBusiness => "Returned to business",
            Self::Terminated => "Terminated",
            Self::InTransitBetweenHubs => "In transit between Hubs",
            Self::DeliveryConfirmed => "Delivery confirmed",
            Self::Lost => "Lost",
            Self::Damaged => "Damaged",
            Self::Investigation => "Investigation",
        }
    }
}

impl fmt::Display for DeliveryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_all_states() {
        assert_eq!(DeliveryState::ALL.len(), 22);
    }

    #[test]
    fn labels_match_provider_wording() {
        assert_eq!(DeliveryState::PickupRequested.label(), "Pickup requested");
        assert_eq!(DeliveryState::RouteAssigned.label(), "Route Assigned");
        assert_eq!(
            DeliveryState::InTransitBetweenHubs.label(),
            "In transit between Hubs"
        );
        assert_eq!(DeliveryState::Investigation.label(), "Investigation");
    }

    #[test]
    fn labels_are_unique() {
        use std::collections::HashSet;
        let labels: HashSet<_> = DeliveryState::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels.len(), DeliveryState::ALL.len());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(
            DeliveryState::WaitingForPickup.to_string(),
            "Waiting for Pickup"
        );
    }

    #[test]
    fn updatable_codes_accept_members() {
        for code in UPDATABLE_STATE_CODES {
            assert!(is_updatable_state(code));
        }
    }

    #[test]
    fn updatable_codes_reject_terminal_states() {
        assert!(!is_updatable_state(45));
        assert!(!is_updatable_state(48));
        assert!(!is_updatable_state(60));
        assert!(!is_updatable_state(0));
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&DeliveryState::PickupRequested).unwrap();
        assert_eq!(json, "\"PICKUP_REQUESTED\"");
        let parsed: DeliveryState = serde_json::from_str("\"DELIVERY_CONFIRMED\"").unwrap();
        assert_eq!(parsed, DeliveryState::DeliveryConfirmed);
    }
}
