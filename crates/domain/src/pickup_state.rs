//! Pickup lifecycle states

use std::fmt;

use serde::{Deserialize, Serialize};

/// Human-readable pickup lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickupState {
    Requested,
    RouteAssigned,
    Accepted,
    PickingUp,
    ArrivedAtBusiness,
    Receiving,
    PickedUp,
    OnRouteToWarehouse,
    ArrivedAtWarehouse,
    Done,
    Failed,
    RestartFailed,
    Canceled,
}

impl PickupState {
    /// All states, in the provider's listing order
    pub const ALL: [Self; 13] = [
        Self::Requested,
        Self::RouteAssigned,
        Self::Accepted,
        Self::PickingUp,
        Self::ArrivedAtBusiness,
        Self::Receiving,
        Self::PickedUp,
        Self::OnRouteToWarehouse,
        Self::ArrivedAtWarehouse,
        Self::Done,
        Self::Failed,
        Self::RestartFailed,
        Self::Canceled,
    ];

    /// The provider's display label for this state
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Requested => "Requested",
            Self::RouteAssigned => "Route Assigned",
            Self::Accepted => "Accepted",
            Self::PickingUp => "Picking up",
            Self::ArrivedAtBusiness => "Arrived at business",
            Self::Receiving => "Receiving",
            Self::PickedUp => "Picked up",
            Self::OnRouteToWarehouse => "En route to warehouse",
            Self::ArrivedAtWarehouse => "Arrived at warehouse",
            Self::Done => "Done",
            Self::Failed => "Failed",
            Self::RestartFailed => "Restart failed",
            Self::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for PickupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
