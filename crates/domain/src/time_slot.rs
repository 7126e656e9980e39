//! Pickup time slot reference table

use std::fmt;

use serde::{Deserialize, Serialize};

/// The provider's pickup windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickupTimeSlot {
    Morning,
    Afternoon,
}

impl PickupTimeSlot {
    /// All slots, in chronological order
    pub const ALL: [Self; 2] = [Self::Morning, Self::Afternoon];

    /// The provider's display label for this slot
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "10:00 to 13:00",
            Self::Afternoon => "13:00 to 16:00",
        }
    }
}

impl fmt::Display for PickupTimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
