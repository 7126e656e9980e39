//! Delivery type reference table
//!
//! Each delivery type carries a numeric wire code and a display label. The
//! wire protocol exchanges the numeric code only, so serde maps this enum to
//! and from the code. Codes 10 appears twice in the provider's table
//! (`PACKAGE_DELIVERY` and `SEND`); the reverse mapping resolves to [`Send`].
//!
//! [`Send`]: DeliveryType::Send

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The provider's delivery types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryType {
    /// Forward shipment (legacy alias of [`Send`](Self::Send), same code)
    PackageDelivery,
    /// Package delivery from business to customer
    Send,
    /// Courier collects cash without carrying a package
    CashCollection,
    /// Return to origin
    Rto,
    /// Customer return pickup
    Crp,
    /// Deliver a new package and pick up the old one in one visit
    Exchange,
}

impl DeliveryType {
    /// All types, in the provider's listing order
    pub const ALL: [Self; 6] = [
        Self::PackageDelivery,
        Self::Send,
        Self::CashCollection,
        Self::Rto,
        Self::Crp,
        Self::Exchange,
    ];

    /// The numeric wire code for this type
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::PackageDelivery | Self::Send => 10,
            Self::CashCollection => 15,
            Self::Rto => 20,
            Self::Crp => 25,
            Self::Exchange => 30,
        }
    }

    /// The provider's display label for this type
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PackageDelivery => "Forward",
            Self::Send => "Package Delivery",
            Self::CashCollection => "Cash Collection",
            Self::Rto => "Return to Origin",
            Self::Crp => "Customer Return Pickup",
            Self::Exchange => "Exchange",
        }
    }

    /// Look up a type by its numeric wire code
    pub fn from_code(code: u16) -> Result<Self, DomainError> {
        match code {
            10 => Ok(Self::Send),
            15 => Ok(Self::CashCollection),
            20 => Ok(Self::Rto),
            25 => Ok(Self::Crp),
            30 => Ok(Self::Exchange),
            _ => Err(DomainError::UnknownCode {
                table: "delivery type",
                code,
            }),
        }
    }
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for DeliveryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

impl<'de> Deserialize<'de> for DeliveryType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u16::deserialize(deserializer)?;
        Self::from_code(code).map_err(de::Error::custom)
    }
}
