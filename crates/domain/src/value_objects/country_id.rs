//! Country identifier value object
//!
//! The provider operates in exactly two countries. Any other identifier is
//! rejected before a request is built, empty strings included.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Provider id for Egypt
pub const EGYPT_COUNTRY_ID: &str = "60e4482c7cb7d4bc4849c4d5";

/// Provider id for the Kingdom of Saudi Arabia
pub const KSA_COUNTRY_ID: &str = "eF-3f9FZr";

/// A country supported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CountryId {
    Egypt,
    Ksa,
}

impl CountryId {
    /// Parse a provider country id, rejecting anything but the two known values
    pub fn parse(id: &str) -> Result<Self, DomainError> {
        match id.trim() {
            EGYPT_COUNTRY_ID => Ok(Self::Egypt),
            KSA_COUNTRY_ID => Ok(Self::Ksa),
            other => Err(DomainError::InvalidCountryId(other.to_string())),
        }
    }

    /// The provider's wire identifier for this country
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Egypt => EGYPT_COUNTRY_ID,
            Self::Ksa => KSA_COUNTRY_ID,
        }
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CountryId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for CountryId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CountryId> for String {
    fn from(value: CountryId) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn egypt_id_is_recognized() {
        let country = CountryId::parse("60e4482c7cb7d4bc4849c4d5").unwrap();
        assert_eq!(country, CountryId::Egypt);
        assert_eq!(country.as_str(), EGYPT_COUNTRY_ID);
    }

    #[test]
    fn ksa_id_is_recognized() {
        let country = CountryId::parse("eF-3f9FZr").unwrap();
        assert_eq!(country, CountryId::Ksa);
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = CountryId::parse("some-other-country").unwrap_err();
        assert!(err.to_string().contains("some-other-country"));
    }

    #[test]
    fn empty_id_is_rejected() {
        assert!(CountryId::parse("").is_err());
        assert!(CountryId::parse("   ").is_err());
    }

    #[test]
    fn id_is_case_sensitive() {
        assert!(CountryId::parse("EF-3F9FZR").is_err());
    }

    #[test]
    fn serializes_as_wire_id() {
        let json = serde_json::to_string(&CountryId::Egypt).unwrap();
        assert_eq!(json, format!("\"{EGYPT_COUNTRY_ID}\""));
    }

    #[test]
    fn deserializes_from_wire_id() {
        let country: CountryId = serde_json::from_str("\"eF-3f9FZr\"").unwrap();
        assert_eq!(country, CountryId::Ksa);
    }

    #[test]
    fn deserializing_unknown_id_fails() {
        let result: Result<CountryId, _> = serde_json::from_str("\"nope\"");
        assert!(result.is_err());
    }
}
