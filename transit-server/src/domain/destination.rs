//! Intercity destination catalog types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Error returned when parsing an invalid destination id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid destination id: {reason}")]
pub struct InvalidDestinationId {
    reason: &'static str,
}

/// A valid destination id slug.
///
/// Ids are short lowercase ASCII alphanumeric strings ("tirana",
/// "thessaloniki"). This type guarantees that any `DestinationId` value is
/// valid by construction.
///
/// # Examples
///
/// ```
/// use transit_server::domain::DestinationId;
///
/// let id = DestinationId::parse("tirana").unwrap();
/// assert_eq!(id.as_str(), "tirana");
///
/// // Uppercase and punctuation are rejected
/// assert!(DestinationId::parse("Tirana").is_err());
/// assert!(DestinationId::parse("tirana!").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DestinationId(String);

/// Maximum id length in bytes.
const MAX_ID_LEN: usize = 32;

impl DestinationId {
    /// Parse a destination id from a string.
    ///
    /// The input must be non-empty, at most 32 bytes, and consist of
    /// lowercase ASCII letters and digits only.
    pub fn parse(s: &str) -> Result<Self, InvalidDestinationId> {
        if s.is_empty() {
            return Err(InvalidDestinationId {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_ID_LEN {
            return Err(InvalidDestinationId {
                reason: "must be at most 32 bytes",
            });
        }

        for b in s.bytes() {
            if !(b.is_ascii_lowercase() || b.is_ascii_digit()) {
                return Err(InvalidDestinationId {
                    reason: "must be lowercase ASCII letters and digits",
                });
            }
        }

        Ok(Self(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DestinationId {
    type Error = InvalidDestinationId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<DestinationId> for String {
    fn from(id: DestinationId) -> Self {
        id.0
    }
}

impl fmt::Debug for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DestinationId({})", self.0)
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A city the intercity network serves.
///
/// Static reference data: the catalog is fixed at startup and entries are
/// never created or mutated at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub id: DestinationId,

    /// Display name, possibly with diacritics ("Durrës").
    pub name: String,

    /// Country the city is in; grouping compares this exactly.
    pub country: String,

    pub coordinates: GeoPoint,

    /// Scheduled coach travel time from the home city, in minutes,
    /// excluding breaks and border crossings.
    pub base_travel_minutes: u32,
}

impl Destination {
    /// Create a new destination.
    pub fn new(
        id: DestinationId,
        name: impl Into<String>,
        country: impl Into<String>,
        coordinates: GeoPoint,
        base_travel_minutes: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
            coordinates,
            base_travel_minutes,
        }
    }

    /// Whether this destination is in the given home country.
    pub fn is_domestic(&self, home_country: &str) -> bool {
        self.country == home_country
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(DestinationId::parse("tirana").is_ok());
        assert!(DestinationId::parse("thessaloniki").is_ok());
        assert!(DestinationId::parse("a1").is_ok());
    }

    #[test]
    fn reject_invalid_ids() {
        assert!(DestinationId::parse("").is_err());
        assert!(DestinationId::parse("Tirana").is_err());
        assert!(DestinationId::parse("tirana city").is_err());
        assert!(DestinationId::parse("tirana-2").is_err());
        assert!(DestinationId::parse("tiranë").is_err());
        assert!(DestinationId::parse(&"a".repeat(33)).is_err());
    }

    #[test]
    fn as_str_and_display() {
        let id = DestinationId::parse("berat").unwrap();
        assert_eq!(id.as_str(), "berat");
        assert_eq!(id.to_string(), "berat");
        assert_eq!(format!("{id:?}"), "DestinationId(berat)");
    }

    #[test]
    fn is_domestic() {
        let dest = Destination::new(
            DestinationId::parse("tirana").unwrap(),
            "Tirana",
            "Albania",
            GeoPoint::new(41.3275, 19.8187),
            180,
        );

        assert!(dest.is_domestic("Albania"));
        assert!(!dest.is_domestic("Greece"));
        // Grouping is exact string equality, so case matters.
        assert!(!dest.is_domestic("albania"));
    }
}
