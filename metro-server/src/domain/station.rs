//! Station identifier type.

use std::borrow::Borrow;
use std::fmt;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// A station name, unique across the network.
///
/// Names are stored trimmed and are never empty. This type guarantees
/// that any `Station` value is valid by construction.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Station;
///
/// let station = Station::parse("  Rajiv Chowk ").unwrap();
/// assert_eq!(station.as_str(), "Rajiv Chowk");
///
/// // Blank names are rejected
/// assert!(Station::parse("").is_err());
/// assert!(Station::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(String);

impl Station {
    /// Parse a station name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStation {
                reason: "must not be blank",
            });
        }

        Ok(Station(trimmed.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_station() {
        assert!(Station::parse("Kashmere Gate").is_ok());
        assert!(Station::parse("A").is_ok());
        assert!(Station::parse("Sector 52 Noida").is_ok());
    }

    #[test]
    fn parse_trims_whitespace() {
        let station = Station::parse("\tHauz Khas  ").unwrap();
        assert_eq!(station.as_str(), "Hauz Khas");
    }

    #[test]
    fn reject_blank() {
        assert!(Station::parse("").is_err());
        assert!(Station::parse(" ").is_err());
        assert!(Station::parse("\n\t").is_err());
    }

    #[test]
    fn case_is_preserved() {
        let a = Station::parse("rajiv chowk").unwrap();
        let b = Station::parse("Rajiv Chowk").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn display_and_debug() {
        let station = Station::parse("Dwarka").unwrap();
        assert_eq!(format!("{}", station), "Dwarka");
        assert_eq!(format!("{:?}", station), "Station(Dwarka)");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut stations = vec![
            Station::parse("Noida").unwrap(),
            Station::parse("Botanical Garden").unwrap(),
            Station::parse("Dwarka").unwrap(),
        ];
        stations.sort();
        let names: Vec<&str> = stations.iter().map(Station::as_str).collect();
        assert_eq!(names, vec!["Botanical Garden", "Dwarka", "Noida"]);
    }

    #[test]
    fn hash_lookup_by_str() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::parse("Dwarka").unwrap());
        assert!(set.contains("Dwarka"));
        assert!(!set.contains("Noida"));
    }
}
