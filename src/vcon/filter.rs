//! Party-based search over conversation records.
//!
//! Matching is exact and case-sensitive. A record matches when any of its
//! parties has the requested name or the requested telephone number; the two
//! fields are checked independently (OR), never combined on one party (AND).

use url::form_urlencoded;

use super::store::VconSource;
use super::types::{Party, Vcon};

/// Search criteria taken from the `name` and `tel` query parameters.
///
/// An absent or empty field never matches anything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartyFilter {
    /// Exact party name to look for.
    pub name: Option<String>,
    /// Exact telephone number to look for.
    pub tel: Option<String>,
}

impl PartyFilter {
    /// Create a filter. Empty strings are treated as absent.
    #[must_use]
    pub fn new(name: Option<String>, tel: Option<String>) -> Self {
        Self {
            name: name.filter(|s| !s.is_empty()),
            tel: tel.filter(|s| !s.is_empty()),
        }
    }

    /// Build a filter from a raw URL query string.
    ///
    /// Pairs containing `;` or a bad `%` escape are dropped before the
    /// first occurrence of a repeated key is taken. Unknown keys are ignored,
    /// so this never fails.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        let mut name = None;
        let mut tel = None;

        for (key, value) in well_formed_pairs(raw.unwrap_or_default()) {
            match key.as_str() {
                "name" if name.is_none() => name = Some(value),
                "tel" if tel.is_none() => tel = Some(value),
                _ => {}
            }
        }

        Self::new(name, tel)
    }

    /// Whether neither field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.tel.is_none()
    }

    /// Whether a single party satisfies either field.
    #[must_use]
    pub fn matches_party(&self, party: &Party) -> bool {
        self.name.as_deref().is_some_and(|n| party.name == n)
            || self.tel.as_deref().is_some_and(|t| party.tel == t)
    }

    /// Whether any party of `vcon` satisfies the filter.
    #[must_use]
    pub fn matches(&self, vcon: &Vcon) -> bool {
        vcon.parties.iter().any(|p| self.matches_party(p))
    }
}

/// Decode the `&`-separated pairs of `raw` that are well formed.
fn well_formed_pairs(raw: &str) -> impl Iterator<Item = (String, String)> + '_ {
    raw.split('&')
        .filter(|segment| !segment.is_empty() && !segment.contains(';'))
        .filter(|segment| has_valid_escapes(segment))
        .filter_map(|segment| form_urlencoded::parse(segment.as_bytes()).next())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
}

/// Every `%` must be followed by two hex digits.
fn has_valid_escapes(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'%')
        .all(|(i, _)| {
            bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
        })
}

/// Return the records of `source` matching `filter`, in store order.
///
/// Each record appears at most once regardless of how many parties match.
#[must_use]
pub fn search(source: &dyn VconSource, filter: &PartyFilter) -> Vec<Vcon> {
    if filter.is_empty() {
        return Vec::new();
    }
    source
        .all()
        .iter()
        .filter(|v| filter.matches(v))
        .cloned()
        .collect()
}
