//! Route identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a route can be travelled in both directions.
///
/// Directionality is a purely syntactic property of the route id: an id
/// consisting only of decimal digits names a bidirectional route, anything
/// else is unidirectional (travelable only in increasing stop order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Bidirectional,
    Unidirectional,
}

impl RouteKind {
    /// Returns the lowercase label used in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::Bidirectional => "bidirectional",
            RouteKind::Unidirectional => "unidirectional",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route identifier.
///
/// Route ids are opaque strings ("71", "A1", "G43") taken verbatim from the
/// backing data. The id also encodes the route's directionality; see
/// [`RouteId::kind`].
///
/// # Examples
///
/// ```
/// use transit_server::domain::RouteId;
///
/// assert!(RouteId::new("71").is_bidirectional());
/// assert!(!RouteId::new("A1").is_bidirectional());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    /// Create a route id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        RouteId(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the route's directionality from its id.
    ///
    /// The id is trimmed first; a non-empty remainder of ASCII decimal
    /// digits means bidirectional.
    pub fn kind(&self) -> RouteKind {
        let id = self.0.trim();
        if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
            RouteKind::Bidirectional
        } else {
            RouteKind::Unidirectional
        }
    }

    /// Convenience for `kind() == RouteKind::Bidirectional`.
    pub fn is_bidirectional(&self) -> bool {
        self.kind() == RouteKind::Bidirectional
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        RouteId::new(id)
    }
}
