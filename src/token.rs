//! Opaque ownership tokens for path registrations.

use std::fmt;

/// An opaque ownership handle supplied by callers when registering and
/// unregistering paths.
///
/// The tree stores tokens and compares them for identity; it never
/// interprets the raw value. Callers are responsible for minting values
/// that identify the owning subsystem (a subscription id, a watcher handle,
/// whatever fits). The same token may be registered on one node several
/// times; each registration is a distinct entry in the node's multiset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerToken(u64);

impl OwnerToken {
    /// Create a token from a raw caller-chosen value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value this token was created from.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OwnerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_compare_by_raw_value() {
        assert_eq!(OwnerToken::from_raw(7), OwnerToken::from_raw(7));
        assert_ne!(OwnerToken::from_raw(7), OwnerToken::from_raw(8));
    }

    #[test]
    fn raw_value_round_trips() {
        assert_eq!(OwnerToken::from_raw(42).as_raw(), 42);
    }

    #[test]
    fn display_formatting() {
        assert_eq!(OwnerToken::from_raw(3).to_string(), "owner:3");
    }
}
