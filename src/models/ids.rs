//! Transaction identifiers
//!
//! IDs are derived from the local wall clock at microsecond resolution and
//! formatted as a fixed-width 18 digit string (`%y%m%d%H%M%S` plus six
//! fractional digits), so they sort in creation order.

use chrono::{Duration, Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

/// Last timestamp handed out, so IDs stay strictly increasing in a process
static LAST_ISSUED: Mutex<Option<NaiveDateTime>> = Mutex::new(None);

const ID_FORMAT: &str = "%y%m%d%H%M%S%6f";

/// Unique identifier of a transaction
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a fresh ID from the current local time
    pub fn generate() -> Self {
        Self::generate_at(Local::now().naive_local())
    }

    /// Generate an ID for the given clock reading
    ///
    /// If `now` is not later than the previously issued timestamp (two calls
    /// inside the same microsecond, or the clock stepping backwards) the
    /// previous timestamp plus one microsecond is used instead.
    pub fn generate_at(now: NaiveDateTime) -> Self {
        let now = now.trunc_subsecs(6);
        let mut last = LAST_ISSUED.lock().unwrap_or_else(|e| e.into_inner());

        let issued = match *last {
            Some(prev) if now <= prev => prev + Duration::microseconds(1),
            _ => now,
        };
        *last = Some(issued);

        Self(issued.format(ID_FORMAT).to_string())
    }

    /// Wrap an existing ID string (e.g. one typed by the user)
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_generated_id_is_fixed_width_digits() {
        let id = TransactionId::generate();
        assert_eq!(id.as_str().len(), 18);
        assert!(id.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_ids_strictly_increase() {
        let ids: Vec<_> = (0..200).map(|_| TransactionId::generate()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_same_instant_does_not_collide() {
        // Far in the future so other tests' clock readings never exceed it
        let instant = NaiveDate::from_ymd_opt(2098, 6, 1)
            .unwrap()
            .and_hms_micro_opt(12, 0, 0, 999_999)
            .unwrap();

        let first = TransactionId::generate_at(instant);
        let second = TransactionId::generate_at(instant);

        assert_ne!(first, second);
        assert!(first < second);
        assert_eq!(second.as_str().len(), 18);
    }

    #[test]
    fn test_serde_transparent() {
        let id = TransactionId::new("240315101500123456");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"240315101500123456\"");
    }
}
