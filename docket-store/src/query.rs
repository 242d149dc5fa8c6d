//! Search queries against the record store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One of the five search shapes the native store exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchQuery {
    /// Records at an exact time.
    At(NaiveDateTime),
    /// Records inside a closed time interval.
    Between(NaiveDateTime, NaiveDateTime),
    /// Records at an exact time with a given crime kind.
    AtWithKind(NaiveDateTime, String),
    /// Records inside an interval with a given crime kind.
    BetweenWithKind(NaiveDateTime, NaiveDateTime, String),
    /// All records of one criminal, by name.
    ByName(String),
}
