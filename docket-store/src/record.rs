//! Record types crossing the store boundary.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A full criminal record, as submitted for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriminalRecord {
    pub name: String,
    pub id: String,
    pub gender: String,
    pub birth: String,
    /// Crime classification (free-form, e.g. "Theft").
    pub kind: String,
    pub location: String,
    pub time: NaiveDateTime,
    pub description: String,
}

/// The seven displayed fields of one search hit.
///
/// A display snapshot, decoded verbatim from the native result buffer -
/// the time stays a string because the native row format owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub name: String,
    pub id: String,
    pub gender: String,
    pub birth: String,
    pub kind: String,
    pub location: String,
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn record_serde_round_trip() {
        let record = CriminalRecord {
            name: "Alice".into(),
            id: "ID1".into(),
            gender: "F".into(),
            birth: "2000-01-01".into(),
            kind: "Theft".into(),
            location: "NYC".into(),
            time: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            description: "shoplifting".into(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: CriminalRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
