use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Output record: one row per user in the summary table
///
/// Field order is the column order of every sink. `last_added_date`
/// serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub user_id: u64,
    pub last_added_date: NaiveDate,
    pub top_category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_serializes_as_plain_day() {
        let summary = UserSummary {
            user_id: 1,
            last_added_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            top_category: "clothing".to_string(),
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"2024-01-02\""));
    }

    #[test]
    fn round_trips_through_serde() {
        let summary = UserSummary {
            user_id: 42,
            last_added_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            top_category: "electronics".to_string(),
        };

        let json = serde_json::to_string(&summary).unwrap();
        let back: UserSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
    }
}
