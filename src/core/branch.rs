use crate::utils::error::{DustyError, Result};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// Author date layout produced by `%(authordate:iso)`.
pub const AUTHOR_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// A local branch as seen by one scan. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchRecord {
    pub name: String,
    pub author: String,
    pub age_days: i64,
    pub merged: bool,
    pub upstream: Option<String>,
}

/// One successfully parsed `for-each-ref` line, before merge status is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefLine {
    pub name: String,
    pub author: String,
    pub author_date: DateTime<FixedOffset>,
    pub upstream: Option<String>,
}

impl RefLine {
    pub fn parse(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() < 3 {
            return Err(DustyError::malformed_record(
                line,
                format!("expected at least 3 fields, found {}", parts.len()),
            ));
        }

        let author_date = DateTime::parse_from_str(parts[2].trim(), AUTHOR_DATE_FORMAT)
            .map_err(|e| DustyError::malformed_record(line, format!("bad author date: {}", e)))?;

        let upstream = parts
            .get(3)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        Ok(Self {
            name: parts[0].trim().to_string(),
            author: parts[1].to_string(),
            author_date,
            upstream,
        })
    }

    pub fn into_record(self, now: DateTime<Utc>, merged: bool) -> BranchRecord {
        BranchRecord {
            age_days: age_in_days(self.author_date.with_timezone(&Utc), now),
            name: self.name,
            author: self.author,
            merged,
            upstream: self.upstream,
        }
    }
}

/// Whole days between `authored` and `now`, rounding half a day up.
/// Author dates in the future count as zero days old.
pub fn age_in_days(authored: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let seconds = (now - authored).num_seconds();
    if seconds <= 0 {
        return 0;
    }

    const HALF_DAY: i64 = 12 * 60 * 60;
    const DAY: i64 = 2 * HALF_DAY;
    (seconds + HALF_DAY) / DAY
}

impl BranchRecord {
    /// Plain-text line used by the list output.
    pub fn summary_line(&self) -> String {
        format!(
            "{} - {}, Age: {} days, Merged: {}",
            self.name, self.author, self.age_days, self.merged
        )
    }
}
