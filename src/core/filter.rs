use crate::config::Config;
use crate::core::branch::BranchRecord;

/// Age and merge-status predicate applied to a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchFilter {
    /// Records must be strictly older than this many days.
    pub min_age_exclusive: i64,
    pub merged_only: bool,
}

impl BranchFilter {
    pub fn new(min_age_exclusive: i64, merged_only: bool) -> Self {
        Self {
            min_age_exclusive,
            merged_only,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.min_age_days, config.merged_only)
    }

    pub fn matches(&self, record: &BranchRecord) -> bool {
        record.age_days > self.min_age_exclusive && (!self.merged_only || record.merged)
    }

    /// Keeps the matching records, preserving their order.
    pub fn apply(&self, records: &[BranchRecord]) -> Vec<BranchRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
