use crate::domain::analysis::Priority;
use crate::domain::test_case::TestCaseRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Search and priority filter over a generated list. Empty fields match everything.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TestCaseQuery {
    pub search: Option<String>,
    pub priority: Option<Priority>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriorityStats {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    pub total: usize,
    pub estimated_minutes: u32,
    pub component_count: usize,
}

impl TestCaseQuery {
    pub fn matches(&self, record: &TestCaseRecord) -> bool {
        let term = self
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();
        let matches_search = term.is_empty()
            || record.summary.to_lowercase().contains(&term)
            || record.description.to_lowercase().contains(&term);
        let matches_priority = self.priority.map_or(true, |p| record.priority == p);
        matches_search && matches_priority
    }

    pub fn apply(&self, records: &[TestCaseRecord]) -> Vec<TestCaseRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

pub fn priority_stats(records: &[TestCaseRecord]) -> PriorityStats {
    records
        .iter()
        .fold(PriorityStats::default(), |mut stats, record| {
            match record.priority {
                Priority::High => stats.high += 1,
                Priority::Medium => stats.medium += 1,
                Priority::Low => stats.low += 1,
            }
            stats
        })
}

/// Leading integer of an estimate such as `"7 dakika"`; anything else counts as zero.
fn estimate_minutes(estimated_time: &str) -> u32 {
    estimated_time
        .split_whitespace()
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

pub fn summarize(records: &[TestCaseRecord]) -> ListSummary {
    let components: HashSet<&str> = records.iter().map(|r| r.component.as_str()).collect();
    ListSummary {
        total: records.len(),
        estimated_minutes: records
            .iter()
            .map(|r| estimate_minutes(&r.estimated_time))
            .sum(),
        component_count: components.len(),
    }
}
