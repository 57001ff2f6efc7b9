// src/search.rs
//
// Linear, case-insensitive substring scan over the dataset.
//
// Policy: one result per record, first match wins.
//   1. Member name (HG_NM) → Subject; staff fields are not looked at.
//   2. Otherwise STAFF, then SECRETARY, then SECRETARY2. Inside a field the
//      first comma-separated name containing the query is reported, and
//      later fields are skipped.
// Results keep dataset order; there is no ranking.

use thiserror::Error;

use crate::dataset::Dataset;
use crate::record::{Record, StaffRole};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("검색할 이름을 입력해주세요.")]
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchKind {
    /// The member's own name matched.
    Subject,
    /// A staff member matched; `name` is the trimmed piece from the field.
    Staff { role: StaffRole, name: String },
}

#[derive(Clone, Debug)]
pub struct MatchResult<'a> {
    /// Position in the dataset
    pub index: usize,
    pub record: &'a Record,
    pub kind: MatchKind,
}

impl MatchResult<'_> {
    pub fn staff_name(&self) -> Option<&str> {
        match &self.kind {
            MatchKind::Subject => None,
            MatchKind::Staff { name, .. } => Some(name.as_str()),
        }
    }
}

/// Lower-case and trim. Empty means there is nothing to search for.
pub fn normalize_query(raw: &str) -> Result<String, QueryError> {
    let q = raw.to_lowercase().trim().to_string();
    if q.is_empty() { Err(QueryError::Empty) } else { Ok(q) }
}

pub fn search<'a>(raw_query: &str, dataset: &'a Dataset) -> Result<Vec<MatchResult<'a>>, QueryError> {
    let needle = normalize_query(raw_query)?;

    let results: Vec<MatchResult<'a>> = dataset
        .records()
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            match_record(record, &needle).map(|kind| MatchResult { index, record, kind })
        })
        .collect();

    logd!("Search: query={:?} scanned={} matched={}", needle, dataset.len(), results.len());
    Ok(results)
}

/// Classify one record against an already-normalized needle.
pub fn match_record(record: &Record, needle: &str) -> Option<MatchKind> {
    if record.name().to_lowercase().contains(needle) {
        return Some(MatchKind::Subject);
    }

    StaffRole::PRIORITY.iter().find_map(|&role| {
        record
            .staff(role)
            .find(|name| name.to_lowercase().contains(needle))
            .map(|name| MatchKind::Staff { role, name: s!(name) })
    })
}
