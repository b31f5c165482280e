//! Inspection of an existing record file: filtering and per-tag counts.
//!
//! Filtering mirrors how the game picks challenges: by type, difficulty and
//! language. Duplicate ids are reported as found and never renumbered.

use std::collections::BTreeMap;

use crate::core::record::{ChallengeType, Difficulty, Language, Record};
use crate::core::util::{duplicates, filter_by_query};

/// Criteria for selecting records. `None` matches anything.
#[derive(Clone, Debug, Default)]
pub struct RecordFilter {
    pub kind: Option<ChallengeType>,
    pub difficulty: Option<Difficulty>,
    pub language: Option<Language>,
    /// Case-insensitive substring of the id or content.
    pub query: Option<String>,
}

impl RecordFilter {
    fn matches_tags(&self, record: &Record) -> bool {
        self.kind.is_none_or(|k| k == record.kind)
            && self.difficulty.is_none_or(|d| d == record.difficulty)
            && self.language.is_none_or(|l| l == record.language)
    }
}

pub fn filter_records<'a>(records: &'a [Record], filter: &RecordFilter) -> Vec<&'a Record> {
    let query = filter.query.as_deref().unwrap_or("");
    filter_by_query(records, query, |r| (r.id.as_str(), r.content.as_str()))
        .into_iter()
        .filter(|r| filter.matches_tags(r))
        .collect()
}

/// Counts over a set of records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub by_type: BTreeMap<ChallengeType, usize>,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
    pub by_language: BTreeMap<Language, usize>,
    /// Smallest and largest numeric id. Non-numeric ids are skipped.
    pub id_range: Option<(u64, u64)>,
    pub duplicate_ids: Vec<String>,
}

impl Summary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let records: Vec<&Record> = records.into_iter().collect();
        let mut summary = Summary {
            total: records.len(),
            ..Default::default()
        };
        for r in &records {
            *summary.by_type.entry(r.kind).or_default() += 1;
            *summary.by_difficulty.entry(r.difficulty).or_default() += 1;
            *summary.by_language.entry(r.language).or_default() += 1;
            if let Some(id) = r.numeric_id() {
                summary.id_range = Some(match summary.id_range {
                    Some((lo, hi)) => (lo.min(id), hi.max(id)),
                    None => (id, id),
                });
            }
        }
        summary.duplicate_ids = duplicates(records.iter().map(|r| r.id.as_str()))
            .into_iter()
            .map(str::to_string)
            .collect();
        summary
    }

    /// Plain-text report, one fact per line.
    pub fn render(&self) -> String {
        fn counts<K: std::fmt::Display>(map: &BTreeMap<K, usize>) -> String {
            if map.is_empty() {
                return "none".to_string();
            }
            map.iter()
                .map(|(k, n)| format!("{}={}", k, n))
                .collect::<Vec<_>>()
                .join(" ")
        }

        let ids = match self.id_range {
            Some((lo, hi)) => format!("{}..={}", lo, hi),
            None => "none".to_string(),
        };
        let dupes = if self.duplicate_ids.is_empty() {
            "none".to_string()
        } else {
            self.duplicate_ids.join(", ")
        };
        format!(
            "Records:     {}\nTypes:       {}\nDifficulty:  {}\nLanguage:    {}\nIds:         {}\nDuplicates:  {}",
            self.total,
            counts(&self.by_type),
            counts(&self.by_difficulty),
            counts(&self.by_language),
            ids,
            dupes
        )
    }
}
