//! Record builder: maps the truth and dare lists onto numbered records.

use crate::core::record::{ChallengeType, Difficulty, Language, Record};

/// First id assigned when nothing else is configured.
pub const DEFAULT_ID_START: u64 = 1601;

/// Counter origin and the constant tags stamped on every record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    pub id_start: u64,
    pub difficulty: Difficulty,
    pub language: Language,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            id_start: DEFAULT_ID_START,
            difficulty: Difficulty::default(),
            language: Language::default(),
        }
    }
}

/// Error building the record list.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("{count} records starting at id {start} would exceed the largest id")]
    IdOverflow { start: u64, count: usize },
}

/// Build records for all truths, then all dares, numbering them consecutively
/// from `options.id_start`. The counter is not reset between the two lists.
///
/// Fails if the last id would not fit in a `u64`.
pub fn build_records<T, D>(
    truths: &[T],
    dares: &[D],
    options: &BuildOptions,
) -> Result<Vec<Record>, BuildError>
where
    T: AsRef<str>,
    D: AsRef<str>,
{
    let count = truths.len() + dares.len();
    if count == 0 {
        return Ok(Vec::new());
    }
    let last_id = u64::try_from(count - 1)
        .ok()
        .and_then(|offset| options.id_start.checked_add(offset))
        .ok_or(BuildError::IdOverflow {
            start: options.id_start,
            count,
        })?;

    let truths = truths
        .iter()
        .map(|t| (ChallengeType::Truth, t.as_ref()));
    let dares = dares.iter().map(|d| (ChallengeType::Dare, d.as_ref()));

    // Inclusive range: never steps past `last_id`, even at u64::MAX.
    let records = truths
        .chain(dares)
        .zip(options.id_start..=last_id)
        .map(|((kind, content), id)| Record {
            id: id.to_string(),
            kind,
            difficulty: options.difficulty,
            language: options.language,
            content: content.to_string(),
        })
        .collect();
    Ok(records)
}
