//! Challenge record and its category tags.
//!
//! Tags serialize as uppercase strings. Deserialization ignores case, the
//! way the game front end compares them.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

/// Whether a prompt asks for an answer or an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChallengeType {
    Truth,
    Dare,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    #[default]
    Simple,
    Normal,
    Extreme,
}

/// Locale tag attached to every record. No translation happens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    En,
    Cn,
    #[default]
    My,
}

/// Parse a tag by its variant name, ignoring ASCII case.
fn deserialize_tag<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: ValueEnum,
{
    let raw = String::deserialize(deserializer)?;
    T::from_str(&raw, true).map_err(serde::de::Error::custom)
}

impl<'de> Deserialize<'de> for ChallengeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_tag(deserializer)
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_tag(deserializer)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_tag(deserializer)
    }
}

impl ChallengeType {
    pub fn as_str(self) -> &'static str {
        match self {
            ChallengeType::Truth => "TRUTH",
            ChallengeType::Dare => "DARE",
        }
    }
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Simple => "SIMPLE",
            Difficulty::Normal => "NORMAL",
            Difficulty::Extreme => "EXTREME",
        }
    }
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Cn => "CN",
            Language::My => "MY",
        }
    }
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One entry of the output array. Field order here is the serialized order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ChallengeType,
    pub difficulty: Difficulty,
    pub language: Language,
    pub content: String,
}

impl Record {
    /// Numeric value of the id, if it is a plain decimal numeral.
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.parse().ok()
    }
}
