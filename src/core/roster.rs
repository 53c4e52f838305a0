use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::core::Record;
use crate::error::{MatchEngineError, Result};

/// Deserialize year from string or int (CSV/JSON exports disagree)
fn deserialize_year<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearValue {
        Int(i32),
        String(String),
    }

    match YearValue::deserialize(deserializer)? {
        YearValue::Int(i) => Ok(i),
        YearValue::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::custom(format!("Invalid year string: {}", s))),
    }
}

/// One roster row as exported by the dataset layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRow {
    pub name: String,

    /// Year of birth
    #[serde(alias = "year_of_birth", alias = "birth_year")]
    #[serde(deserialize_with = "deserialize_year")]
    pub year: i32,
}

impl From<PlayerRow> for Record<i32> {
    fn from(row: PlayerRow) -> Self {
        Record::new(row.name, row.year)
    }
}

/// Parse a JSON array of roster rows into records.
///
/// Rows with a blank name are rejected here so the index never sees them.
pub fn load_roster<R: Read>(reader: R) -> Result<Vec<Record<i32>>> {
    let rows: Vec<PlayerRow> = serde_json::from_reader(reader)?;

    rows.into_iter()
        .enumerate()
        .map(|(row, player)| {
            if player.name.trim().is_empty() {
                return Err(MatchEngineError::InvalidRecord {
                    row,
                    message: "empty name".to_string(),
                });
            }
            Ok(Record::from(player))
        })
        .collect()
}
