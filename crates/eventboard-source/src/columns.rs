//! Header names of the required columns.

use serde::{Deserialize, Serialize};

use crate::error::{SourceError, SourceResult};

/// Maps each record field to the header it is read from.
///
/// The defaults are the Korean headers of the community spreadsheet export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub title: String,
    pub organizer_name: String,
    pub organizer_id: String,
    pub start_date: String,
    pub end_date: String,
    pub link: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            title: "제목".to_string(),
            organizer_name: "주최자_닉".to_string(),
            organizer_id: "주최자_식별코드".to_string(),
            start_date: "시작일".to_string(),
            end_date: "종료일".to_string(),
            link: "링크".to_string(),
        }
    }
}

impl ColumnNames {
    /// All required headers, in field order.
    pub fn required(&self) -> [&str; 6] {
        [
            self.title.as_str(),
            self.organizer_name.as_str(),
            self.organizer_id.as_str(),
            self.start_date.as_str(),
            self.end_date.as_str(),
            self.link.as_str(),
        ]
    }

    /// Returns true if `header` names one of the required fields.
    pub fn is_required(&self, header: &str) -> bool {
        self.required().contains(&header)
    }

    /// Rejects empty or repeated names.
    pub fn validate(&self) -> SourceResult<()> {
        let required = self.required();
        for (i, name) in required.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(SourceError::configuration("column names must not be empty"));
            }
            if required[..i].contains(name) {
                return Err(SourceError::configuration(format!(
                    "column `{}` is mapped to more than one field",
                    name
                )));
            }
        }
        Ok(())
    }
}
