// src/domain/pagination/sort.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Value used in query strings and SQL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(DomainError::Validation(format!("invalid sort direction: {s}")))
        }
    }
}

/// Column a table is ordered by.
///
/// Plain keys name a field of the listed model. Keys of the form
/// `:model.field` name a field of a related model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortKey {
    Column(String),
    Foreign { model: String, field: String },
}

impl SortKey {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::Validation("sort key cannot be empty".into()));
        }

        match raw.strip_prefix(':') {
            Some(foreign) => match foreign.split_once('.') {
                Some((model, field)) if !model.is_empty() && !field.is_empty() => {
                    Ok(Self::Foreign {
                        model: model.to_string(),
                        field: field.to_string(),
                    })
                }
                _ => Err(DomainError::Validation(format!(
                    "malformed foreign sort key: {raw}"
                ))),
            },
            None => Ok(Self::Column(raw.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(name) => f.write_str(name),
            Self::Foreign { model, field } => write!(f, ":{model}.{field}"),
        }
    }
}
