// src/domain/slug/config.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How existing slugs are counted when a candidate is disambiguated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugMatchStrategy {
    /// Every stored slug starting with the candidate counts, including
    /// unrelated ones such as `hello-world-xyz` for `hello-world`.
    Prefix,
    /// Only the candidate itself and `candidate<sep><digits>` count.
    #[default]
    Family,
}

impl SlugMatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Family => "family",
        }
    }
}

impl fmt::Display for SlugMatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlugMatchStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prefix" => Ok(Self::Prefix),
            "family" => Ok(Self::Family),
            other => Err(DomainError::Validation(format!(
                "unknown slug match strategy: {other}"
            ))),
        }
    }
}

const DEFAULT_SEPARATOR: char = '-';
const DEFAULT_MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugConfig {
    separator: char,
    hierarchy_separator: Option<char>,
    ascii_only: bool,
    strategy: SlugMatchStrategy,
    max_attempts: u32,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            hierarchy_separator: None,
            ascii_only: true,
            strategy: SlugMatchStrategy::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SlugConfig {
    pub fn new(separator: char) -> DomainResult<Self> {
        validate_separator(separator, "separator")?;
        Ok(Self {
            separator,
            ..Self::default()
        })
    }

    pub fn with_hierarchy_separator(mut self, hierarchy_separator: char) -> DomainResult<Self> {
        validate_separator(hierarchy_separator, "hierarchy separator")?;
        if hierarchy_separator == self.separator {
            return Err(DomainError::Validation(
                "hierarchy separator must differ from the separator".into(),
            ));
        }
        self.hierarchy_separator = Some(hierarchy_separator);
        Ok(self)
    }

    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.ascii_only = ascii_only;
        self
    }

    pub fn with_strategy(mut self, strategy: SlugMatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// At least one attempt is always made.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn hierarchy_separator(&self) -> Option<char> {
        self.hierarchy_separator
    }

    pub fn ascii_only(&self) -> bool {
        self.ascii_only
    }

    pub fn strategy(&self) -> SlugMatchStrategy {
        self.strategy
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn normalize(&self, raw: &str) -> String {
        super::normalizer::normalize(raw, self)
    }
}

fn validate_separator(value: char, what: &str) -> DomainResult<()> {
    if value.is_alphanumeric() || value.is_whitespace() {
        return Err(DomainError::Validation(format!(
            "{what} must be a punctuation character, got {value:?}"
        )));
    }
    Ok(())
}
