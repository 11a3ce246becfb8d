// src/domain/slug/value_objects.rs
use super::config::SlugMatchStrategy;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// The set of stored slugs a candidate competes with.
#[derive(Debug, Clone, Copy)]
pub struct SlugPattern<'a> {
    candidate: &'a str,
    separator: char,
    strategy: SlugMatchStrategy,
}

impl<'a> SlugPattern<'a> {
    pub fn new(candidate: &'a str, separator: char, strategy: SlugMatchStrategy) -> Self {
        Self {
            candidate,
            separator,
            strategy,
        }
    }

    pub fn candidate(&self) -> &'a str {
        self.candidate
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn strategy(&self) -> SlugMatchStrategy {
        self.strategy
    }

    pub fn matches(&self, slug: &str) -> bool {
        match self.strategy {
            SlugMatchStrategy::Prefix => slug.starts_with(self.candidate),
            SlugMatchStrategy::Family => {
                if slug == self.candidate {
                    return true;
                }
                slug.strip_prefix(self.candidate)
                    .and_then(|rest| rest.strip_prefix(self.separator))
                    .is_some_and(|suffix| {
                        !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit())
                    })
            }
        }
    }
}
