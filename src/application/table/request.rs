// src/application/table/request.rs
use crate::application::error::{ApplicationError, ApplicationResult};

/// Path and query parameters of the request a table is rendered for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRequest {
    path: String,
    query: Vec<(String, String)>,
}

impl TableRequest {
    pub fn new(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    pub fn from_parts(path: &str, raw_query: Option<&str>) -> ApplicationResult<Self> {
        let query = match raw_query.filter(|raw| !raw.is_empty()) {
            Some(raw) => serde_urlencoded::from_str::<Vec<(String, String)>>(raw)
                .map_err(|err| ApplicationError::validation(format!("malformed query: {err}")))?,
            None => Vec::new(),
        };
        Ok(Self::new(path, query))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Last non-empty value given for `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .rev()
            .find(|(name, value)| name == key && !value.is_empty())
            .map(|(_, value)| value.as_str())
    }

    /// Link to the same path with `overrides` applied to the current query.
    ///
    /// Overridden keys keep the position of their first occurrence and lose
    /// any duplicates; new keys are appended.
    pub fn href(&self, overrides: &[(&str, String)]) -> ApplicationResult<String> {
        let mut pairs: Vec<(String, String)> = Vec::with_capacity(self.query.len() + overrides.len());

        for (name, value) in &self.query {
            match overrides.iter().find(|(key, _)| *key == name.as_str()) {
                Some(_) if pairs.iter().any(|(seen, _)| seen == name) => {}
                Some((_, replacement)) => pairs.push((name.clone(), replacement.clone())),
                None => pairs.push((name.clone(), value.clone())),
            }
        }
        for (key, value) in overrides {
            if !pairs.iter().any(|(name, _)| name == *key) {
                pairs.push(((*key).to_string(), value.clone()));
            }
        }

        if pairs.is_empty() {
            return Ok(self.path.clone());
        }

        let query = serde_urlencoded::to_string(&pairs)
            .map_err(|err| ApplicationError::infrastructure(format!("query encoding failed: {err}")))?;
        Ok(format!("{}?{}", self.path, query))
    }
}
