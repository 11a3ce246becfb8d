// src/config.rs
use crate::application::table::TableConfig;
use crate::domain::slug::{SlugConfig, SlugMatchStrategy};
use std::{env, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    slug: SlugConfig,
    table: TableConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://slugtable.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Every key is optional;
    /// a key that is present must parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let slug = slug_config(&lookup)?;

        let mut table = TableConfig::default();
        if let Some(max) = parse_var::<u64>(&lookup, "TABLE_MAX_ITEMS_PER_PAGE")? {
            table = table.with_max_items_per_page(max);
        }
        if let Some(per_page) = parse_var::<u64>(&lookup, "TABLE_ITEMS_PER_PAGE")? {
            table = table.with_items_per_page(per_page);
        }
        if table.items_per_page > table.max_items_per_page {
            return Err(ConfigError::Invalid(format!(
                "TABLE_ITEMS_PER_PAGE ({}) exceeds TABLE_MAX_ITEMS_PER_PAGE ({})",
                table.items_per_page, table.max_items_per_page
            )));
        }

        Ok(Self {
            database_url,
            listen_addr,
            slug,
            table,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn slug_config(&self) -> &SlugConfig {
        &self.slug
    }

    pub fn table_config(&self) -> &TableConfig {
        &self.table
    }
}

fn slug_config<F>(lookup: &F) -> Result<SlugConfig, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let mut config = match parse_char(lookup, "SLUG_SEPARATOR")? {
        Some(separator) => SlugConfig::new(separator).map_err(invalid("SLUG_SEPARATOR"))?,
        None => SlugConfig::default(),
    };

    if let Some(hierarchy) = parse_char(lookup, "SLUG_HIERARCHY_SEPARATOR")? {
        config = config
            .with_hierarchy_separator(hierarchy)
            .map_err(invalid("SLUG_HIERARCHY_SEPARATOR"))?;
    }
    if let Some(ascii_only) = parse_bool(lookup, "SLUG_ASCII_ONLY")? {
        config = config.with_ascii_only(ascii_only);
    }
    if let Some(strategy) = parse_var::<SlugMatchStrategy>(lookup, "SLUG_MATCH_STRATEGY")? {
        config = config.with_strategy(strategy);
    }
    if let Some(attempts) = parse_var::<u32>(lookup, "SLUG_MAX_ATTEMPTS")? {
        config = config.with_max_attempts(attempts);
    }

    Ok(config)
}

fn invalid<E: std::fmt::Display>(key: &'static str) -> impl Fn(E) -> ConfigError {
    move |err| ConfigError::Invalid(format!("{key}: {err}"))
}

fn parse_var<T>(
    lookup: &impl Fn(&'static str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| raw.trim().parse::<T>().map_err(invalid(key)))
        .transpose()
}

fn parse_char(
    lookup: &impl Fn(&'static str) -> Option<String>,
    key: &'static str,
) -> Result<Option<char>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => Err(ConfigError::Invalid(format!(
            "{key}: expected a single character, got {raw:?}"
        ))),
    }
}

fn parse_bool(
    lookup: &impl Fn(&'static str) -> Option<String>,
    key: &'static str,
) -> Result<Option<bool>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        other => Err(ConfigError::Invalid(format!("{key}: not a boolean: {other}"))),
    }
}
