// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for timestamps and slug fallbacks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
