// src/domain/slug/mod.rs
pub mod config;
pub mod normalizer;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use config::{SlugConfig, SlugMatchStrategy};
pub use normalizer::normalize;
pub use repository::SlugScope;
pub use services::SlugService;
pub use value_objects::{Slug, SlugPattern};
