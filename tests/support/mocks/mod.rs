// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod render;
pub mod repos;
pub mod time;

pub use render::StubRenderer;
pub use repos::{ConflictingWrites, InMemoryCategories};
pub use time::{FixedClock, fixed_now};
