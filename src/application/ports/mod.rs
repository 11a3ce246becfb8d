// src/application/ports/mod.rs
pub mod render;
pub mod time;

pub type ClockPort = dyn time::Clock;
pub type PaginationRendererPort = dyn render::PaginationRenderer;
