// src/application/ports/render.rs
use crate::application::table::PageNav;

/// Turns the navigation state of a table into whatever the caller shows
/// for page links.
pub trait PaginationRenderer: Send + Sync {
    fn render(&self, view: &str, nav: &PageNav<'_>) -> String;
}
