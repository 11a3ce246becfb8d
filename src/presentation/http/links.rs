// src/presentation/http/links.rs
use crate::application::{ports::render::PaginationRenderer, table::PageNav};

/// Renders table navigation as an RFC 8288 `Link` header value.
///
/// The `compact` view only links to the neighbouring pages; any other view
/// also links to the first and last page.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkHeaderRenderer;

pub const FULL_VIEW: &str = "full";
pub const COMPACT_VIEW: &str = "compact";

impl PaginationRenderer for LinkHeaderRenderer {
    fn render(&self, view: &str, nav: &PageNav<'_>) -> String {
        let page = nav.pagination;
        let rels = if view == COMPACT_VIEW {
            vec![("prev", page.previous_page()), ("next", page.next_page())]
        } else {
            vec![
                ("first", page.first_page()),
                ("prev", page.previous_page()),
                ("next", page.next_page()),
                ("last", page.last_page()),
            ]
        };

        rels.into_iter()
            .filter_map(|(rel, target)| {
                let href = nav.page_href(target?).ok()?;
                Some(format!("<{href}>; rel=\"{rel}\""))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
