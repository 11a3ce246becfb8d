// tests/support/mocks/render.rs
use slugtable::application::{ports::render::PaginationRenderer, table::PageNav};

/// Writes `view:page/total` followed by the next page link, if any.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubRenderer;

impl PaginationRenderer for StubRenderer {
    fn render(&self, view: &str, nav: &PageNav<'_>) -> String {
        let page = nav.pagination;
        let next = page
            .next_page()
            .and_then(|next| nav.page_href(next).ok())
            .unwrap_or_default();
        format!(
            "{view}:{}/{} {next}",
            page.current_page(),
            page.total_pages()
        )
        .trim_end()
        .to_string()
    }
}
