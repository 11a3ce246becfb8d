// src/application/table/adapter.rs
use std::sync::Arc;

use serde::Serialize;

use super::{config::TableConfig, request::TableRequest};
use crate::{
    application::{
        dto::TableSummary,
        error::{ApplicationError, ApplicationResult},
        ports::render::PaginationRenderer,
    },
    domain::{
        field::Schema,
        pagination::{Pagination, SortDirection, SortKey, TableSource},
    },
};

/// How a column header should show the current ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

/// Link for a column header that re-sorts the table when followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortLink {
    pub label: String,
    pub key: String,
    pub href: String,
    /// Direction requested by following `href`.
    pub direction: SortDirection,
    pub active: bool,
    pub indicator: SortIndicator,
}

/// What a [`PaginationRenderer`] needs to draw page links.
#[derive(Debug, Clone, Copy)]
pub struct PageNav<'a> {
    pub pagination: Pagination,
    request: &'a TableRequest,
    page_key: &'a str,
}

impl PageNav<'_> {
    pub fn path(&self) -> &str {
        self.request.path()
    }

    /// Link to `page`, keeping every other query parameter.
    pub fn page_href(&self, page: u64) -> ApplicationResult<String> {
        self.request.href(&[(self.page_key, page.to_string())])
    }
}

/// Paginated, sortable view over a [`TableSource`] driven by request
/// parameters.
pub struct TableAdapter<S: TableSource> {
    source: S,
    schema: Arc<Schema>,
    request: TableRequest,
    config: TableConfig,
    pagination: Pagination,
    sort: Option<SortKey>,
    direction: SortDirection,
}

impl<S: TableSource> TableAdapter<S> {
    /// Count the source and apply the requested ordering.
    ///
    /// A missing or unreadable direction orders descending. A sort key the
    /// source cannot resolve is a validation error.
    pub async fn new(
        mut source: S,
        schema: Arc<Schema>,
        request: TableRequest,
        config: TableConfig,
    ) -> ApplicationResult<Self> {
        let total_items = source.count().await?;
        let items_per_page = config.page_size(request.param(&config.limit_key));
        let requested_page = request
            .param(&config.page_key)
            .and_then(|page| page.trim().parse::<u64>().ok())
            .unwrap_or(1);
        let pagination = Pagination::new(total_items, items_per_page, requested_page);

        let direction = request
            .param(&config.order_key)
            .and_then(|how| how.parse::<SortDirection>().ok())
            .unwrap_or(SortDirection::Desc);
        let sort = request
            .param(&config.sort_key)
            .map(SortKey::parse)
            .transpose()?;

        if let Some(key) = &sort {
            source.order_by(key, direction)?;
        }

        tracing::debug!(
            model = source.model(),
            total_items,
            items_per_page,
            page = pagination.current_page(),
            sort = ?sort,
            %direction,
            "table prepared"
        );

        Ok(Self {
            source,
            schema,
            request,
            config,
            pagination,
            sort,
            direction,
        })
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn current_sort(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    pub fn current_direction(&self) -> SortDirection {
        self.direction
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary::new(&self.pagination, self.sort.as_ref(), self.direction)
    }

    pub async fn items(&self) -> ApplicationResult<Vec<S::Row>> {
        let rows = self
            .source
            .fetch(self.pagination.offset(), self.pagination.limit())
            .await?;
        Ok(rows)
    }

    /// Build the header link for `column`.
    ///
    /// With `foreign`, a relation column sorts by that field of the related
    /// model, provided the related model has it and it is sortable. The active column links to
    /// the opposite of the current direction; any other column links to the
    /// configured default.
    pub fn sort(&self, column: &str, foreign: Option<&str>) -> ApplicationResult<SortLink> {
        let model = self.source.model();
        let meta = self.schema.model(model).ok_or_else(|| {
            ApplicationError::infrastructure(format!("model `{model}` is not registered"))
        })?;
        let field = meta
            .field(column)
            .filter(|field| field.sortable)
            .ok_or_else(|| ApplicationError::validation(format!("unknown sort column: {column}")))?;

        let key = foreign
            .and_then(|foreign| {
                let related = field.kind.related_model()?;
                self.schema
                    .model(related)?
                    .field(foreign)
                    .filter(|target| target.sortable)?;
                Some(SortKey::Foreign {
                    model: related.to_string(),
                    field: foreign.to_string(),
                })
            })
            .unwrap_or_else(|| SortKey::Column(field.name.to_string()));

        let active = self.sort.as_ref() == Some(&key);
        let (direction, indicator) = if active {
            let indicator = match self.direction {
                SortDirection::Asc => SortIndicator::Ascending,
                SortDirection::Desc => SortIndicator::Descending,
            };
            (self.direction.toggled(), indicator)
        } else {
            (self.config.default_direction, SortIndicator::Unsorted)
        };

        let href = self.request.href(&[
            (self.config.sort_key.as_str(), key.to_string()),
            (self.config.order_key.as_str(), direction.to_string()),
        ])?;

        Ok(SortLink {
            label: field.label.to_string(),
            key: key.to_string(),
            href,
            direction,
            active,
            indicator,
        })
    }

    pub fn nav(&self) -> PageNav<'_> {
        PageNav {
            pagination: self.pagination,
            request: &self.request,
            page_key: &self.config.page_key,
        }
    }

    pub fn render<R: PaginationRenderer + ?Sized>(&self, renderer: &R, view: &str) -> String {
        renderer.render(view, &self.nav())
    }
}
