// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryCategories};
use axum::{
    Router,
    body::{self, Body},
    http::{HeaderMap, Method, Request, StatusCode},
};
use serde_json::Value;
use slugtable::{
    application::{services::ApplicationServices, table::TableConfig},
    domain::slug::SlugConfig,
    infrastructure::{
        database,
        repositories::{SqliteCategoryReadRepository, SqliteCategoryWriteRepository},
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::sync::Arc;
use tower::util::ServiceExt;

/// Slug settings with `/` nesting children under their parent.
pub fn nested_slug_config() -> SlugConfig {
    SlugConfig::default()
        .with_hierarchy_separator('/')
        .expect("valid hierarchy separator")
}

pub fn memory_services(store: &InMemoryCategories, slug_config: SlugConfig) -> ApplicationServices {
    ApplicationServices::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(FixedClock),
        slug_config,
        TableConfig::default(),
    )
}

/// Router over a migrated in-memory SQLite database.
pub async fn sqlite_router(slug_config: SlugConfig) -> Router {
    let pool = database::init_memory_pool()
        .await
        .expect("in-memory sqlite pool");
    database::run_migrations(&pool)
        .await
        .expect("migrations apply");
    let pool = Arc::new(pool);

    let reader = Arc::new(SqliteCategoryReadRepository::new(Arc::clone(&pool)));
    let services = ApplicationServices::new(
        Arc::new(SqliteCategoryWriteRepository::new(Arc::clone(&pool))),
        reader.clone(),
        reader,
        Arc::new(FixedClock),
        slug_config,
        TableConfig::default(),
    );

    build_router(HttpState {
        services: Arc::new(services),
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(router: &Router, method: Method, uri: &str, payload: Option<Value>) -> TestResponse {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match payload {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(request.body(body).expect("request builds"))
        .await
        .expect("router responds");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
