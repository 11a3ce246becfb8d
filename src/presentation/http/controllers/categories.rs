// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand},
    dto::{CategoryDto, CategoryTableDto},
    queries::categories::{GetCategoryBySlugQuery, ListCategoriesQuery},
    table::TableRequest,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::links::{FULL_VIEW, LinkHeaderRenderer};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{OriginalUri, Path},
    http::{HeaderMap, HeaderValue, StatusCode, header},
};
use serde::Deserialize;

/// Query parameter choosing how the `Link` header is rendered.
const VIEW_PARAM: &str = "view";

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
}

pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    OriginalUri(uri): OriginalUri,
) -> HttpResult<(HeaderMap, Json<CategoryTableDto>)> {
    let request = TableRequest::from_parts(uri.path(), uri.query()).into_http()?;
    let view = request.param(VIEW_PARAM).unwrap_or(FULL_VIEW).to_string();

    let table = state
        .services
        .category_queries
        .list_categories(ListCategoriesQuery { request, view }, &LinkHeaderRenderer)
        .await
        .into_http()?;

    let mut headers = HeaderMap::new();
    if !table.navigation.is_empty() {
        match HeaderValue::from_str(&table.navigation) {
            Ok(value) => {
                headers.insert(header::LINK, value);
            }
            Err(err) => tracing::warn!(error = %err, "skipping unrepresentable Link header"),
        }
    }

    Ok((headers, Json(table)))
}

pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let command = CreateCategoryCommand {
        title: payload.title,
        slug: payload.slug,
        parent_id: payload.parent_id,
    };

    let category = state
        .services
        .category_commands
        .create_category(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn get_category_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    let category = state
        .services
        .category_queries
        .get_category_by_slug(GetCategoryBySlugQuery { slug })
        .await
        .into_http()?;

    Ok(Json(category))
}

pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let category = state
        .services
        .category_commands
        .update_category(UpdateCategoryCommand {
            id,
            title: payload.title,
            slug: payload.slug,
        })
        .await
        .into_http()?;

    Ok(Json(category))
}

pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
