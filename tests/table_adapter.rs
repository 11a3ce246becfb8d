// tests/table_adapter.rs
mod support;

use slugtable::application::{
    commands::categories::CreateCategoryCommand,
    error::ApplicationError,
    queries::categories::ListCategoriesQuery,
    table::{SortIndicator, TableAdapter, TableConfig, TableRequest},
};
use slugtable::domain::{
    category::{CategoryReadRepository, category_schema},
    pagination::{SortDirection, SortKey},
    slug::SlugConfig,
};
use std::sync::Arc;
use support::{InMemoryCategories, StubRenderer, memory_services, nested_slug_config};

async fn seeded(count: usize) -> InMemoryCategories {
    let store = InMemoryCategories::new();
    let services = memory_services(&store, SlugConfig::default());
    for n in 1..=count {
        let command = CreateCategoryCommand::builder()
            .title(format!("Item {n:02}"))
            .build()
            .unwrap();
        services.category_commands.create_category(command).await.unwrap();
    }
    store
}

async fn adapter(
    store: &InMemoryCategories,
    query: &str,
) -> Result<TableAdapter<Box<dyn slugtable::domain::pagination::TableSource<Row = slugtable::domain::category::Category>>>, ApplicationError> {
    let request = TableRequest::from_parts("/categories", Some(query))?;
    TableAdapter::new(
        store.table(),
        Arc::new(category_schema()),
        request,
        TableConfig::default(),
    )
    .await
}

#[tokio::test]
async fn second_page_windows_the_rows() {
    let store = seeded(25).await;
    let table = adapter(&store, "page=2").await.unwrap();

    assert_eq!(table.pagination().offset(), 10);
    assert_eq!(table.pagination().limit(), 10);
    assert_eq!(table.pagination().total_pages(), 3);

    let items = table.items().await.unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0].title.as_str(), "Item 11");
}

#[tokio::test]
async fn page_beyond_the_end_is_clamped() {
    let store = seeded(25).await;
    let table = adapter(&store, "page=99&limit=20").await.unwrap();

    assert_eq!(table.pagination().current_page(), 2);
    assert_eq!(table.items().await.unwrap().len(), 5);
}

#[tokio::test]
async fn requested_direction_orders_the_rows() {
    let store = seeded(3).await;
    let table = adapter(&store, "sort=title&how=DESC").await.unwrap();

    let titles: Vec<String> = table
        .items()
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.title.into_inner())
        .collect();
    assert_eq!(titles, vec!["Item 03", "Item 02", "Item 01"]);
}

#[tokio::test]
async fn missing_direction_defaults_to_descending() {
    let store = seeded(2).await;
    let table = adapter(&store, "sort=title").await.unwrap();

    assert_eq!(table.current_direction(), SortDirection::Desc);
    assert_eq!(
        table.current_sort(),
        Some(&SortKey::Column("title".into()))
    );
}

#[tokio::test]
async fn active_column_link_toggles_direction() {
    let store = seeded(2).await;
    let table = adapter(&store, "sort=title&how=ASC&page=1").await.unwrap();

    let active = table.sort("title", None).unwrap();
    assert!(active.active);
    assert_eq!(active.indicator, SortIndicator::Ascending);
    assert_eq!(active.direction, SortDirection::Desc);
    assert_eq!(active.href, "/categories?sort=title&how=DESC&page=1");

    let other = table.sort("slug", None).unwrap();
    assert!(!other.active);
    assert_eq!(other.indicator, SortIndicator::Unsorted);
    assert_eq!(other.direction, SortDirection::Asc);
    assert_eq!(other.href, "/categories?sort=slug&how=ASC&page=1");
}

#[tokio::test]
async fn relation_column_sorts_by_related_field() {
    let store = seeded(1).await;
    let table = adapter(&store, "sort=:categories.title&how=DESC").await.unwrap();

    let link = table.sort("parent", Some("title")).unwrap();
    assert_eq!(link.key, ":categories.title");
    assert!(link.active);
    assert_eq!(link.indicator, SortIndicator::Descending);
    assert_eq!(link.href, "/categories?sort=%3Acategories.title&how=ASC");

    let plain = table.sort("parent", Some("no_such_field")).unwrap();
    assert_eq!(plain.key, "parent");
}

#[tokio::test]
async fn unsortable_related_field_falls_back_to_plain_column() {
    let store = seeded(1).await;
    let table = adapter(&store, "").await.unwrap();

    let link = table.sort("parent", Some("updated_at")).unwrap();
    assert_eq!(link.key, "parent");
    assert_eq!(link.href, "/categories?sort=parent&how=ASC");

    let (path, query) = link.href.split_once('?').unwrap();
    let followed = TableRequest::from_parts(path, Some(query)).unwrap();
    let table = TableAdapter::new(
        store.table(),
        Arc::new(category_schema()),
        followed,
        TableConfig::default(),
    )
    .await
    .unwrap();
    assert_eq!(table.current_sort(), Some(&SortKey::Column("parent".into())));
}

#[tokio::test]
async fn unknown_or_unsortable_column_is_rejected() {
    let store = seeded(1).await;
    let table = adapter(&store, "").await.unwrap();

    assert!(matches!(
        table.sort("body", None),
        Err(ApplicationError::Validation(_))
    ));
    assert!(matches!(
        table.sort("updated_at", None),
        Err(ApplicationError::Validation(_))
    ));
}

#[tokio::test]
async fn unknown_sort_parameter_fails_the_listing() {
    let store = seeded(1).await;
    let result = adapter(&store, "sort=password").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn children_sort_by_parent_title() {
    let store = InMemoryCategories::new();
    let services = memory_services(&store, nested_slug_config());
    let zoo = services
        .category_commands
        .create_category(CreateCategoryCommand::builder().title("Zoo").build().unwrap())
        .await
        .unwrap();
    let art = services
        .category_commands
        .create_category(CreateCategoryCommand::builder().title("Art").build().unwrap())
        .await
        .unwrap();
    for (title, parent) in [("Lions", zoo.id), ("Painting", art.id)] {
        let command = CreateCategoryCommand::builder()
            .title(title)
            .parent_id(parent)
            .build()
            .unwrap();
        services.category_commands.create_category(command).await.unwrap();
    }

    let table = adapter(&store, "sort=:categories.title&how=ASC").await.unwrap();
    let slugs: Vec<String> = table
        .items()
        .await
        .unwrap()
        .into_iter()
        .filter(|row| row.parent_id.is_some())
        .map(|row| row.slug.into_inner())
        .collect();
    assert_eq!(slugs, vec!["art/painting", "zoo/lions"]);
}

#[tokio::test]
async fn listing_query_returns_columns_summary_and_navigation() {
    let store = seeded(12).await;
    let services = memory_services(&store, SlugConfig::default());
    let request = TableRequest::from_parts("/categories", Some("sort=slug&how=ASC")).unwrap();

    let table = services
        .category_queries
        .list_categories(
            ListCategoriesQuery {
                request,
                view: "pager".into(),
            },
            &StubRenderer,
        )
        .await
        .unwrap();

    assert_eq!(table.items.len(), 10);
    assert_eq!(table.items[0].slug, "item-01");
    assert_eq!(table.pagination.total_items, 12);
    assert_eq!(table.pagination.next_page, Some(2));
    assert_eq!(table.pagination.sort.as_deref(), Some("slug"));

    let keys: Vec<&str> = table.columns.iter().map(|link| link.key.as_str()).collect();
    assert_eq!(keys, vec!["title", "slug", ":categories.title", "created_at"]);

    assert_eq!(
        table.navigation,
        "pager:1/2 /categories?sort=slug&how=ASC&page=2"
    );
}
