// src/infrastructure/repositories/sqlite_category.rs
use super::map_sqlx;
use crate::domain::category::{
    CATEGORY_MODEL, Category, CategoryId, CategoryReadRepository, CategoryTitle, CategoryUpdate,
    CategoryWriteRepository, NewCategory, category_schema,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::field::Schema;
use crate::domain::pagination::{SortDirection, SortKey, TableSource};
use crate::domain::slug::{Slug, SlugMatchStrategy, SlugPattern, SlugScope};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const SELECT_CATEGORY: &str =
    "SELECT id, title, slug, parent_id, created_at, updated_at FROM categories";
const RETURNING_CATEGORY: &str = " RETURNING id, title, slug, parent_id, created_at, updated_at";

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    title: String,
    slug: String,
    parent_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            title: CategoryTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            parent_id: row.parent_id.map(CategoryId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Escape `%`, `_` and `\` for `LIKE ... ESCAPE '\'`.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[derive(Clone)]
pub struct SqliteCategoryWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCategoryWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryWriteRepository for SqliteCategoryWriteRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            title,
            slug,
            parent_id,
            created_at,
            updated_at,
        } = category;

        let sql = format!(
            "INSERT INTO categories (title, slug, parent_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?){RETURNING_CATEGORY}"
        );
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(parent_id.map(i64::from))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let CategoryUpdate {
            id,
            title,
            slug,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE categories SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(RETURNING_CATEGORY);

        let row = builder
            .build_query_as::<CategoryRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct SqliteCategoryReadRepository {
    pool: Arc<SqlitePool>,
    schema: Arc<Schema>,
}

impl SqliteCategoryReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            pool,
            schema: Arc::new(category_schema()),
        }
    }
}

#[async_trait]
impl CategoryReadRepository for SqliteCategoryReadRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let sql = format!("{SELECT_CATEGORY} WHERE id = ?");
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let sql = format!("{SELECT_CATEGORY} WHERE slug = ?");
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    fn table(&self) -> Box<dyn TableSource<Row = Category>> {
        Box::new(SqliteCategoryTable::new(
            Arc::clone(&self.pool),
            Arc::clone(&self.schema),
        ))
    }
}

#[async_trait]
impl SlugScope for SqliteCategoryReadRepository {
    async fn count_matching(
        &self,
        pattern: &SlugPattern<'_>,
        exclude: Option<i64>,
    ) -> DomainResult<u64> {
        match pattern.strategy() {
            SlugMatchStrategy::Prefix => {
                let count: i64 = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM categories
                     WHERE slug LIKE ? ESCAPE '\\' AND (? IS NULL OR id <> ?)",
                )
                .bind(format!("{}%", escape_like(pattern.candidate())))
                .bind(exclude)
                .bind(exclude)
                .fetch_one(&*self.pool)
                .await
                .map_err(map_sqlx)?;

                Ok(count.max(0) as u64)
            }
            SlugMatchStrategy::Family => {
                let family = format!(
                    "{}%",
                    escape_like(&format!("{}{}", pattern.candidate(), pattern.separator()))
                );
                let slugs: Vec<String> = sqlx::query_scalar(
                    "SELECT slug FROM categories
                     WHERE (slug = ? OR slug LIKE ? ESCAPE '\\') AND (? IS NULL OR id <> ?)",
                )
                .bind(pattern.candidate())
                .bind(family)
                .bind(exclude)
                .bind(exclude)
                .fetch_all(&*self.pool)
                .await
                .map_err(map_sqlx)?;

                Ok(slugs.iter().filter(|slug| pattern.matches(slug)).count() as u64)
            }
        }
    }
}

#[derive(Debug, Clone)]
struct ResolvedOrder {
    expression: String,
    join: Option<String>,
    direction: SortDirection,
}

/// Category listing as a [`TableSource`]. Sort keys are resolved against the
/// model schema, so only known column names ever reach the SQL text.
pub struct SqliteCategoryTable {
    pool: Arc<SqlitePool>,
    schema: Arc<Schema>,
    ordering: Option<ResolvedOrder>,
}

impl SqliteCategoryTable {
    pub fn new(pool: Arc<SqlitePool>, schema: Arc<Schema>) -> Self {
        Self {
            pool,
            schema,
            ordering: None,
        }
    }

    fn resolve(&self, key: &SortKey, direction: SortDirection) -> Option<ResolvedOrder> {
        let meta = self.schema.model(CATEGORY_MODEL)?;

        match key {
            SortKey::Column(name) => {
                let field = meta.field(name).filter(|field| field.sortable)?;
                Some(ResolvedOrder {
                    expression: format!("c.{}", field.column()),
                    join: None,
                    direction,
                })
            }
            SortKey::Foreign { model, field } => {
                let relation = meta.relation_to(model)?;
                let target = self.schema.model(model)?;
                let target_field = target.field(field).filter(|field| field.sortable)?;
                Some(ResolvedOrder {
                    expression: format!("r.{}", target_field.column()),
                    join: Some(format!(
                        "LEFT JOIN {} AS r ON r.id = c.{}",
                        target.table,
                        relation.column()
                    )),
                    direction,
                })
            }
        }
    }
}

fn to_sql_int(value: u64) -> DomainResult<i64> {
    i64::try_from(value)
        .map_err(|_| DomainError::Validation(format!("page window out of range: {value}")))
}

#[async_trait]
impl TableSource for SqliteCategoryTable {
    type Row = Category;

    fn model(&self) -> &str {
        CATEGORY_MODEL
    }

    async fn count(&self) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count.max(0) as u64)
    }

    fn order_by(&mut self, key: &SortKey, direction: SortDirection) -> DomainResult<()> {
        let ordering = self
            .resolve(key, direction)
            .ok_or_else(|| DomainError::Validation(format!("unknown sort column: {key}")))?;
        self.ordering = Some(ordering);
        Ok(())
    }

    async fn fetch(&self, offset: u64, limit: u64) -> DomainResult<Vec<Category>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT c.id, c.title, c.slug, c.parent_id, c.created_at, c.updated_at FROM categories AS c",
        );

        match &self.ordering {
            Some(ordering) => {
                if let Some(join) = &ordering.join {
                    builder.push(" ");
                    builder.push(join);
                }
                builder.push(format!(
                    " ORDER BY {expr} {dir}, c.id {dir}",
                    expr = ordering.expression,
                    dir = ordering.direction
                ));
            }
            None => {
                builder.push(" ORDER BY c.id ASC");
            }
        }

        builder.push(" LIMIT ");
        builder.push_bind(to_sql_int(limit)?);
        builder.push(" OFFSET ");
        builder.push_bind(to_sql_int(offset)?);

        let rows = builder
            .build_query_as::<CategoryRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
