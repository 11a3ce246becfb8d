// tests/support/mocks/repos.rs
use async_trait::async_trait;
use slugtable::domain::{
    category::{
        CATEGORY_MODEL, Category, CategoryId, CategoryReadRepository, CategoryUpdate,
        CategoryWriteRepository, NewCategory,
    },
    errors::{DomainError, DomainResult},
    pagination::{SortDirection, SortKey, TableSource},
    slug::{Slug, SlugPattern, SlugScope},
};
use std::{
    cmp::Ordering,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU32, Ordering as AtomicOrdering},
    },
};

/// Category store backed by a vector. Slugs are unique, like the real table.
#[derive(Clone, Default)]
pub struct InMemoryCategories {
    rows: Arc<Mutex<Vec<Category>>>,
}

impl InMemoryCategories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Category> {
        self.rows.lock().unwrap().clone()
    }

    pub fn slugs(&self) -> Vec<String> {
        self.snapshot()
            .into_iter()
            .map(|category| category.slug.into_inner())
            .collect()
    }
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCategories {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.slug == category.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let next_id = rows.iter().map(|row| row.id.0).max().unwrap_or(0) + 1;
        let created = Category {
            id: CategoryId(next_id),
            title: category.title,
            slug: category.slug,
            parent_id: category.parent_id,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(slug) = &update.slug {
            if rows.iter().any(|row| row.id != update.id && &row.slug == slug) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        let row = rows
            .iter_mut()
            .find(|row| row.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(slug) = update.slug {
            row.slug = slug;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        for row in rows.iter_mut().filter(|row| row.parent_id == Some(id)) {
            row.parent_id = None;
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategories {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.snapshot().into_iter().find(|row| row.id == id))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self.snapshot().into_iter().find(|row| &row.slug == slug))
    }

    fn table(&self) -> Box<dyn TableSource<Row = Category>> {
        Box::new(InMemoryTable {
            rows: Arc::clone(&self.rows),
            ordering: None,
        })
    }
}

#[async_trait]
impl SlugScope for InMemoryCategories {
    async fn count_matching(
        &self,
        pattern: &SlugPattern<'_>,
        exclude: Option<i64>,
    ) -> DomainResult<u64> {
        let count = self
            .snapshot()
            .iter()
            .filter(|row| Some(row.id.0) != exclude)
            .filter(|row| pattern.matches(row.slug.as_str()))
            .count();
        Ok(count as u64)
    }
}

struct InMemoryTable {
    rows: Arc<Mutex<Vec<Category>>>,
    ordering: Option<(SortKey, SortDirection)>,
}

fn compare(rows: &[Category], a: &Category, b: &Category, key: &SortKey) -> Ordering {
    let parent_title = |row: &Category| {
        row.parent_id.and_then(|id| {
            rows.iter()
                .find(|candidate| candidate.id == id)
                .map(|parent| parent.title.as_str().to_string())
        })
    };
    match key {
        SortKey::Column(name) => match name.as_str() {
            "title" => a.title.as_str().cmp(b.title.as_str()),
            "slug" => a.slug.as_str().cmp(b.slug.as_str()),
            "parent" => a.parent_id.map(|id| id.0).cmp(&b.parent_id.map(|id| id.0)),
            "created_at" => a.created_at.cmp(&b.created_at),
            _ => a.id.0.cmp(&b.id.0),
        },
        SortKey::Foreign { .. } => parent_title(a).cmp(&parent_title(b)),
    }
}

#[async_trait]
impl TableSource for InMemoryTable {
    type Row = Category;

    fn model(&self) -> &str {
        CATEGORY_MODEL
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }

    fn order_by(&mut self, key: &SortKey, direction: SortDirection) -> DomainResult<()> {
        let known = match key {
            SortKey::Column(name) => {
                matches!(name.as_str(), "id" | "title" | "slug" | "parent" | "created_at")
            }
            SortKey::Foreign { model, field } => model == CATEGORY_MODEL && field == "title",
        };
        if !known {
            return Err(DomainError::Validation(format!("unknown sort column: {key}")));
        }
        self.ordering = Some((key.clone(), direction));
        Ok(())
    }

    async fn fetch(&self, offset: u64, limit: u64) -> DomainResult<Vec<Category>> {
        let rows = self.rows.lock().unwrap().clone();
        let mut sorted = rows.clone();
        if let Some((key, direction)) = &self.ordering {
            sorted.sort_by(|a, b| {
                let ordering = compare(&rows, a, b, key).then(a.id.0.cmp(&b.id.0));
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        Ok(sorted
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

/// Write repository whose first `failures` inserts report a slug conflict
/// before reaching the wrapped store.
pub struct ConflictingWrites {
    inner: InMemoryCategories,
    remaining: AtomicU32,
    pub attempted: Mutex<Vec<String>>,
}

impl ConflictingWrites {
    pub fn new(inner: InMemoryCategories, failures: u32) -> Self {
        Self {
            inner,
            remaining: AtomicU32::new(failures),
            attempted: Mutex::new(Vec::new()),
        }
    }

    pub fn attempted(&self) -> Vec<String> {
        self.attempted.lock().unwrap().clone()
    }
}

#[async_trait]
impl CategoryWriteRepository for ConflictingWrites {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        self.attempted
            .lock()
            .unwrap()
            .push(category.slug.as_str().to_string());
        let left = self.remaining.load(AtomicOrdering::SeqCst);
        if left > 0 {
            self.remaining.store(left - 1, AtomicOrdering::SeqCst);
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        self.inner.insert(category).await
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        self.inner.update(update).await
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}
