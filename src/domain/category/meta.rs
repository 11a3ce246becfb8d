// src/domain/category/meta.rs
use crate::domain::field::{FieldDescriptor, FieldKind, ModelMeta, Schema};

pub const CATEGORY_MODEL: &str = "categories";

pub fn category_meta() -> ModelMeta {
    ModelMeta::new(
        CATEGORY_MODEL,
        "categories",
        vec![
            FieldDescriptor::new("id", "ID", FieldKind::Primary),
            FieldDescriptor::new("title", "Title", FieldKind::Text),
            FieldDescriptor::new("slug", "Slug", FieldKind::Slug),
            FieldDescriptor::new(
                "parent",
                "Parent",
                FieldKind::BelongsTo {
                    model: CATEGORY_MODEL,
                },
            ),
            FieldDescriptor::new("created_at", "Created", FieldKind::Timestamp),
            FieldDescriptor::new("updated_at", "Updated", FieldKind::Timestamp).unsortable(),
        ],
    )
}

pub fn category_schema() -> Schema {
    Schema::new().with_model(category_meta())
}
