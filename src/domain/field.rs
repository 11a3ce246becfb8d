// src/domain/field.rs
//! Field descriptors for the models exposed through sortable tables.
//!
//! A model is described by a list of [`FieldDescriptor`]s. What a field can
//! take part in is answered by the descriptor: whether a table may sort on
//! it, and through its [`FieldKind`], which model it points at when it is a
//! relation.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Primary,
    Text,
    Slug,
    Timestamp,
    /// Foreign key to another model, stored in `<name>_id`.
    BelongsTo { model: &'static str },
}

impl FieldKind {
    pub fn related_model(&self) -> Option<&'static str> {
        match self {
            Self::BelongsTo { model } => Some(*model),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub sortable: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            sortable: true,
        }
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Column holding the value of this field.
    pub fn column(&self) -> String {
        match self.kind {
            FieldKind::BelongsTo { .. } => format!("{}_id", self.name),
            _ => self.name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMeta {
    pub name: &'static str,
    pub table: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl ModelMeta {
    pub fn new(name: &'static str, table: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name,
            table,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// First relation field pointing at `model`.
    pub fn relation_to(&self, model: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|field| field.kind.related_model() == Some(model))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Schema {
    models: HashMap<&'static str, ModelMeta>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, meta: ModelMeta) -> Self {
        self.models.insert(meta.name, meta);
        self
    }

    pub fn model(&self, name: &str) -> Option<&ModelMeta> {
        self.models.get(name)
    }
}
