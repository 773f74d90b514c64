//! Catalog records and request payloads.

use serde::{Deserialize, Serialize};

/// Product identifier. Path segments that do not parse as one are rejected.
pub type ProductId = i32;

/// Category identifier.
pub type CategoryId = i32;

/// A product held by the catalog.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl Product {
    pub fn from_input(id: ProductId, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            category_id: input.category_id,
        }
    }
}

/// Body of `POST /productos` and `PUT /productos/{id}`.
///
/// Has no id field: ids are server-assigned. The Spanish field names used by
/// older clients are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "descripcion")]
    pub description: String,
    #[serde(default, alias = "categoriaId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

/// A read-only category. Products reference it by id, unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}
