//! Seam to the external product API.
//!
//! Controllers only see the [`ProductLister`] and [`ProductWriter`] traits;
//! [`http::HttpApi`] is the production implementation and
//! [`mock`] (behind the `test-mocks` feature) provides mockall doubles.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiResult;
use crate::domain::product::{Product, SortKey};
use crate::domain::types::ProductId;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Filter and pagination parameters for the product list endpoint.
///
/// Optional fields are omitted from the request entirely when unset. The
/// backend treats an absent filter and an empty one the same way, but the
/// contract here is to omit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListQuery {
    pub page: usize,
    pub limit: usize,
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<SortKey>,
    pub visible: Option<bool>,
}

impl ProductListQuery {
    #[must_use]
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            ..Default::default()
        }
    }

    /// Free-text filter; trimmed, and dropped when empty.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into().trim().to_string()).filter(|s| !s.is_empty());
        self
    }

    /// Category filter; an empty string means "all" and is dropped.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into()).filter(|s| !s.is_empty());
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Restrict results to products with the given visibility.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }
}

/// One page of results from the product list endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductList {
    pub items: Vec<Product>,
    pub total_items: usize,
    pub total_pages: usize,
}

impl ProductList {
    /// Builds a page, deriving `total_pages` as `max(1, ceil(total / size))`.
    #[must_use]
    pub fn paged(items: Vec<Product>, total_items: usize, page_size: usize) -> Self {
        let total_pages = total_items.div_ceil(page_size.max(1)).max(1);
        Self {
            items,
            total_items,
            total_pages,
        }
    }
}

/// Partial update accepted by [`ProductWriter::update_product`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// Read side of the product API.
#[async_trait]
pub trait ProductLister {
    /// Fetches one page of products matching `query`.
    async fn list_products(&self, query: ProductListQuery) -> ApiResult<ProductList>;
}

/// Write side of the product API (admin surface).
#[async_trait]
pub trait ProductWriter {
    /// Applies a partial update to a single product.
    async fn update_product(&self, id: &ProductId, updates: &UpdateProduct) -> ApiResult<()>;

    /// Removes a product from the catalog.
    async fn delete_product(&self, id: &ProductId) -> ApiResult<()>;
}
