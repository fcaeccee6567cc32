//! reqwest-backed implementation of the product API seam.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::errors::ApiResult;
use crate::api::{ProductList, ProductListQuery, ProductLister, ProductWriter, UpdateProduct};
use crate::domain::types::ProductId;
use crate::models::config::StorefrontConfig;

/// HTTP client for the backend product API.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Builds a client from configuration.
    pub fn new(config: &StorefrontConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn params(query: &ProductListQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(search) = &query.search {
            params.push(("q", search.clone()));
        }
        if let Some(category) = &query.category {
            params.push(("category", category.clone()));
        }
        if let Some(sort) = query.sort {
            params.push(("sort", sort.as_str().to_string()));
        }
        if let Some(visible) = query.visible {
            params.push(("visible", visible.to_string()));
        }
        params
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn expect_success(response: Response) -> ApiResult<()> {
        response.error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl ProductLister for HttpApi {
    async fn list_products(&self, query: ProductListQuery) -> ApiResult<ProductList> {
        let response = self
            .client
            .get(self.url("products"))
            .query(&Self::params(&query))
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl ProductWriter for HttpApi {
    async fn update_product(&self, id: &ProductId, updates: &UpdateProduct) -> ApiResult<()> {
        let response = self
            .client
            .patch(self.url(&format!("products/{id}")))
            .json(updates)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    async fn delete_product(&self, id: &ProductId) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("products/{id}")))
            .send()
            .await?;
        Self::expect_success(response).await
    }
}
