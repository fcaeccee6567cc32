//! Mock API implementations for isolating controllers in tests.

use mockall::mock;

use crate::api::errors::ApiResult;
use crate::api::{ProductList, ProductListQuery, ProductLister, ProductWriter, UpdateProduct};
use crate::controller::admin::ConfirmGate;
use crate::domain::types::ProductId;

mock! {
    pub Api {}

    #[async_trait::async_trait]
    impl ProductLister for Api {
        async fn list_products(&self, query: ProductListQuery) -> ApiResult<ProductList>;
    }

    #[async_trait::async_trait]
    impl ProductWriter for Api {
        async fn update_product(&self, id: &ProductId, updates: &UpdateProduct) -> ApiResult<()>;
        async fn delete_product(&self, id: &ProductId) -> ApiResult<()>;
    }
}

mock! {
    pub Gate {}

    impl ConfirmGate for Gate {
        fn confirm(&self, message: &str) -> bool;
    }
}
