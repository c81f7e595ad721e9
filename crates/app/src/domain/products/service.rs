//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::domain::products::{
    errors::ProductsServiceError,
    models::{NewProduct, Product, ProductId},
    repository::ProductsRepository,
};

#[derive(Clone)]
pub struct CatalogProductsService {
    repository: Arc<dyn ProductsRepository>,
}

impl CatalogProductsService {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductsService for CatalogProductsService {
    async fn list_products(
        &self,
        search: Option<String>,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        self.repository.list_products(search).await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        if !product.has_finite_values() {
            return Err(ProductsServiceError::InvalidData);
        }

        self.repository.create_product(product).await
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        if self
            .repository
            .find_product(product.clone())
            .await?
            .is_none()
        {
            return Err(ProductsServiceError::NotFound);
        }

        let rows_affected = self.repository.delete_product(product.clone()).await?;

        if rows_affected == 0 {
            debug!(%product, "product vanished between lookup and delete");

            return Err(ProductsServiceError::DeletedConcurrently);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves products, filtered to names containing `search` when given.
    async fn list_products(
        &self,
        search: Option<String>,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Creates a new product under its caller-supplied identifier.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Deletes the product with the given identifier.
    ///
    /// Unknown identifiers yield [`ProductsServiceError::NotFound`] without touching the store.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
