//! Test helpers.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::domain::products::{
    CatalogProductsService, MockProductsService, ProductsServiceError,
    models::{NewProduct, Product, ProductId},
    repository::ProductsRepository,
};

use crate::state::State;

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    Arc::new(State::new(Arc::new(products)))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

/// Product store kept in memory, for exercising the real service end to end.
#[derive(Debug, Default)]
pub(crate) struct MemoryProductsRepository {
    products: Mutex<BTreeMap<String, Product>>,
}

impl MemoryProductsRepository {
    fn products(&self) -> MutexGuard<'_, BTreeMap<String, Product>> {
        self.products
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl ProductsRepository for MemoryProductsRepository {
    async fn list_products(
        &self,
        search: Option<String>,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self
            .products()
            .values()
            .filter(|product| {
                search
                    .as_deref()
                    .is_none_or(|search| product.name.contains(search))
            })
            .cloned()
            .collect())
    }

    async fn find_product(
        &self,
        product: ProductId,
    ) -> Result<Option<Product>, ProductsServiceError> {
        Ok(self.products().get(product.as_str()).cloned())
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let mut products = self.products();

        if products.contains_key(product.product_id.as_str()) {
            return Err(ProductsServiceError::AlreadyExists);
        }

        let created = Product {
            product_id: product.product_id,
            name: product.name,
            price: product.price,
            stock_quantity: product.stock_quantity,
            rating: product.rating,
        };

        products.insert(created.product_id.to_string(), created.clone());

        Ok(created)
    }

    async fn delete_product(&self, product: ProductId) -> Result<u64, ProductsServiceError> {
        Ok(u64::from(self.products().remove(product.as_str()).is_some()))
    }
}

/// The full application router backed by an in-memory store.
pub(crate) fn memory_service() -> Service {
    let service = CatalogProductsService::new(Arc::new(MemoryProductsRepository::default()));

    Service::new(
        Router::new()
            .hoop(inject(Arc::new(State::new(Arc::new(service)))))
            .push(crate::router::app_router()),
    )
}
