//! Products Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::products::{
    errors::ProductsServiceError,
    models::{NewProduct, Product, ProductId},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const FIND_PRODUCT_SQL: &str = include_str!("sql/find_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// Record store for products.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Products whose name contains `search`, or every product when `None`.
    async fn list_products(
        &self,
        search: Option<String>,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    async fn find_product(
        &self,
        product: ProductId,
    ) -> Result<Option<Product>, ProductsServiceError>;

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Returns the number of rows removed.
    async fn delete_product(&self, product: ProductId) -> Result<u64, ProductsServiceError>;
}

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn list_products(
        &self,
        search: Option<String>,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let products = query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .bind(search)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    async fn find_product(
        &self,
        product: ProductId,
    ) -> Result<Option<Product>, ProductsServiceError> {
        let product = query_as::<Postgres, Product>(FIND_PRODUCT_SQL)
            .bind(product.into_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let created = query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(product.product_id.into_string())
            .bind(product.name)
            .bind(product.price)
            .bind(product.stock_quantity)
            .bind(product.rating)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn delete_product(&self, product: ProductId) -> Result<u64, ProductsServiceError> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_string())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_id: ProductId::new(row.try_get::<String, _>("product_id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            stock_quantity: row.try_get("stock_quantity")?,
            rating: row.try_get("rating")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestDb, helpers::new_product};

    use super::*;

    #[tokio::test]
    async fn create_then_find_round_trips_all_fields() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(db.pool().clone());

        let created = repository
            .create_product(NewProduct {
                product_id: ProductId::from("p1"),
                name: "Widget".to_string(),
                price: 9.99,
                stock_quantity: 5.0,
                rating: 4.5,
            })
            .await?;

        let found = repository.find_product(ProductId::from("p1")).await?;

        assert_eq!(found, Some(created.clone()));
        assert_eq!(created.name, "Widget");
        assert!((created.price - 9.99).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn find_unknown_product_returns_none() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(db.pool().clone());

        let found = repository.find_product(ProductId::from("missing")).await?;

        assert!(found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_insert_is_already_exists() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(db.pool().clone());

        repository.create_product(new_product("p1", "Widget")).await?;

        let result = repository
            .create_product(new_product("p1", "Other Widget"))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_filters_on_literal_substring() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(db.pool().clone());

        for (id, name) in [
            ("a", "Red Mug"),
            ("b", "Blue Mug"),
            ("c", "Pen"),
            ("d", "100% Cotton"),
        ] {
            repository.create_product(new_product(id, name)).await?;
        }

        let mut mugs: Vec<String> = repository
            .list_products(Some("Mug".to_string()))
            .await?
            .into_iter()
            .map(|product| product.name)
            .collect();

        mugs.sort();

        assert_eq!(mugs, vec!["Blue Mug", "Red Mug"]);

        let everything = repository.list_products(None).await?;
        let percent = repository.list_products(Some("%".to_string())).await?;
        let lowercase = repository.list_products(Some("mug".to_string())).await?;

        assert_eq!(everything.len(), 4, "expected every product without a search");
        assert_eq!(percent.len(), 1, "expected % to match literally");
        assert!(lowercase.is_empty(), "expected case-sensitive matching");

        Ok(())
    }

    #[tokio::test]
    async fn delete_reports_rows_affected() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(db.pool().clone());

        repository.create_product(new_product("p1", "Widget")).await?;

        assert_eq!(repository.delete_product(ProductId::from("p1")).await?, 1);
        assert_eq!(repository.delete_product(ProductId::from("p1")).await?, 0);

        Ok(())
    }
}
