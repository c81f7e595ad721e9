//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use catalog_app::domain::products::models::ProductId;

use crate::{
    extensions::*,
    products::errors::{ProductsApiError, into_delete_error},
    state::State,
};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Error deleting product"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip_all,
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, ProductsApiError> {
    let state = depot.obtain_or::<Arc<State>, _>(ProductsApiError::Deleting)?;
    let product_id = ProductId::new(product_id.into_inner());

    tracing::Span::current().record("product_id", product_id.as_str());

    state
        .products
        .delete_product(product_id)
        .await
        .map_err(into_delete_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{products::errors::ErrorResponse, test_helpers::products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(
            repo,
            Router::with_path("products/{product_id}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_product_success_returns_204_without_body() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .withf(|product| product.as_str() == "p1")
            .return_once(|_| Ok(()));

        repo.expect_list_products().never();
        repo.expect_create_product().never();

        let mut res = TestClient::delete("http://example.com/products/p1")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        assert!(res.take_string().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_not_found_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .withf(|product| product.as_str() == "missing")
            .return_once(|_| Err(ProductsServiceError::NotFound));

        repo.expect_list_products().never();
        repo.expect_create_product().never();

        let mut res = TestClient::delete("http://example.com/products/missing")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_lost_race_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::DeletedConcurrently));

        repo.expect_list_products().never();
        repo.expect_create_product().never();

        let mut res = TestClient::delete("http://example.com/products/p1")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.message, "Error deleting product");

        Ok(())
    }
}
