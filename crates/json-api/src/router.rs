//! App Router

use salvo::Router;

use crate::{healthcheck, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("{product_id}").delete(products::delete::handler)),
        )
}
