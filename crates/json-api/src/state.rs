//! State

use std::sync::Arc;

use catalog_app::{context::AppContext, domain::products::ProductsService};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) products: Arc<dyn ProductsService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: &AppContext) -> Arc<Self> {
        Arc::new(Self::new(Arc::clone(&app.products)))
    }
}
