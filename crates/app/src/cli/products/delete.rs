use catalog_app::domain::products::{ProductsServiceError, models::ProductId};
use clap::Args;

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Identifier of the product to delete
    product_id: String,
}

pub(crate) async fn run(args: DeleteProductArgs) -> Result<(), String> {
    let app = args.database.connect().await?;
    let product_id = ProductId::new(args.product_id);

    let result = app.products.delete_product(product_id.clone()).await;

    app.close().await;

    match result {
        Ok(()) => {
            println!("deleted product {product_id}");
            Ok(())
        }
        Err(ProductsServiceError::NotFound) => Err(format!("product {product_id} not found")),
        Err(error) => Err(format!("failed to delete product: {error}")),
    }
}
