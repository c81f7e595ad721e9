use clap::Args;

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Only list products whose name contains this text
    #[arg(long)]
    search: Option<String>,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let app = args.database.connect().await?;

    let result = app.products.list_products(args.search).await;

    app.close().await;

    let products = result.map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for product in products {
        println!("product_id: {}", product.product_id);
        println!("name: {}", product.name);
        println!("price: {}", product.price);
        println!("stock_quantity: {}", product.stock_quantity);
        println!("rating: {}", product.rating);
        println!();
    }

    Ok(())
}
