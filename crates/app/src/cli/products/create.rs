use catalog_app::{
    domain::products::models::NewProduct,
    forms::{ProductField, ProductForm},
};
use clap::Args;

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Product name
    #[arg(long)]
    name: String,

    /// Unit price
    #[arg(long)]
    price: String,

    /// Units in stock
    #[arg(long)]
    stock_quantity: String,

    /// Rating
    #[arg(long)]
    rating: String,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let mut form = ProductForm::new();
    form.open();

    for (field, value) in [
        (ProductField::Name, &args.name),
        (ProductField::Price, &args.price),
        (ProductField::StockQuantity, &args.stock_quantity),
        (ProductField::Rating, &args.rating),
    ] {
        form.set_field(field, value)
            .map_err(|error| error.to_string())?;
    }

    let new_product = form
        .submit(NewProduct::from)
        .ok_or_else(|| "product form was closed before submit".to_string())?;

    let app = args.database.connect().await?;

    let result = app.products.create_product(new_product).await;

    app.close().await;

    let product = result.map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_id: {}", product.product_id);
    println!("name: {}", product.name);

    Ok(())
}
