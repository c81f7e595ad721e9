use catalog_app::context::AppContext;
use clap::{Args, Subcommand};

mod create;
mod delete;
mod list;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    Create(create::CreateProductArgs),
    List(list::ListProductsArgs),
    Delete(delete::DeleteProductArgs),
}

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    async fn connect(&self) -> Result<AppContext, String> {
        AppContext::from_database_url(&self.database_url, 1)
            .await
            .map_err(|error| format!("failed to initialize app context: {error}"))
    }
}

pub(crate) async fn run(command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::Create(args) => create::run(args).await,
        ProductsSubcommand::List(args) => list::run(args).await,
        ProductsSubcommand::Delete(args) => delete::run(args).await,
    }
}
