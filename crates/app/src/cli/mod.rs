use clap::{Parser, Subcommand};

mod products;

#[derive(Debug, Parser)]
#[command(name = "catalog-app", about = "Catalog admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Products(products::ProductsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Products(command) => products::run(command).await,
        }
    }
}
