use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::warn;

use alevate_backend::config::Config;
use alevate_backend::media::MediaStore;
use alevate_backend::storage::{CatalogStore, SqliteCatalog};
use alevate_backend::{logging, seed, server};

#[derive(Parser)]
#[command(name = "alevate_backend")]
#[command(about = "Alevate venture studio content backend")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reset the catalog and repopulate it from the built-in dataset
    Seed,
    /// Run the read-only catalog API server
    Serve {
        /// Override the port of CATALOG_BIND_ADDR
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Seed => {
            println!("🌱 Seeding catalog...");
            let store = SqliteCatalog::open(&config.database_path)?;
            let media = MediaStore::new(&config.media_dir);
            let summary =
                seed::reset_and_load(&store, &media, &config.assets_dir, &seed::dataset())?;

            println!("\n📊 Seed Results:");
            println!("   Brands created:   {}", summary.brands_created);
            println!("   Founders created: {}", summary.founders_created);
            if !summary.missing_assets.is_empty() {
                warn!(
                    "{} asset files were missing during the seed run",
                    summary.missing_assets.len()
                );
                println!("\n⚠️  Missing asset files (attachment skipped):");
                for path in &summary.missing_assets {
                    println!("   - {}", path.display());
                }
            }
            println!("\n✅ Seed run completed successfully");
        }
        Commands::Serve { port } => {
            let mut addr = config.bind_addr;
            if let Some(port) = port {
                addr.set_port(port);
            }
            let store: Arc<dyn CatalogStore> =
                Arc::new(SqliteCatalog::open(&config.database_path)?);
            server::start_server(addr, store, config.media_dir.clone()).await?;
        }
    }
    Ok(())
}
