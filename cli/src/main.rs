use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use foodkeeper_data::Catalog;
use fridgekeeper_core::{
    date_items, food_expiration, parse_receipt, recommend, AllowAllFoodCheck, FakeRecipeSearch,
    FoodCheck, ParsedItem, RecipeSearch, SpoonacularRecipeSearch, UsdaFoodCheck,
};

#[derive(Parser)]
#[command(name = "fridgekeeper")]
#[command(about = "Fridge inventory and zero-waste recipe helper", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a receipt text file (OCR output) into structured items
    Parse {
        /// Path to the plain-text receipt dump
        receipt: PathBuf,
    },
    /// Look up how long a food keeps and when it would expire
    Expiration {
        /// Food name as it appears on packaging or a receipt
        name: String,
    },
    /// Recommend a recipe that uses up items expiring soon
    Recommend {
        /// Path to a JSON file of {"name", "quantity"} items
        items: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { receipt } => parse(&receipt).await?,
        Commands::Expiration { name } => expiration(&name)?,
        Commands::Recommend { items } => recommend_from_file(&items).await?,
    }

    Ok(())
}

async fn parse(path: &PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(path)?;

    let checker: Box<dyn FoodCheck> = match UsdaFoodCheck::from_env() {
        Ok(client) => Box::new(client),
        Err(error) => {
            tracing::warn!(%error, "food-existence check disabled, keeping all items");
            Box::new(AllowAllFoodCheck)
        }
    };

    let receipt = parse_receipt(&text, checker.as_ref()).await;
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}

fn expiration(name: &str) -> Result<()> {
    let catalog = Catalog::global();
    let today = chrono::Local::now().date_naive();
    let report = food_expiration(name, catalog, today);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn recommend_from_file(path: &PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(path)?;
    let items: Vec<ParsedItem> = serde_json::from_str(&text)?;

    let catalog = Catalog::global();
    let today = chrono::Local::now().date_naive();
    let fridge = date_items(&items, catalog, today);

    let search: Box<dyn RecipeSearch> = match SpoonacularRecipeSearch::from_env() {
        Ok(client) => Box::new(client),
        Err(error) => {
            tracing::warn!(%error, "recipe search disabled, using fallback suggestions");
            Box::new(FakeRecipeSearch::new())
        }
    };

    println!("{}", recommend(fridge, search.as_ref(), today).await);
    Ok(())
}
