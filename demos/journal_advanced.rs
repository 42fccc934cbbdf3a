//! Advanced builder API usage
//!
//! This example demonstrates:
//! - Custom timeout settings
//! - Loading settings from config.toml / COFFEE__ environment variables
//! - Publishing a new coffee (requires an auth token)

use std::time::Duration;

use coffee_journal::{Brew, Journal, JournalConfig, NewCoffee};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Custom timeout
    println!("=== Builder with Custom Timeout ===");
    let journal = Journal::builder()
        .data_dir("./coffee-journal-data")
        .timeout(Duration::from_secs(60))
        .build()?;

    let coffees = journal.browse(Brew::Iced).await?;
    println!("Fetched {} iced coffees with a 60s timeout", coffees.len());

    // Example 2: Configuration file and environment variables
    println!("\n=== Builder from Config ===");
    println!("Reads config.toml and COFFEE__ variables, e.g. COFFEE__API__AUTH_TOKEN");
    let config = JournalConfig::load()?;
    let journal = Journal::from_config(&config)
        .data_dir("./coffee-journal-data")
        .build()?;

    // Example 3: Publish a new coffee (requires an auth token)
    println!("\n=== Publish a New Coffee ===");
    let mut draft = NewCoffee::new("Espresso Tonic", Brew::Iced);
    draft.description = Some("Espresso poured over tonic water and ice".to_string());
    draft.ingredients = vec!["Espresso".to_string(), "Tonic water".to_string()];

    match journal.publish(&draft).await {
        Ok(created) => println!("Catalog assigned id {} to {}", created.id, created.title),
        Err(e) => println!("Publish failed (is an auth token configured?): {}", e),
    }

    Ok(())
}
