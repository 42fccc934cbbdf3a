//! Basic usage of the Journal builder API
//!
//! This example demonstrates the main screen flows:
//! 1. Browse the hot coffee catalog
//! 2. View one coffee (which records it as recently viewed)
//! 3. Favorite it

use coffee_journal::{Brew, FavoriteOutcome, Journal};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let journal = Journal::builder()
        .data_dir("./coffee-journal-data")
        .build()?;

    println!("=== Browse the hot catalog ===");
    let coffees = journal.browse(Brew::Hot).await?;
    for coffee in &coffees {
        println!("  {} - {}", coffee.id, coffee.title);
    }

    let Some(first) = coffees.first() else {
        println!("The catalog is empty.");
        return Ok(());
    };

    println!("\n=== View {} ===", first.title);
    let coffee = journal.view(Brew::Hot, &first.id).await?;
    println!(
        "{}",
        coffee.description.as_deref().unwrap_or("(no description)")
    );
    println!("Ingredients:");
    for ingredient in &coffee.ingredients {
        println!("  - {}", ingredient);
    }

    println!("\n=== Favorite it ===");
    match journal.add_favorite(&coffee).await? {
        FavoriteOutcome::Added => println!("Added {} to favorites", coffee.title),
        FavoriteOutcome::AlreadyPresent => println!("{} was already a favorite", coffee.title),
    }

    println!("\n=== Recently viewed ===");
    for coffee in journal.recently_viewed().await {
        println!("  {}", coffee.title);
    }

    Ok(())
}
