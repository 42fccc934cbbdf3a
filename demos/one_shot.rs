//! Simple API usage with convenience functions
//!
//! This example shows the one-shot functions, which build a journal per call
//! for hosts that do not keep an instance around between calls.

use coffee_journal::Coffee;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = "./coffee-journal-data";

    let espresso = Coffee {
        id: "1".to_string(),
        title: "Espresso".to_string(),
        ingredients: vec!["Coffee".to_string()],
        ..Default::default()
    };

    println!("=== Record a View ===");
    let recents = coffee_journal::record_view(data_dir, &espresso).await?;
    println!("Recently viewed holds {} coffee(s)", recents.len());

    println!("\n=== Favorite It ===");
    let outcome = coffee_journal::add_favorite(data_dir, &espresso).await?;
    println!("Outcome: {:?}", outcome);

    println!("\n=== Read Everything Back ===");
    for coffee in coffee_journal::recently_viewed(data_dir).await? {
        println!("  recent: {}", coffee.title);
    }
    for coffee in coffee_journal::list_favorites(data_dir).await? {
        println!("  favorite: {}", coffee.title);
    }

    Ok(())
}
