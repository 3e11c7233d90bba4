//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 products (default)
//! cargo run -p shelf-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p shelf-db --bin seed -- --count 500
//!
//! # Specify database path
//! cargo run -p shelf-db --bin seed -- --db ./data/shelf.db
//! ```
//!
//! ## Generated Products
//! Each product is `{item} {size}`, which keeps names unique. Quantity and
//! price are derived from the row index so repeated runs are reproducible:
//! - Quantity: 1 - 1000
//! - Price: 1.00 - 49.99

use shelf_core::NewProduct;
use shelf_db::{Database, DbConfig};
use std::env;

const DEFAULT_COUNT: usize = 200;
const DEFAULT_DB_PATH: &str = "./shelf.db";

/// Base item names
const ITEMS: &[&str] = &[
    "Pen",
    "Pencil",
    "Marker",
    "Highlighter",
    "Eraser",
    "Notebook",
    "Sticky Notes",
    "Stapler",
    "Paper Clips",
    "Binder",
    "Folder",
    "Envelope",
    "Tape",
    "Scissors",
    "Ruler",
    "Glue Stick",
    "Index Cards",
    "Clipboard",
    "Calculator",
    "Desk Lamp",
];

/// Size / pack variants
const SIZES: &[&str] = &[
    "Single", "Pair", "3-Pack", "5-Pack", "10-Pack", "12-Pack", "24-Pack", "Small", "Medium",
    "Large",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut db_path = String::from(DEFAULT_DB_PATH);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(DEFAULT_COUNT);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Shelf Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: {})", DEFAULT_COUNT);
                println!("  -d, --db <PATH>    Database file path (default: {})", DEFAULT_DB_PATH);
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let capacity = ITEMS.len() * SIZES.len();
    if count > capacity {
        println!("⚠ Only {} distinct names available, capping count", capacity);
        count = capacity;
    }

    println!("🌱 Shelf Seed Data Generator");
    println!("============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");

    let mut session = db.session().await?;

    let existing = session.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let mut generated = 0;
    let start = std::time::Instant::now();

    for (seed, (item, size)) in ITEMS
        .iter()
        .flat_map(|item| SIZES.iter().map(move |size| (item, size)))
        .take(count)
        .enumerate()
    {
        let product = generate_product(item, size, seed);

        if let Err(e) = session.products().create(&product).await {
            eprintln!("Failed to insert {}: {}", product.name, e);
            continue;
        }

        generated += 1;
        if generated % 50 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    drop(session);
    db.close().await;

    println!("✓ Seed complete!");
    Ok(())
}

/// Generates a single product from its row index.
fn generate_product(item: &str, size: &str, seed: usize) -> NewProduct {
    let quantity = 1 + ((seed * 37) % 1000) as i64;
    let cents = 100 + ((seed * 173) % 4900) as i64;

    NewProduct::new(format!("{} {}", item, size), quantity, cents as f64 / 100.0)
}
