use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use receipt_points::{breakdown, validate_receipt, Receipt};

const USAGE: &str = "Usage: receipt-points <validate|score> <receipt.json>";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match (args.get(1).map(String::as_str), args.get(2)) {
        (Some("validate"), Some(path)) => run_validate(Path::new(path)),
        (Some("score"), Some(path)) => run_score(Path::new(path)),
        _ => bail!(USAGE),
    }
}

fn load_receipt(path: &Path) -> Result<Receipt> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read receipt file: {:?}", path))?;

    Receipt::from_json_slice(content.as_bytes()).context("Invalid JSON")
}

fn run_validate(path: &Path) -> Result<()> {
    let receipt = load_receipt(path)?;
    validate_receipt(&receipt).with_context(|| format!("Invalid receipt: {:?}", path))?;

    println!("✓ {:?} is a valid receipt ({} items)", path, receipt.items.len());
    Ok(())
}

fn run_score(path: &Path) -> Result<()> {
    let receipt = load_receipt(path)?;
    validate_receipt(&receipt).with_context(|| format!("Invalid receipt: {:?}", path))?;

    let points = breakdown(&receipt);

    println!("🏅 {} - {} {}", receipt.retailer, receipt.purchase_date, receipt.purchase_time);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Retailer name      {:>6}", points.retailer_name);
    println!("  Round dollar       {:>6}", points.round_dollar);
    println!("  Multiple of 0.25   {:>6}", points.quarter_multiple);
    println!("  Item pairs         {:>6}", points.item_pairs);
    println!("  Item descriptions  {:>6}", points.item_descriptions);
    println!("  Odd day            {:>6}", points.odd_day);
    println!("  2pm - 4pm          {:>6}", points.afternoon);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Total              {:>6}", points.total());

    Ok(())
}
