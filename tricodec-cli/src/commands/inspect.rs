//! Inspect command implementation.

use std::fs;
use std::path::Path;
use tricodec_core::{FrequencyTable, printable};

/// Shannon entropy in bits per symbol.
fn entropy(table: &FrequencyTable) -> f64 {
    let total = table.total() as f64;
    table
        .iter()
        .map(|(_, count)| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

pub fn cmd_inspect(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let table = FrequencyTable::from_bytes(&data);

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!("Input: {}", input.display());
    println!("Size: {} bytes", table.total());
    println!("Distinct symbols: {}", table.distinct());
    if !table.is_empty() {
        let bits = entropy(&table);
        println!("Entropy: {:.4} bits/symbol", bits);
        println!(
            "Entropy bound: {} bytes",
            (bits * table.total() as f64 / 8.0).ceil() as u64
        );
    }

    println!();
    println!("=== Frequency table ===");
    for (symbol, count) in table.by_descending_frequency() {
        println!("byte {symbol:3} (char: {}): freq = {count}", printable(symbol));
    }
    Ok(())
}
