//! Assertions over the `{ "content": ... }` JSON envelope.

use anyhow::{Context, Result};
use predicates::prelude::*;
use serde_json::Value;

fn recipes(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["recipes"]
        .as_array()
        .context("Expected 'content.recipes' array in JSON")
}

/// Assert the listed recipe names, in order.
pub fn assert_recipe_names(json: &Value, expected: &[&str]) -> Result<()> {
    let names: Vec<&str> = recipes(json)?
        .iter()
        .map(|r| r["name"].as_str().unwrap_or_default())
        .collect();

    if names != expected {
        anyhow::bail!("Expected recipes {:?}, got {:?}", expected, names);
    }
    Ok(())
}

pub fn assert_recipe_count(json: &Value, expected: usize) -> Result<()> {
    let count = recipes(json)?.len();
    if count != expected {
        anyhow::bail!("Expected {} recipes, got {}", expected, count);
    }
    Ok(())
}

/// Assert `content.stats`, present in both `list` and `stats` output.
pub fn assert_stats(
    json: &Value,
    count: u64,
    average_rating: f64,
    average_prep_time: u64,
) -> Result<()> {
    let stats = &json["content"]["stats"];
    let actual_count = stats["count"].as_u64().context("Expected 'stats.count'")?;
    let actual_rating = stats["averageRating"]
        .as_f64()
        .context("Expected 'stats.averageRating'")?;
    let actual_prep = stats["averagePrepTime"]
        .as_u64()
        .context("Expected 'stats.averagePrepTime'")?;

    if actual_count != count
        || (actual_rating - average_rating).abs() > 1e-9
        || actual_prep != average_prep_time
    {
        anyhow::bail!(
            "Expected stats ({}, {}, {}), got ({}, {}, {})",
            count,
            average_rating,
            average_prep_time,
            actual_count,
            actual_rating,
            actual_prep
        );
    }
    Ok(())
}

pub fn assert_output_contains(output: &str, needle: &str) -> Result<()> {
    if !predicate::str::contains(needle).eval(output) {
        anyhow::bail!("Expected output to contain {:?}, got:\n{}", needle, output);
    }
    Ok(())
}
