//! Input loading: a delimited file with a header row, or a plain name list

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::seed::SeedData;
use crate::types::{Gender, Record};

pub const MEANING_FALLBACK: &str = "Meaning not available";
pub const ORIGIN_FALLBACK: &str = "Unknown";

/// Load and normalize records from the input file.
///
/// A missing file is reported on stderr and yields an empty list rather
/// than an error, so the caller can stop without touching the output
/// directory. Duplicate names (case-insensitive) keep their first
/// occurrence.
pub fn load_records(path: &Path, seed: &SeedData) -> Result<Vec<Record>> {
    if !path.exists() {
        eprintln!(
            "ERROR: input file not found at {}. Create a CSV with columns: name,meaning,origin,gender,traits,pronunciation or a plain list with one name per line.",
            path.display()
        );
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let records = if looks_delimited(path, &content) {
        parse_delimited(&content, seed)?
    } else {
        parse_name_list(&content, seed)
    };

    Ok(dedup_records(records))
}

/// A file is treated as delimited when it has a .csv extension or its
/// first non-blank line looks like a header containing a name column.
fn looks_delimited(path: &Path, content: &str) -> bool {
    if path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"))
    {
        return true;
    }
    let first = content
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");
    first
        .split(',')
        .any(|field| field.trim().eq_ignore_ascii_case("name"))
}

fn parse_delimited(content: &str, seed: &SeedData) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read header row")?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.context("Failed to parse row")?;
        let mut fields: HashMap<&str, &str> = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            fields.insert(header.as_str(), row.get(i).unwrap_or(""));
        }
        // skip rows that are completely empty
        if fields.values().all(|v| v.is_empty()) {
            continue;
        }
        records.push(record_from_fields(&fields, seed));
    }
    Ok(records)
}

fn parse_name_list(content: &str, seed: &SeedData) -> Vec<Record> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|name| {
            let mut fields = HashMap::new();
            fields.insert("name", name);
            record_from_fields(&fields, seed)
        })
        .collect()
}

fn record_from_fields(fields: &HashMap<&str, &str>, seed: &SeedData) -> Record {
    let get = |key: &str| fields.get(key).map_or("", |v| v.trim());

    let name = get("name").to_string();
    let meaning = match get("meaning") {
        "" => seed
            .meaning_for(&name)
            .unwrap_or(MEANING_FALLBACK)
            .to_string(),
        meaning => meaning.to_string(),
    };
    let origin = match get("origin") {
        "" => ORIGIN_FALLBACK.to_string(),
        origin => origin.to_string(),
    };

    let optional = |key: &str| {
        let value = get(key);
        (!value.is_empty()).then(|| value.to_string())
    };

    Record {
        name,
        meaning,
        origin,
        gender: match get("gender") {
            "" => None,
            gender => Some(Gender::from_str(gender)),
        },
        traits: optional("traits"),
        pronunciation: optional("pronunciation"),
        popularity: optional("popularity"),
    }
}

fn dedup_records(records: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for record in records {
        let key = record.name.to_lowercase();
        // blank names never dedup; they are counted as skipped later
        if !key.is_empty() && !seen.insert(key) {
            continue;
        }
        unique.push(record);
    }
    unique
}
