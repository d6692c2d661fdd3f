use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::load::load_records;
use crate::render::{build_page, write_page};
use crate::seed::SeedData;
use crate::site::{ensure_robots, merge_sitemap, write_category_pages, write_names_index};
use crate::types::{SiteConfig, SitemapFormat};

/// Resolved settings for one generate run
pub struct GenerateOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub site: SiteConfig,
    pub sitemap_format: SitemapFormat,
    pub seed_file: Option<PathBuf>,
}

pub fn run_generate(opts: &GenerateOptions) -> Result<()> {
    let seed = match &opts.seed_file {
        Some(path) => SeedData::load(path)?,
        None => SeedData::default(),
    };

    println!("Loading records...");
    let records = load_records(&opts.input, &seed)?;
    if records.is_empty() {
        println!("No records found in {}. Exiting.", opts.input.display());
        return Ok(());
    }
    println!("Loaded {} records", records.len());

    let names_dir = opts.output.join("names");
    let categories_dir = opts.output.join("categories");
    fs::create_dir_all(&names_dir)?;
    fs::create_dir_all(&categories_dir)?;

    println!("Generating name pages...");
    let mut sitemap_additions = BTreeMap::new();
    let mut index_pages = Vec::new();
    let mut created = 0;
    let mut overwritten = 0;
    let mut skipped = 0;

    for record in &records {
        let page = match build_page(record, &seed, &opts.site) {
            Some(page) => page,
            None => {
                skipped += 1;
                continue;
            }
        };
        if write_page(&page, &names_dir)? {
            overwritten += 1;
        } else {
            created += 1;
        }
        sitemap_additions.insert(page.url.clone(), page.lastmod.to_string());
        index_pages.push((page.url, record.name.trim().to_string()));
    }

    let sitemap_path = opts.output.join(opts.sitemap_format.filename());
    merge_sitemap(&sitemap_path, &sitemap_additions, opts.sitemap_format)?;
    ensure_robots(
        &opts.output.join("robots.txt"),
        &opts.site,
        opts.sitemap_format.filename(),
    )?;
    write_names_index(&names_dir, &index_pages, &opts.site)?;

    println!("Generating category pages...");
    let category_pages = write_category_pages(&records, &categories_dir, &opts.site)?;

    // category pages get sitemap entries too, merged in a second pass
    let category_additions: BTreeMap<String, String> = category_pages.into_iter().collect();
    merge_sitemap(&sitemap_path, &category_additions, opts.sitemap_format)?;

    println!(
        "Done! Created: {}, Overwritten: {}, Skipped: {}, Total processed: {}",
        created,
        overwritten,
        skipped,
        records.len()
    );
    Ok(())
}
