//! Per-name page rendering

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use rand::seq::SliceRandom;
use serde_json::json;

use crate::seed::SeedData;
use crate::types::{Gender, LengthBucket, Page, Record, SiteConfig};

// Characters dropped entirely before hyphenation, so "O'Brien" becomes
// "obrien" rather than "o-brien"
const STRIPPED_PUNCTUATION: &str = "\u{2019}'`\".,:;!@#$%^&*()_+=[]{}<>?/\\";

/// Slugify a personal name for URL use
pub fn slugify(name: &str) -> String {
    let slug = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(*c))
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "name".to_string()
    } else {
        slug
    }
}

/// Slugify a category label, keeping hyphens already present
pub fn slugify_label(label: &str) -> String {
    let slug = label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "unknown".to_string()
    } else {
        slug
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Meta description capped at 155 characters, cut at a word boundary
fn meta_description(name: &str, meaning: &str, origin: &str, traits: &str) -> String {
    let full = format!(
        "{} meaning: {}. Origin: {}. Traits: {}.",
        name, meaning, origin, traits
    );
    if full.chars().count() <= 155 {
        return full;
    }
    let head: String = full.chars().take(152).collect();
    let body = match head.rfind(' ') {
        Some(i) => &head[..i],
        None => head.as_str(),
    };
    format!("{}...", body)
}

fn pick(pool: &[String]) -> &str {
    pool.choose(&mut rand::thread_rng())
        .map(String::as_str)
        .unwrap_or("")
}

fn fill_template(template: &str, record: &Record, traits: &str) -> String {
    template
        .replace("{name}", &record.name)
        .replace("{meaning}", &record.meaning)
        .replace("{origin}", &record.origin)
        .replace("{traits}", traits)
}

/// Short prose section built from the seed phrase pools
fn description_paragraphs(record: &Record, traits: &str, seed: &SeedData) -> String {
    let mut parts = vec![
        fill_template(pick(&seed.opening_templates), record, traits),
        fill_template(pick(&seed.origin_templates), record, traits),
        fill_template(pick(&seed.personality_templates), record, traits),
    ];
    if let Some(pronunciation) = &record.pronunciation {
        parts.push(format!("Pronunciation: {}.", pronunciation));
    }
    if let Some(popularity) = &record.popularity {
        parts.push(format!("Popularity: {}.", popularity));
    }
    if let Some(gender) = record.gender {
        parts.push(format!("Commonly used for: {}.", gender.label()));
    }
    parts
        .iter()
        .map(|p| format!("<p>{}</p>", html_escape(p)))
        .collect()
}

/// WebPage + DefinedTerm + BreadcrumbList structured data
fn json_ld_block(record: &Record, page_url: &str, config: &SiteConfig) -> String {
    let description: String = record
        .meaning
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(197)
        .collect();
    let graph = json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "WebPage",
                "@id": page_url,
                "name": record.name,
                "description": description,
                "url": page_url,
                "inLanguage": config.locale,
                "author": {"@type": "Organization", "name": config.author}
            },
            {
                "@type": "DefinedTerm",
                "name": record.name,
                "description": record.meaning,
                "inDefinedTermSet": config.site_url
            },
            {
                "@type": "BreadcrumbList",
                "itemListElement": [
                    {"@type": "ListItem", "position": 1, "name": "Home", "item": format!("{}/", config.site_url)},
                    {"@type": "ListItem", "position": 2, "name": "Names", "item": format!("{}/names/", config.site_url)},
                    {"@type": "ListItem", "position": 3, "name": record.name, "item": page_url}
                ]
            }
        ]
    });
    let pretty = serde_json::to_string_pretty(&graph).unwrap_or_default();
    format!(
        "<script type=\"application/ld+json\">\n{}\n</script>",
        pretty
    )
}

/// CSS styles for name pages
fn css_styles() -> &'static str {
    r#"body{font-family:system-ui,-apple-system,Segoe UI,Roboto,'Helvetica Neue',Arial;max-width:820px;margin:28px auto;padding:0 18px;color:#111;line-height:1.6}
    header h1{font-size:28px;margin:8px 0 4px}
    .meta{color:#666;font-size:14px;margin-bottom:14px}
    .content p{margin:0 0 14px}
    footer{margin-top:36px;font-size:13px;color:#666}
    a.button{display:inline-block;padding:8px 12px;border-radius:6px;border:1px solid #ddd;text-decoration:none;color:inherit}"#
}

/// Build the page for one record. Returns None when the name is blank;
/// such records produce no output and are counted as skipped.
pub fn build_page(record: &Record, seed: &SeedData, config: &SiteConfig) -> Option<Page> {
    let name = record.name.trim();
    if name.is_empty() {
        return None;
    }

    let slug = slugify(name);
    let page_url = format!("{}/names/{}.html", config.site_url, slug);
    let lastmod = Utc::now().date_naive();

    // one draw per record, reused by the meta description and the prose
    let traits = match &record.traits {
        Some(traits) => traits.clone(),
        None => pick(&seed.default_traits).to_string(),
    };

    let title = format!("{} Meaning — {} | {}", name, record.meaning, config.site_name);
    let meta_desc = meta_description(name, &record.meaning, &record.origin, &traits);

    let gender = record.gender.unwrap_or(Gender::UnisexUnknown);
    let bucket = LengthBucket::from_name(name);
    let cat_gender_url = format!("{}/categories/{}.html", config.site_url, gender.slug());
    let cat_origin_url = format!(
        "{}/categories/origin-{}.html",
        config.site_url,
        slugify_label(&record.origin)
    );
    let cat_length_url = format!("{}/categories/length-{}.html", config.site_url, bucket.slug());

    let html = format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>{title}</title>
  <meta name="description" content="{desc}" />
  <link rel="canonical" href="{url}" />
  <meta property="og:type" content="article" />
  <meta property="og:site_name" content="{site}" />
  <meta property="og:title" content="{title}" />
  <meta property="og:description" content="{desc}" />
  <meta property="og:url" content="{url}" />
  <meta property="og:image" content="{og_image}" />
  <meta name="twitter:card" content="summary_large_image" />
  <meta name="twitter:title" content="{title}" />
  <meta name="twitter:description" content="{desc}" />
{json_ld}
  <style>
    {styles}
  </style>
</head>
<body>
  <header>
    <a href="{home}" class="button">← Home</a>
    <h1>{name}</h1>
    <div class="meta">Meaning: <strong>{meaning}</strong> • Origin: {origin} • Pronunciation: {pronunciation}</div>
  </header>
  <main class="content">
    {description}
    <p>Categories:
      <a href="{cat_gender_url}">{gender_label}</a> |
      <a href="{cat_origin_url}">{origin_label}</a> |
      <a href="{cat_length_url}">{length_label}</a>
    </p>
    <h3>Quick facts</h3>
    <ul>
      <li><strong>Name:</strong> {name}</li>
      <li><strong>Meaning:</strong> {meaning}</li>
      <li><strong>Origin:</strong> {origin}</li>
      <li><strong>URL:</strong> <a href="{url}">{url}</a></li>
    </ul>
  </main>
  <footer>
    <p>© {year} {site} — <a href="{home}/privacy">Privacy</a> • <a href="{home}/contact">Contact</a></p>
  </footer>
</body>
</html>
"#,
        title = html_escape(&title),
        desc = html_escape(&meta_desc),
        url = page_url,
        site = html_escape(&config.site_name),
        og_image = format!("{}/og-default.png", config.site_url),
        json_ld = json_ld_block(record, &page_url, config),
        styles = css_styles(),
        home = config.site_url,
        name = html_escape(name),
        meaning = html_escape(&record.meaning),
        origin = html_escape(&record.origin),
        pronunciation = html_escape(record.pronunciation.as_deref().unwrap_or("")),
        description = description_paragraphs(record, &traits, seed),
        cat_gender_url = cat_gender_url,
        gender_label = html_escape(gender.label()),
        cat_origin_url = cat_origin_url,
        origin_label = html_escape(&record.origin),
        cat_length_url = cat_length_url,
        length_label = html_escape(bucket.label()),
        year = Utc::now().year(),
    );

    Some(Page {
        slug,
        url: page_url,
        html,
        lastmod,
    })
}

/// Write a page under its slug. Returns true when an existing file was
/// replaced, false when the file is new.
pub fn write_page(page: &Page, names_dir: &Path) -> Result<bool> {
    let path = names_dir.join(format!("{}.html", page.slug));
    let existed = path.exists();
    fs::write(&path, &page.html)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(existed)
}
