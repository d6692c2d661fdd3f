//! Site-wide artifacts: sitemap, robots.txt, names index, category pages

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use regex::Regex;

use crate::render::{html_escape, slugify, slugify_label};
use crate::types::{Gender, LengthBucket, Record, SiteConfig, SitemapFormat};

/// Merge this run's (url, lastmod) additions into the sitemap file.
///
/// Entries already in the file are kept and additions win on collisions,
/// so the sitemap only ever grows. Returns the total entry count.
pub fn merge_sitemap(
    path: &Path,
    additions: &BTreeMap<String, String>,
    format: SitemapFormat,
) -> Result<usize> {
    let mut entries = if path.exists() {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse_sitemap(&text, format)?
    } else {
        BTreeMap::new()
    };

    for (url, lastmod) in additions {
        entries.insert(url.clone(), lastmod.clone());
    }

    let content = match format {
        SitemapFormat::Xml => render_sitemap_xml(&entries),
        SitemapFormat::Text => render_sitemap_text(&entries),
    };
    fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Updated {} with {} URLs", path.display(), entries.len());
    Ok(entries.len())
}

fn parse_sitemap(text: &str, format: SitemapFormat) -> Result<BTreeMap<String, String>> {
    let mut entries = BTreeMap::new();
    match format {
        SitemapFormat::Xml => {
            let url_block = Regex::new(r"(?s)<url>(.*?)</url>")?;
            let loc = Regex::new(r"<loc>(.*?)</loc>")?;
            let lastmod = Regex::new(r"<lastmod>(.*?)</lastmod>")?;
            for block in url_block.captures_iter(text) {
                let body = &block[1];
                if let Some(m) = loc.captures(body) {
                    let last = lastmod
                        .captures(body)
                        .map_or(String::new(), |c| c[1].trim().to_string());
                    entries.insert(m[1].trim().to_string(), last);
                }
            }
        }
        SitemapFormat::Text => {
            for line in text.lines() {
                let line = line.trim();
                if !line.is_empty() {
                    entries.insert(line.to_string(), String::new());
                }
            }
        }
    }
    Ok(entries)
}

fn render_sitemap_xml(entries: &BTreeMap<String, String>) -> String {
    let today = Utc::now().date_naive().to_string();
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for (url, lastmod) in entries {
        let lastmod = if lastmod.is_empty() { &today } else { lastmod };
        out.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>monthly</changefreq>\n    <priority>0.6</priority>\n  </url>\n",
            url, lastmod
        ));
    }
    out.push_str("</urlset>\n");
    out
}

fn render_sitemap_text(entries: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for url in entries.keys() {
        out.push_str(url);
        out.push('\n');
    }
    out
}

/// Write an allow-all robots.txt pointing at the sitemap, unless the file
/// already declares one.
pub fn ensure_robots(path: &Path, config: &SiteConfig, sitemap_file: &str) -> Result<()> {
    let existing = if path.exists() {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        String::new()
    };
    if existing.contains("Sitemap:") {
        println!("robots.txt already contains a Sitemap line (left unchanged)");
        return Ok(());
    }
    let content = format!(
        "User-agent: *\nAllow: /\nSitemap: {}/{}\n",
        config.site_url, sitemap_file
    );
    fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Write names/index.html listing every page in processing order
pub fn write_names_index(
    names_dir: &Path,
    pages: &[(String, String)],
    config: &SiteConfig,
) -> Result<()> {
    fs::create_dir_all(names_dir)?;
    let rows: String = pages
        .iter()
        .map(|(url, label)| format!("<li><a href=\"{}\">{}</a></li>\n", url, html_escape(label)))
        .collect();
    let html = format!(
        r#"<!doctype html>
<html lang="en"><head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width,initial-scale=1" />
<title>Names index — {site}</title>
<meta name="description" content="Index of generated name meaning pages" />
</head><body>
<h1>Names index</h1>
<ul>
{rows}</ul>
<p><a href="{home}">Back to Home</a></p>
</body></html>"#,
        site = html_escape(&config.site_name),
        rows = rows,
        home = config.site_url,
    );
    let path = names_dir.join("index.html");
    fs::write(&path, html)?;
    println!("Wrote index with {} entries to {}", pages.len(), path.display());
    Ok(())
}

fn render_category_page(
    title: &str,
    description: &str,
    items: &[(String, String)],
    config: &SiteConfig,
) -> String {
    let rows: String = items
        .iter()
        .map(|(url, label)| format!("<li><a href=\"{}\">{}</a></li>\n", url, html_escape(label)))
        .collect();
    format!(
        r#"<!doctype html>
<html lang="en"><head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>{title}</title>
<meta name="description" content="{desc}"/>
</head><body>
<header><a href="{home}">Home</a> › <strong>{title}</strong></header>
<main>
<h1>{title}</h1>
<p>{desc}</p>
<ul>
{rows}</ul>
<p><a href="{home}/categories/index.html">All categories</a></p>
</main>
<footer>© {year} {site}</footer>
</body></html>"#,
        title = html_escape(title),
        desc = html_escape(description),
        home = config.site_url,
        rows = rows,
        year = Utc::now().year(),
        site = html_escape(&config.site_name),
    )
}

/// Write category pages grouping records by gender, origin, and name
/// length, plus the categories index.
///
/// Returns (url, lastmod) for every file written so the caller can merge
/// them into the sitemap.
pub fn write_category_pages(
    records: &[Record],
    categories_dir: &Path,
    config: &SiteConfig,
) -> Result<Vec<(String, String)>> {
    fs::create_dir_all(categories_dir)?;

    let mut by_gender: HashMap<Gender, Vec<(String, String)>> = HashMap::new();
    let mut by_origin: HashMap<String, Vec<(String, String)>> = HashMap::new();
    let mut by_length: HashMap<LengthBucket, Vec<(String, String)>> = HashMap::new();

    for record in records {
        let name = record.name.trim();
        if name.is_empty() {
            continue;
        }
        let url = format!("{}/names/{}.html", config.site_url, slugify(name));
        let item = (url, name.to_string());

        by_gender
            .entry(record.gender.unwrap_or(Gender::UnisexUnknown))
            .or_default()
            .push(item.clone());
        by_origin
            .entry(record.origin.clone())
            .or_default()
            .push(item.clone());
        by_length
            .entry(record.length_bucket())
            .or_default()
            .push(item);
    }

    // Gender buckets, alphabetical by label
    let mut genders: Vec<_> = by_gender.into_iter().collect();
    genders.sort_by(|a, b| a.0.label().cmp(b.0.label()));

    // Origin buckets, busiest first, then alphabetical
    let mut origins: Vec<_> = by_origin.into_iter().collect();
    origins.sort_by(|a, b| {
        b.1.len()
            .cmp(&a.1.len())
            .then_with(|| a.0.to_lowercase().cmp(&b.0.to_lowercase()))
    });

    // Length buckets in Short, Medium, Long order
    let mut lengths: Vec<_> = by_length.into_iter().collect();
    lengths.sort_by_key(|e| e.0);

    let today = Utc::now().date_naive().to_string();
    let mut written = Vec::new();
    let mut index_rows = Vec::new();

    for (gender, mut items) in genders {
        sort_by_label(&mut items);
        let title = format!("{} Names", gender.label());
        let desc = format!("{} {} names from the site.", items.len(), gender.label().to_lowercase());
        let filename = format!("{}.html", gender.slug());
        let url = write_category_file(categories_dir, &filename, &title, &desc, &items, config)?;
        index_rows.push((url.clone(), format!("{} ({})", gender.label(), items.len())));
        written.push((url, today.clone()));
    }

    for (origin, mut items) in origins {
        sort_by_label(&mut items);
        let title = format!("{} Names", origin);
        let desc = format!("{} names with origin: {}.", items.len(), origin);
        let filename = format!("origin-{}.html", slugify_label(&origin));
        let url = write_category_file(categories_dir, &filename, &title, &desc, &items, config)?;
        index_rows.push((url.clone(), format!("{} ({})", origin, items.len())));
        written.push((url, today.clone()));
    }

    for (bucket, mut items) in lengths {
        sort_by_label(&mut items);
        let title = format!("{} Names", bucket.label());
        let desc = format!("{} names of length category: {}.", items.len(), bucket.label());
        let filename = format!("length-{}.html", bucket.slug());
        let url = write_category_file(categories_dir, &filename, &title, &desc, &items, config)?;
        index_rows.push((url.clone(), format!("{} ({})", bucket.label(), items.len())));
        written.push((url, today.clone()));
    }

    let index_html = render_category_page(
        "Categories",
        "Browse name categories by gender, origin, and length.",
        &index_rows,
        config,
    );
    fs::write(categories_dir.join("index.html"), index_html)?;
    written.push((format!("{}/categories/index.html", config.site_url), today));

    println!("Wrote {} category pages", written.len());
    Ok(written)
}

fn sort_by_label(items: &mut [(String, String)]) {
    items.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()));
}

fn write_category_file(
    categories_dir: &Path,
    filename: &str,
    title: &str,
    description: &str,
    items: &[(String, String)],
    config: &SiteConfig,
) -> Result<String> {
    let html = render_category_page(title, description, items, config);
    fs::write(categories_dir.join(filename), html)?;
    Ok(format!("{}/categories/{}", config.site_url, filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::new(
            "https://example.com",
            "Name Meaning Finder",
            "Name Meaning Finder",
            "en-IN",
        )
    }

    fn record(name: &str, origin: &str, gender: Option<Gender>) -> Record {
        Record {
            name: name.to_string(),
            meaning: "a meaning".to_string(),
            origin: origin.to_string(),
            gender,
            traits: None,
            pronunciation: None,
            popularity: None,
        }
    }

    fn locs(text: &str) -> Vec<String> {
        text.lines()
            .filter_map(|l| {
                l.trim()
                    .strip_prefix("<loc>")
                    .and_then(|l| l.strip_suffix("</loc>"))
                    .map(str::to_string)
            })
            .collect()
    }

    #[test]
    fn test_merge_sitemap_creates_sorted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        let mut additions = BTreeMap::new();
        additions.insert("https://example.com/names/zara.html".to_string(), "2026-01-02".to_string());
        additions.insert("https://example.com/names/arjun.html".to_string(), "2026-01-02".to_string());

        let count = merge_sitemap(&path, &additions, SitemapFormat::Xml).unwrap();
        assert_eq!(count, 2);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(text.contains("<changefreq>monthly</changefreq>"));
        assert!(text.contains("<priority>0.6</priority>"));
        assert_eq!(
            locs(&text),
            vec![
                "https://example.com/names/arjun.html",
                "https://example.com/names/zara.html"
            ]
        );
    }

    #[test]
    fn test_merge_sitemap_keeps_existing_and_updates_collisions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        fs::write(
            &path,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  <url>\n    <loc>https://example.com/old.html</loc>\n    <lastmod>2020-01-01</lastmod>\n  </url>\n  <url>\n    <loc>https://example.com/names/arjun.html</loc>\n    <lastmod>2020-01-01</lastmod>\n  </url>\n</urlset>\n",
        )
        .unwrap();

        let mut additions = BTreeMap::new();
        additions.insert("https://example.com/names/arjun.html".to_string(), "2026-08-22".to_string());

        let count = merge_sitemap(&path, &additions, SitemapFormat::Xml).unwrap();
        assert_eq!(count, 2);

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let arjun = lines
            .iter()
            .position(|l| *l == "<loc>https://example.com/names/arjun.html</loc>")
            .unwrap();
        assert_eq!(lines[arjun + 1], "<lastmod>2026-08-22</lastmod>");
        let old = lines
            .iter()
            .position(|l| *l == "<loc>https://example.com/old.html</loc>")
            .unwrap();
        assert_eq!(lines[old + 1], "<lastmod>2020-01-01</lastmod>");
    }

    #[test]
    fn test_merge_sitemap_fills_blank_lastmod_with_today() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        let mut additions = BTreeMap::new();
        additions.insert("https://example.com/a.html".to_string(), String::new());

        merge_sitemap(&path, &additions, SitemapFormat::Xml).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let today = Utc::now().date_naive().to_string();
        assert!(text.contains(&format!("<lastmod>{}</lastmod>", today)));
    }

    #[test]
    fn test_merge_sitemap_text_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.txt");
        fs::write(&path, "https://example.com/old.html\n").unwrap();

        let mut additions = BTreeMap::new();
        additions.insert("https://example.com/names/arjun.html".to_string(), "2026-08-22".to_string());

        let count = merge_sitemap(&path, &additions, SitemapFormat::Text).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "https://example.com/names/arjun.html\nhttps://example.com/old.html\n"
        );
    }

    #[test]
    fn test_merge_sitemap_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        let mut additions = BTreeMap::new();
        additions.insert("https://example.com/a.html".to_string(), "2026-08-22".to_string());

        merge_sitemap(&path, &additions, SitemapFormat::Xml).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        merge_sitemap(&path, &additions, SitemapFormat::Xml).unwrap();
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ensure_robots_writes_boilerplate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robots.txt");
        ensure_robots(&path, &config(), "sitemap.xml").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "User-agent: *\nAllow: /\nSitemap: https://example.com/sitemap.xml\n"
        );
    }

    #[test]
    fn test_ensure_robots_keeps_existing_sitemap_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robots.txt");
        let custom = "User-agent: *\nDisallow: /private/\nSitemap: https://example.com/custom.xml\n";
        fs::write(&path, custom).unwrap();
        ensure_robots(&path, &config(), "sitemap.xml").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), custom);
    }

    #[test]
    fn test_ensure_robots_replaces_file_without_sitemap_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robots.txt");
        fs::write(&path, "User-agent: *\nDisallow: /\n").unwrap();
        ensure_robots(&path, &config(), "sitemap.txt").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "User-agent: *\nAllow: /\nSitemap: https://example.com/sitemap.txt\n"
        );
    }

    #[test]
    fn test_write_names_index_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let pages = vec![
            ("https://example.com/names/zara.html".to_string(), "Zara".to_string()),
            ("https://example.com/names/arjun.html".to_string(), "Arjun".to_string()),
        ];
        write_names_index(dir.path(), &pages, &config()).unwrap();

        let text = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(text.contains("<h1>Names index</h1>"));
        let zara = text.find("Zara").unwrap();
        let arjun = text.find("Arjun").unwrap();
        assert!(zara < arjun);
    }

    #[test]
    fn test_write_category_pages() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            record("Arjun", "Sanskrit", Some(Gender::Male)),
            record("Zara", "Arabic", Some(Gender::Female)),
            record("Kiran", "Sanskrit", None),
            record("", "Sanskrit", Some(Gender::Male)),
        ];

        let written = write_category_pages(&records, dir.path(), &config()).unwrap();

        for filename in [
            "male.html",
            "female.html",
            "unisex-unknown.html",
            "origin-sanskrit.html",
            "origin-arabic.html",
            "length-short-1-4.html",
            "length-medium-5-7.html",
            "index.html",
        ] {
            assert!(dir.path().join(filename).exists(), "missing {}", filename);
        }
        assert_eq!(written.len(), 8);
        assert!(written
            .iter()
            .any(|(url, _)| url == "https://example.com/categories/index.html"));

        // members are sorted and the blank-name record is excluded
        let sanskrit = fs::read_to_string(dir.path().join("origin-sanskrit.html")).unwrap();
        assert!(sanskrit.contains("2 names with origin: Sanskrit."));
        let arjun = sanskrit.find("Arjun").unwrap();
        let kiran = sanskrit.find("Kiran").unwrap();
        assert!(arjun < kiran);

        let male = fs::read_to_string(dir.path().join("male.html")).unwrap();
        assert!(male.contains("1 male names from the site."));
        assert!(male.contains(r#"href="https://example.com/names/arjun.html""#));

        // index rows carry counts, origins ordered by descending count
        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains("Male (1)"));
        assert!(index.contains("Sanskrit (2)"));
        let sanskrit_pos = index.find("Sanskrit (2)").unwrap();
        let arabic_pos = index.find("Arabic (1)").unwrap();
        assert!(sanskrit_pos < arabic_pos);

        // length buckets listed shortest first
        let short_pos = index.find("Short (1-4) (1)").unwrap();
        let medium_pos = index.find("Medium (5-7) (2)").unwrap();
        assert!(short_pos < medium_pos);
    }
}
