//! Record and page types shared across the generator

use chrono::NaiveDate;
use clap::ValueEnum;

/// Gender bucket for a name (normalized from free-form input)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gender {
    Male,
    Female,
    UnisexUnknown,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::UnisexUnknown => "Unisex/Unknown",
        }
    }

    /// Filename stem for this bucket's category page
    pub fn slug(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::UnisexUnknown => "unisex-unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            _ => Gender::UnisexUnknown,
        }
    }
}

/// Length bucket for a name, counted without spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LengthBucket {
    Short,
    Medium,
    Long,
}

impl LengthBucket {
    pub fn from_name(name: &str) -> Self {
        let len = name.chars().filter(|c| *c != ' ').count();
        match len {
            0..=4 => LengthBucket::Short,
            5..=7 => LengthBucket::Medium,
            _ => LengthBucket::Long,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LengthBucket::Short => "Short (1-4)",
            LengthBucket::Medium => "Medium (5-7)",
            LengthBucket::Long => "Long (8+)",
        }
    }

    /// Filename stem for this bucket's category page
    pub fn slug(&self) -> &'static str {
        match self {
            LengthBucket::Short => "short-1-4",
            LengthBucket::Medium => "medium-5-7",
            LengthBucket::Long => "long-8",
        }
    }
}

/// Sitemap flavor written by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SitemapFormat {
    Xml,
    Text,
}

impl SitemapFormat {
    pub fn filename(self) -> &'static str {
        match self {
            SitemapFormat::Xml => "sitemap.xml",
            SitemapFormat::Text => "sitemap.txt",
        }
    }
}

/// One name row after normalization
#[derive(Debug, Clone)]
pub struct Record {
    pub name: String,
    pub meaning: String,
    pub origin: String,
    pub gender: Option<Gender>,
    pub traits: Option<String>,
    pub pronunciation: Option<String>,
    pub popularity: Option<String>,
}

impl Record {
    pub fn length_bucket(&self) -> LengthBucket {
        LengthBucket::from_name(&self.name)
    }
}

/// Rendered page for one record, ready to write
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub url: String,
    pub html: String,
    pub lastmod: NaiveDate,
}

/// Site-wide settings shared by every rendered page
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base URL without a trailing slash
    pub site_url: String,
    pub site_name: String,
    pub author: String,
    pub locale: String,
}

impl SiteConfig {
    pub fn new(site_url: &str, site_name: &str, author: &str, locale: &str) -> Self {
        SiteConfig {
            site_url: site_url.trim_end_matches('/').to_string(),
            site_name: site_name.to_string(),
            author: author.to_string(),
            locale: locale.to_string(),
        }
    }
}
