use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

mod generate;
mod load;
mod render;
mod seed;
mod site;
mod types;

pub use types::*;

use generate::GenerateOptions;

pub const DEFAULT_SITE_URL: &str = "https://name-meaning-site.vercel.app";
pub const DEFAULT_SITE_NAME: &str = "Name Meaning Finder";
pub const DEFAULT_LOCALE: &str = "en-IN";

#[derive(Parser)]
#[command(name = "name-pages")]
#[command(about = "Static name-meaning site generator: pages, categories, sitemap, robots")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate name pages, category pages, sitemap, robots.txt, and index
    Generate {
        /// Input file: CSV with a header row, or one name per line
        #[arg(short, long, default_value = "names.csv")]
        input: PathBuf,
        /// Output directory for the generated site
        #[arg(short, long, default_value = "public")]
        output: PathBuf,
        /// Site base URL, including https://
        #[arg(long, default_value = DEFAULT_SITE_URL)]
        site_url: String,
        /// Site name used in titles and footers
        #[arg(long, default_value = DEFAULT_SITE_NAME)]
        site_name: String,
        /// Structured-data author (defaults to the site name)
        #[arg(long)]
        author: Option<String>,
        /// Sitemap flavor to write and merge into
        #[arg(long, value_enum, default_value = "xml")]
        sitemap_format: SitemapFormat,
        /// JSON file overriding the built-in phrase pools and meanings
        #[arg(long)]
        seed_file: Option<PathBuf>,
    },
    /// Remove generated files from the output directory
    Clean {
        /// Output directory to clean
        #[arg(short, long, default_value = "public")]
        output: PathBuf,
    },
}

fn run_clean(output: &Path) -> Result<()> {
    println!("Cleaning generated files...");

    for dir in ["names", "categories"] {
        let path = output.join(dir);
        if path.exists() {
            fs::remove_dir_all(&path)?;
            println!("  Removed {}/", path.display());
        }
    }

    for file in ["sitemap.xml", "sitemap.txt", "robots.txt"] {
        let path = output.join(file);
        if path.exists() {
            fs::remove_file(&path)?;
            println!("  Removed {}", path.display());
        }
    }

    println!("Clean complete!");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            site_url,
            site_name,
            author,
            sitemap_format,
            seed_file,
        } => {
            let author = author.unwrap_or_else(|| site_name.clone());
            let site = SiteConfig::new(&site_url, &site_name, &author, DEFAULT_LOCALE);
            generate::run_generate(&GenerateOptions {
                input,
                output,
                site,
                sitemap_format,
                seed_file,
            })
        }
        Commands::Clean { output } => run_clean(&output),
    }
}
