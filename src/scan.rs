//! Content scanning and manifest generation.
//!
//! Stage 1 of the Shopfront build pipeline. Reads the content directory and
//! produces a structured manifest that the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── assets/                      # Static assets → copied to output root
//! ├── products/                    # Product images (when no explicit list)
//! │   ├── blue_hat.jpg             # Label derived from filename ("blue hat")
//! │   ├── red_shoes.jpg
//! │   └── seasonal/wool_scarf.png  # Subdirectories are walked too
//! ├── 010-about.md                 # Page (numbered = appears in nav)
//! └── 050-instagram.md             # External link page (URL-only content)
//! ```
//!
//! ## Product Sources
//!
//! Products come from one of two places:
//! - The explicit `catalog.products` list in `config.toml`, verbatim.
//! - Otherwise, every image file under `catalog.source_dir`, walked
//!   recursively and ordered by path.
//!
//! Either way the manifest carries *raw* references; normalization into
//! render-ready records happens fresh in the generate stage.
//!
//! ## Pages
//!
//! Markdown files in the content root become pages:
//! - Numbered files (`NNN-name.md`) appear in navigation, sorted by number
//! - Unnumbered files are generated but hidden from navigation
//! - A file whose only content is a URL becomes an external nav link
//!
//! ## Validation
//!
//! Malformed product references never fail the scan (they degrade during
//! normalization), but two pages resolving to the same output file do:
//! duplicate slugs are an error.

use crate::catalog::ProductInput;
use crate::config::{self, SiteConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Duplicate page slug '{0}'")]
    DuplicatePageSlug(String),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    /// Raw product references, in display order.
    pub products: Vec<ProductInput>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Page>,
    pub config: SiteConfig,
}

/// A page generated from a markdown file in the content root.
///
/// Pages follow the `NNN-name.md` numbering convention:
/// - Numbered files appear in navigation, sorted by number
/// - Unnumbered files are generated but hidden from navigation
///
/// If the file content is just a URL, the page becomes an external link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Title from first `# heading` in markdown, or link_title as fallback
    pub title: String,
    /// Display label in nav (filename with number stripped and dashes → spaces)
    pub link_title: String,
    /// URL slug (filename stem with number prefix stripped)
    pub slug: String,
    /// Raw markdown content (or URL for link pages)
    pub body: String,
    /// Whether this page appears in navigation (has number prefix)
    pub in_nav: bool,
    /// Sort key from number prefix (for ordering)
    pub sort_key: u32,
    /// If true, body is a URL and this page is an external link
    pub is_link: bool,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif"];

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    // Load site config first (uses defaults if config.toml doesn't exist);
    // it decides where products come from.
    let config = config::load_config(root)?;

    let products = if config.catalog.products.is_empty() {
        discover_products(root, &config.catalog.source_dir)?
    } else {
        config.catalog.products.clone()
    };

    let pages = parse_pages(root)?;

    Ok(Manifest {
        products,
        pages,
        config,
    })
}

/// Walk `source_dir` and collect every image file as a plain path reference,
/// ordered by path. A missing directory is an empty catalog, not an error.
fn discover_products(root: &Path, source_dir: &str) -> Result<Vec<ProductInput>, ScanError> {
    let dir = root.join(source_dir);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut products = Vec::new();
    for entry in WalkDir::new(&dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_image(entry.path()) {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap();
        products.push(ProductInput::Path(rel.to_string_lossy().to_string()));
    }
    Ok(products)
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Parse all markdown files in the root directory into pages.
fn parse_pages(root: &Path) -> Result<Vec<Page>, ScanError> {
    let mut md_files: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("md"))
                    .unwrap_or(false)
        })
        .collect();
    md_files.sort();

    let mut pages = Vec::new();
    let mut seen = BTreeSet::new();
    for md_path in &md_files {
        let page = parse_page(md_path)?;
        if !seen.insert(page.slug.clone()) {
            return Err(ScanError::DuplicatePageSlug(page.slug));
        }
        pages.push(page);
    }

    pages.sort_by_key(|p| p.sort_key);
    Ok(pages)
}

fn parse_page(md_path: &Path) -> Result<Page, ScanError> {
    let stem = md_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let (in_nav, sort_key, name) = match split_numbered(&stem) {
        Some((num, name)) => (true, num, name.to_string()),
        None => (false, u32::MAX, stem),
    };

    let link_title = name.replace('-', " ");
    let slug = name;

    let content = fs::read_to_string(md_path)?;
    let trimmed = content.trim();

    // A page whose only content is a URL becomes an external link
    let is_link = !trimmed.contains('\n')
        && (trimmed.starts_with("http://") || trimmed.starts_with("https://"));

    let title = if is_link {
        link_title.clone()
    } else {
        content
            .lines()
            .find(|line| line.starts_with("# "))
            .map(|line| line.trim_start_matches("# ").trim().to_string())
            .unwrap_or_else(|| link_title.clone())
    };

    Ok(Page {
        title,
        link_title,
        slug,
        body: content,
        in_nav,
        sort_key,
        is_link,
    })
}

/// Split a `NNN-name` stem into its sort number and name part.
///
/// Returns `None` when there is no numeric prefix followed by a dash.
fn split_numbered(stem: &str) -> Option<(u32, &str)> {
    let digits = stem.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = stem[digits..].strip_prefix('-')?;
    stem[..digits].parse().ok().map(|num| (num, rest))
}
