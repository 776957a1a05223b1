//! HTML site generation.
//!
//! Stage 2 of the Shopfront build pipeline. Takes the scan manifest and
//! generates the final static storefront.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): hero, product grid, perks strip, footer
//! - **Content pages** (`/{slug}.html`): markdown pages converted to HTML
//!
//! ## The Product Grid
//!
//! Raw product references from the manifest are normalized fresh on every
//! generate pass ([`catalog::normalize`]). Each card gets:
//!
//! - a visual-variant class (`variant-small` … `variant-tall`) assigned
//!   deterministically from the product identity, so the collage layout is
//!   stable across rebuilds
//! - a primary image and a hover image (the next product's image, wrapping
//!   circularly)
//! - a Buy Now link deep-linking into WhatsApp with a pre-filled message
//!   carrying the product label and its absolute URL; without a configured
//!   phone number the link renders as an inert `#`
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Storefront page
//! ├── about.html                 # Content pages (one per markdown file)
//! ├── products/                  # Referenced product images (copied)
//! │   └── blue_hat.jpg
//! └── favicon.ico                # Anything from assets/ (copied to root)
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. CSS is
//! embedded at compile time from `static/style.css`, prefixed with custom
//! properties generated from the color and theme config.

use crate::catalog::{self, ProductRecord};
use crate::config::{self, SiteConfig};
use crate::contact;
use crate::scan::{Manifest, Page};
use crate::variant::pick_variant;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Counts reported after a generate pass.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// Product cards rendered on the index page.
    pub products_rendered: usize,
    /// Content pages written (link pages excluded).
    pub pages_written: usize,
    /// Image and asset files copied into the output tree.
    pub files_copied: usize,
}

const CSS_STATIC: &str = include_str!("../static/style.css");

pub fn generate(
    manifest_path: &Path,
    output_dir: &Path,
    source_root: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    // Records are derived fresh from the raw references on every pass
    let records = catalog::normalize(&manifest.products);

    let css = assemble_css(&manifest.config);

    fs::create_dir_all(output_dir)?;

    let mut summary = GenerateSummary {
        products_rendered: records.len(),
        ..GenerateSummary::default()
    };

    let index_html = render_index(&manifest, &records, &css);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;

    for page in manifest.pages.iter().filter(|p| !p.is_link) {
        let page_html = render_page(page, &manifest, &css);
        fs::write(
            output_dir.join(format!("{}.html", page.slug)),
            page_html.into_string(),
        )?;
        summary.pages_written += 1;
    }

    summary.files_copied += copy_product_sources(&records, source_root, output_dir)?;
    summary.files_copied += copy_assets(source_root, output_dir)?;

    Ok(summary)
}

/// Stitch the page CSS: generated custom properties first, then the static
/// stylesheet that consumes them.
fn assemble_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    )
}

/// Copy every referenced product image that exists under the content root
/// into the same relative location in the output tree. Missing sources are
/// skipped; the page still renders and the scan report flags them.
fn copy_product_sources(
    records: &[ProductRecord],
    source_root: &Path,
    output_dir: &Path,
) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for record in records {
        for src in [&record.src, &record.src2] {
            let rel = src.trim_start_matches('/');
            if rel.is_empty() {
                continue;
            }
            let from = source_root.join(rel);
            if !from.is_file() {
                continue;
            }
            let to = output_dir.join(rel);
            if to.exists() {
                // src2 usually repeats another record's src
                continue;
            }
            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Copy the contents of `assets/` (if present) into the output root.
fn copy_assets(source_root: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    let assets = source_root.join("assets");
    if !assets.is_dir() {
        return Ok(0);
    }
    copy_dir_recursive(&assets, output_dir).map_err(GenerateError::Io)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the site header: brand, shop anchor, and page links.
pub fn render_header(store_name: &str, pages: &[Page]) -> Markup {
    html! {
        header.site-header {
            div.brand {
                a href="/" { (store_name) }
            }
            nav.site-nav {
                a href="/#products" { "Shop" }
                @for page in pages.iter().filter(|p| p.in_nav) {
                    @if page.is_link {
                        a href=(page.body.trim()) target="_blank" rel="noopener" {
                            (page.link_title)
                        }
                    } @else {
                        a href={ "/" (page.slug) ".html" } { (page.link_title) }
                    }
                }
            }
        }
    }
}

/// Renders the site footer: brand, note, and page links.
fn render_footer(config: &SiteConfig, pages: &[Page]) -> Markup {
    html! {
        footer.site-footer {
            div.footer-left {
                strong { (config.store.name) }
                @if !config.store.footer_note.is_empty() {
                    " — " (config.store.footer_note)
                }
            }
            div.footer-right {
                @for page in pages.iter().filter(|p| p.in_nav && !p.is_link) {
                    a href={ "/" (page.slug) ".html" } { (page.link_title) }
                }
            }
        }
    }
}

/// Renders the hero section.
fn render_hero(config: &SiteConfig) -> Markup {
    html! {
        section.hero {
            div.hero-copy {
                h1 { (config.hero.title) }
                p { (config.hero.copy) }
                a.hero-cta href="#products" { (config.hero.cta_label) }
                @if !config.hero.note.is_empty() {
                    div.hero-note { (config.hero.note) }
                }
            }
        }
    }
}

/// Renders one product card.
///
/// The variant class drives the card height; the hover image and Buy Now
/// button are revealed on `:hover` by the static stylesheet.
fn render_product_card(record: &ProductRecord, index: usize, config: &SiteConfig) -> Markup {
    let variant = pick_variant(&record.variant_seed(index));
    let label = record.label(index);
    let product_url = catalog::absolute_url(&config.site_url, &record.src);
    let buy_link = contact::build_contact_link(&config.contact.phone, &product_url, &label);

    html! {
        div.card aria-label=(label) {
            div class={ "card-visual variant-" (variant.as_str()) } {
                img.primary src=(record.src) alt=(record.alt) loading="lazy" decoding="async";
                @if !record.src2.is_empty() {
                    img.secondary src=(record.src2) alt={ (record.alt) " alt" } loading="lazy" decoding="async";
                }
                a.buy-now href=(buy_link) target="_blank" rel="noopener noreferrer"
                    aria-label={ "Buy " (label) } {
                    "Buy Now"
                }
                span.sr-only { (label) }
            }
        }
    }
}

/// Renders the product grid section. An empty catalog renders nothing.
pub fn render_product_grid(records: &[ProductRecord], config: &SiteConfig) -> Markup {
    if records.is_empty() {
        return html! {};
    }
    html! {
        section.catalog id="products" {
            h2.section-title { (config.catalog.heading) }
            div.product-grid {
                @for (index, record) in records.iter().enumerate() {
                    (render_product_card(record, index, config))
                }
            }
        }
    }
}

/// Renders the perks strip below the grid.
fn render_perks(perks: &[String]) -> Markup {
    if perks.is_empty() {
        return html! {};
    }
    html! {
        section.perks {
            @for perk in perks {
                div.perk { (perk) }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the storefront index page.
fn render_index(manifest: &Manifest, records: &[ProductRecord], css: &str) -> Markup {
    let config = &manifest.config;
    let content = html! {
        (render_header(&config.store.name, &manifest.pages))
        main {
            (render_hero(config))
            (render_product_grid(records, config))
            (render_perks(&config.store.perks))
        }
        (render_footer(config, &manifest.pages))
    };
    base_document(&config.store.name, css, content)
}

/// Renders a content page from markdown.
fn render_page(page: &Page, manifest: &Manifest, css: &str) -> Markup {
    let parser = Parser::new(&page.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    let content = html! {
        (render_header(&manifest.config.store.name, &manifest.pages))
        main.page-content {
            article {
                (PreEscaped(body_html))
            }
        }
        (render_footer(&manifest.config, &manifest.pages))
    };
    base_document(&page.title, css, content)
}

// ============================================================================
// Tests
// ============================================================================
