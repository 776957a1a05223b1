//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (product, page) is its semantic identity — label and
//! positional index — with filesystem paths shown as secondary context via
//! indented `Source:` lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Catalog
//! 001 blue hat (medium)
//!     Source: products/blue_hat.jpg
//! 002 red shoes (tall)
//!     Source: products/red_shoes.jpg (missing)
//!
//! Pages
//! 001 about
//! 002 instagram (external link)
//!
//! Config
//!     site: http://localhost:3000
//!     contact: no phone - Buy Now links render as placeholders
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 about → about.html
//! Generated 5 product cards, 1 page, 6 files copied
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O beyond the existence probe the caller
//! already paid for.

use crate::catalog;
use crate::generate::GenerateSummary;
use crate::scan::Manifest;
use crate::variant::pick_variant;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

const INDENT: &str = "    ";

// ============================================================================
// Scan output
// ============================================================================

/// Format the scan report: catalog listing, pages, config summary.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    let records = catalog::normalize(&manifest.products);
    if !records.is_empty() {
        lines.push("Catalog".to_string());
        for (i, record) in records.iter().enumerate() {
            let variant = pick_variant(&record.variant_seed(i));
            lines.push(format!(
                "{} {} ({})",
                format_index(i + 1),
                record.label(i),
                variant.as_str()
            ));
            if !record.src.is_empty() {
                let rel = record.src.trim_start_matches('/');
                let missing = if source_root.join(rel).is_file() {
                    ""
                } else {
                    " (missing)"
                };
                lines.push(format!("{INDENT}Source: {rel}{missing}"));
            }
        }
        lines.push(String::new());
    }

    if !manifest.pages.is_empty() {
        lines.push("Pages".to_string());
        for (i, page) in manifest.pages.iter().enumerate() {
            let marker = if page.is_link {
                " (external link)"
            } else if !page.in_nav {
                " (hidden)"
            } else {
                ""
            };
            lines.push(format!(
                "{} {}{marker}",
                format_index(i + 1),
                page.link_title
            ));
        }
        lines.push(String::new());
    }

    lines.push("Config".to_string());
    lines.push(format!("{INDENT}site: {}", manifest.config.site_url));
    let has_phone = manifest
        .config
        .contact
        .phone
        .chars()
        .any(|c| c.is_ascii_digit());
    lines.push(if has_phone {
        format!("{INDENT}contact: phone configured")
    } else {
        format!("{INDENT}contact: no phone - Buy Now links render as placeholders")
    });

    lines
}

/// Print the scan report to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{line}");
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format the generate report: written files and totals.
pub fn format_generate_output(manifest: &Manifest, summary: &GenerateSummary) -> Vec<String> {
    let mut lines = vec!["Home → index.html".to_string()];

    for (i, page) in manifest.pages.iter().enumerate() {
        if page.is_link {
            lines.push(format!(
                "{} {} → (external link)",
                format_index(i + 1),
                page.link_title
            ));
        } else {
            lines.push(format!(
                "{} {} → {}.html",
                format_index(i + 1),
                page.link_title,
                page.slug
            ));
        }
    }

    lines.push(format!(
        "Generated {} product cards, {} {}, {} files copied",
        summary.products_rendered,
        summary.pages_written,
        if summary.pages_written == 1 {
            "page"
        } else {
            "pages"
        },
        summary.files_copied
    ));
    lines
}

/// Print the generate report to stdout.
pub fn print_generate_output(manifest: &Manifest, summary: &GenerateSummary) {
    for line in format_generate_output(manifest, summary) {
        println!("{line}");
    }
}
