//! # Shopfront
//!
//! A minimal static site generator for single-page marketing storefronts.
//! Your filesystem is the data source: a directory of product images becomes
//! a responsive grid, markdown files become pages, and each product card
//! carries a Buy Now link that opens WhatsApp with a pre-filled message.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Shopfront processes content through two independent stages with a JSON
//! manifest between them:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (filesystem → structured data)
//! 2. Generate  manifest  →  dist/            (final HTML site + copied assets)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Inspectable catalogs**: `shopfront check` reports exactly what will
//!   render, including missing image files, without writing output.
//! - **Testability**: generation is a pure function from manifest to markup,
//!   so unit tests can exercise rendering without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — reads config, discovers products and pages, produces the manifest |
//! | [`generate`] | Stage 2 — renders the storefront HTML from the manifest using Maud |
//! | [`catalog`] | Product normalization: raw path/record references → render-ready records |
//! | [`variant`] | Deterministic visual-variant (card height) assignment |
//! | [`contact`] | WhatsApp deep-link construction for Buy Now buttons |
//! | [`config`] | `config.toml` loading, merging, validation, and CSS generation |
//! | [`output`] | CLI output formatting — catalog and build reports |
//!
//! # Design Decisions
//!
//! ## Total Normalization
//!
//! The product pipeline never fails. Loose references (paths, partial
//! records, even wrong-shaped config values) normalize into degraded but
//! renderable records; a missing phone number turns Buy Now links into
//! inert placeholders. A half-edited content directory still builds, and
//! `shopfront check` tells you what's off.
//!
//! ## Deterministic Collage
//!
//! Card heights vary to make the grid read as a collage, but the variant
//! for each product is a pure hash of its identity ([`variant`]). The same
//! product renders at the same size on every rebuild — no layout churn
//! between deploys, no diff noise in generated HTML.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Verbatim Assets
//!
//! Product images are copied into the output tree untouched. Storefront
//! photos arrive already sized for the web, and WhatsApp link previews need
//! the published image URL to match what the page shows. No encoder, no
//! system dependencies; the binary is fully self-contained.
//!
//! # The Published Site
//!
//! The output is plain HTML and one embedded stylesheet — no JavaScript at
//! all. Hover states, the image swap, and the Buy Now reveal are pure CSS.
//! The generated site can be dropped on any file server.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod generate;
pub mod output;
pub mod scan;
pub mod variant;

#[cfg(test)]
pub(crate) mod test_helpers;
