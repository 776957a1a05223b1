//! Product catalog normalization.
//!
//! The storefront grid accepts loosely-specified product references: a plain
//! path to an image under the content root, or a partial record that pins
//! down some fields and leaves the rest to be derived. This module resolves
//! both shapes into fully-specified [`ProductRecord`]s that the generate
//! stage can render without further fallback logic.
//!
//! ## Derivation rules
//!
//! For a plain path entry:
//! - `id` is the trimmed path itself
//! - `src` is the path in absolute form (leading slash added when missing)
//! - `alt` comes from the filename: extension stripped, URL escapes decoded,
//!   runs of underscores/dashes collapsed to single spaces
//!   (`blue_hat-2.png` → "blue hat 2")
//! - `src2` (the hover image) is the next entry's path when that entry is
//!   also a plain path — circular, so the last entry wraps to the first and
//!   a one-element catalog hovers to itself — otherwise the entry's own `src`
//!
//! For a record entry, missing fields fall back in place: `id` through the
//! raw `src` to the list position, `src2` to `src`, `alt` to the empty
//! string. Paths are normalized to leading-slash form either way.
//!
//! Normalization is total: it preserves order, drops nothing, and never
//! fails. Malformed entries produce degraded-but-renderable records.

use serde::{Deserialize, Serialize};

/// A raw product reference as it appears in `config.toml`.
///
/// TOML arrays may mix both shapes:
///
/// ```toml
/// [catalog]
/// products = [
///     "products/blue_hat.jpg",
///     { src = "products/red_shoes.jpg", alt = "Red shoes", src2 = "products/red_shoes_back.jpg" },
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductInput {
    /// Plain path-like reference to an image asset.
    Path(String),
    /// Partial record; every field is optional.
    Record {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        src: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        src2: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
}

/// A fully-specified, render-ready product.
///
/// Derived fresh on every generate pass; never persisted or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Stable identity, used as the visual-variant seed.
    pub id: String,
    /// Primary image path, absolute form (leading slash).
    pub src: String,
    /// Hover image path, same form. Falls back to `src`.
    pub src2: String,
    /// Human-readable label. Empty when nothing could be derived.
    pub alt: String,
}

impl ProductRecord {
    /// Seed for visual-variant assignment: `id`, then `src`, then position.
    pub fn variant_seed(&self, index: usize) -> String {
        if !self.id.is_empty() {
            self.id.clone()
        } else if !self.src.is_empty() {
            self.src.clone()
        } else {
            index.to_string()
        }
    }

    /// Display label: alt text, or a 1-based positional fallback.
    pub fn label(&self, index: usize) -> String {
        if self.alt.is_empty() {
            format!("product {}", index + 1)
        } else {
            self.alt.clone()
        }
    }
}

/// Resolve raw product references into render-ready records.
///
/// Output order matches input order; no entries are dropped or deduplicated.
pub fn normalize(inputs: &[ProductInput]) -> Vec<ProductRecord> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| match input {
            ProductInput::Path(path) => normalize_path_entry(path, i, inputs),
            ProductInput::Record {
                id,
                src,
                src2,
                alt,
            } => ProductRecord {
                id: id
                    .clone()
                    .or_else(|| src.clone())
                    .unwrap_or_else(|| i.to_string()),
                src: src.as_deref().map(ensure_leading_slash).unwrap_or_default(),
                src2: src2
                    .as_deref()
                    .or(src.as_deref())
                    .map(ensure_leading_slash)
                    .unwrap_or_default(),
                alt: alt.clone().unwrap_or_default(),
            },
        })
        .collect()
}

fn normalize_path_entry(path: &str, index: usize, inputs: &[ProductInput]) -> ProductRecord {
    let raw = path.trim();
    let src = ensure_leading_slash(raw);

    // Hover image: the next entry's path when that entry is also a plain
    // path (circular wrap), otherwise the entry's own image.
    let src2 = match &inputs[(index + 1) % inputs.len()] {
        ProductInput::Path(next) if !next.trim().is_empty() => ensure_leading_slash(next.trim()),
        _ => src.clone(),
    };

    ProductRecord {
        id: raw.to_string(),
        src,
        src2,
        alt: derive_alt(raw),
    }
}

/// Compose the absolute URL for a product image from the public site URL.
pub fn absolute_url(site_url: &str, src: &str) -> String {
    format!("{}{}", site_url.trim_end_matches('/'), src)
}

fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Derive a display label from an image path.
///
/// Takes the filename, strips the extension, decodes URL escapes, and
/// collapses runs of underscores/dashes into single spaces.
fn derive_alt(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or(path);
    let stem = strip_extension(file);
    let decoded = match urlencoding::decode(stem) {
        Ok(s) => s.into_owned(),
        // Undecodable escapes keep the raw stem rather than failing
        Err(_) => stem.to_string(),
    };
    collapse_separators(&decoded)
}

/// Remove a trailing `.ext` segment. A lone trailing dot is kept;
/// a leading-dot name (`.hidden`) strips to empty.
fn strip_extension(file: &str) -> &str {
    match file.rfind('.') {
        Some(pos) if pos + 1 < file.len() => &file[..pos],
        _ => file,
    }
}

/// Replace each run of `_` and `-` characters with a single space.
fn collapse_separators(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c == '_' || c == '-' {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(p: &str) -> ProductInput {
        ProductInput::Path(p.to_string())
    }

    fn record(
        id: Option<&str>,
        src: Option<&str>,
        src2: Option<&str>,
        alt: Option<&str>,
    ) -> ProductInput {
        ProductInput::Record {
            id: id.map(String::from),
            src: src.map(String::from),
            src2: src2.map(String::from),
            alt: alt.map(String::from),
        }
    }

    // =========================================================================
    // Path entries
    // =========================================================================

    #[test]
    fn empty_input_yields_empty_catalog() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn path_entry_gains_leading_slash() {
        let records = normalize(&[path("a.jpg")]);
        assert_eq!(records[0].src, "/a.jpg");
    }

    #[test]
    fn path_entry_keeps_existing_slash() {
        let records = normalize(&[path("/a.jpg")]);
        assert_eq!(records[0].src, "/a.jpg");
        assert_eq!(records[0].id, "/a.jpg");
    }

    #[test]
    fn path_entry_is_trimmed() {
        let records = normalize(&[path("  a.jpg  ")]);
        assert_eq!(records[0].id, "a.jpg");
        assert_eq!(records[0].src, "/a.jpg");
    }

    #[test]
    fn single_entry_hovers_to_itself() {
        let records = normalize(&[path("a.jpg")]);
        assert_eq!(records[0].src2, records[0].src);
    }

    #[test]
    fn hover_image_wraps_circularly() {
        let records = normalize(&[path("a.jpg"), path("b.jpg")]);
        assert_eq!(records[0].src2, "/b.jpg");
        assert_eq!(records[1].src2, "/a.jpg");
    }

    #[test]
    fn hover_falls_back_when_next_is_record() {
        let records = normalize(&[path("a.jpg"), record(None, Some("b.jpg"), None, None)]);
        assert_eq!(records[0].src2, "/a.jpg");
    }

    #[test]
    fn alt_derived_from_filename() {
        let records = normalize(&[path("/images/blue_hat-2.png")]);
        assert_eq!(records[0].alt, "blue hat 2");
    }

    #[test]
    fn alt_decodes_url_escapes() {
        let records = normalize(&[path("caf%C3%A9_cup.jpg")]);
        assert_eq!(records[0].alt, "café cup");
    }

    #[test]
    fn alt_collapses_separator_runs() {
        let records = normalize(&[path("big__sale--item.webp")]);
        assert_eq!(records[0].alt, "big sale item");
    }

    // =========================================================================
    // Record entries
    // =========================================================================

    #[test]
    fn record_id_falls_back_to_raw_src() {
        let records = normalize(&[record(None, Some("x.jpg"), None, None)]);
        assert_eq!(records[0].id, "x.jpg");
        assert_eq!(records[0].src, "/x.jpg");
    }

    #[test]
    fn record_id_falls_back_to_index() {
        let records = normalize(&[path("a.jpg"), record(None, None, None, None)]);
        assert_eq!(records[1].id, "1");
        assert_eq!(records[1].src, "");
        assert_eq!(records[1].src2, "");
    }

    #[test]
    fn record_src2_falls_back_to_src() {
        let records = normalize(&[record(Some("p1"), Some("x.jpg"), None, None)]);
        assert_eq!(records[0].src2, "/x.jpg");
    }

    #[test]
    fn record_src2_is_slash_normalized() {
        let records = normalize(&[record(None, Some("/x.jpg"), Some("y.jpg"), None)]);
        assert_eq!(records[0].src2, "/y.jpg");
    }

    #[test]
    fn record_alt_defaults_to_empty() {
        let records = normalize(&[record(Some("p1"), Some("x.jpg"), None, None)]);
        assert_eq!(records[0].alt, "");
    }

    #[test]
    fn record_explicit_fields_pass_through() {
        let records = normalize(&[record(
            Some("hat"),
            Some("/hat.jpg"),
            Some("/hat_back.jpg"),
            Some("A nice hat"),
        )]);
        assert_eq!(
            records[0],
            ProductRecord {
                id: "hat".to_string(),
                src: "/hat.jpg".to_string(),
                src2: "/hat_back.jpg".to_string(),
                alt: "A nice hat".to_string(),
            }
        );
    }

    #[test]
    fn order_preserved_nothing_dropped() {
        let records = normalize(&[
            path("c.jpg"),
            record(None, None, None, None),
            path("a.jpg"),
        ]);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].src, "/c.jpg");
        assert_eq!(records[2].src, "/a.jpg");
    }

    // =========================================================================
    // Seeds, labels, URLs
    // =========================================================================

    #[test]
    fn variant_seed_prefers_id() {
        let rec = ProductRecord {
            id: "hat".into(),
            src: "/hat.jpg".into(),
            src2: "/hat.jpg".into(),
            alt: "".into(),
        };
        assert_eq!(rec.variant_seed(5), "hat");
    }

    #[test]
    fn variant_seed_falls_back_to_src_then_index() {
        let mut rec = ProductRecord {
            id: "".into(),
            src: "/hat.jpg".into(),
            src2: "".into(),
            alt: "".into(),
        };
        assert_eq!(rec.variant_seed(5), "/hat.jpg");
        rec.src.clear();
        assert_eq!(rec.variant_seed(5), "5");
    }

    #[test]
    fn label_falls_back_to_position() {
        let rec = ProductRecord {
            id: "".into(),
            src: "".into(),
            src2: "".into(),
            alt: "".into(),
        };
        assert_eq!(rec.label(0), "product 1");
        assert_eq!(rec.label(2), "product 3");
    }

    #[test]
    fn absolute_url_joins_without_double_slash() {
        assert_eq!(
            absolute_url("https://example.com/", "/hat.jpg"),
            "https://example.com/hat.jpg"
        );
        assert_eq!(
            absolute_url("https://example.com", "/hat.jpg"),
            "https://example.com/hat.jpg"
        );
    }

    // =========================================================================
    // Alt-text edge cases
    // =========================================================================

    #[test]
    fn alt_keeps_trailing_dot() {
        let records = normalize(&[path("weird.")]);
        assert_eq!(records[0].alt, "weird.");
    }

    #[test]
    fn alt_of_dotfile_is_empty() {
        let records = normalize(&[path(".hidden")]);
        assert_eq!(records[0].alt, "");
    }

    #[test]
    fn toml_mixed_array_parses_both_shapes() {
        let doc: std::collections::BTreeMap<String, Vec<ProductInput>> = toml::from_str(
            r#"products = ["a.jpg", { src = "b.jpg", alt = "B" }]"#,
        )
        .unwrap();
        let records = normalize(&doc["products"]);
        assert_eq!(records[0].src, "/a.jpg");
        assert_eq!(records[1].alt, "B");
    }
}
