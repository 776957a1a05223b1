//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml` from the content
//! root. Configuration is layered: stock defaults are overridden by the
//! user's config file, which only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_url = "http://localhost:3000"  # Public base URL (absolute product links)
//!
//! [store]
//! name = "My Store"
//! perks = ["Fast shipping", "30-day returns", "Secure checkout"]
//! footer_note = ""
//!
//! [hero]
//! title = "Welcome to My Store"
//! copy = "Curated essentials, updated often. Shop our featured picks below."
//! cta_label = "Shop Featured"
//! note = ""
//!
//! [contact]
//! phone = ""                # International digit form, e.g. "2348012345678"
//!
//! [catalog]
//! heading = "Featured products"
//! source_dir = "products"   # Scanned when `products` is empty
//! products = []             # Paths and/or { id, src, src2, alt } tables
//!
//! [colors.light]
//! background = "#fafafa"
//! surface = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"
//! border = "#e0e0e0"
//! accent = "#25d366"
//! accent_text = "#ffffff"
//!
//! [theme]
//! grid_gap = "18px"
//! grid_padding = "24px"
//! card_radius = "12px"
//!
//! [theme.variants]
//! small = 180               # Card heights in pixels
//! medium = 240
//! large = 300
//! tall = 380
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early. The one deliberately lenient spot is
//! `catalog.products`: a value of the wrong shape degrades to an empty list
//! so a half-edited catalog still builds.

use crate::catalog::ProductInput;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Public base URL of the published site, used to build the absolute
    /// product URLs embedded in contact links.
    #[serde(default = "default_site_url")]
    pub site_url: String,
    /// Store identity: brand name, perk lines, footer note.
    pub store: StoreConfig,
    /// Hero section copy.
    pub hero: HeroConfig,
    /// Contact settings for the Buy Now deep links.
    pub contact: ContactConfig,
    /// Product catalog: explicit list or scanned directory.
    pub catalog: CatalogConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Theme/layout settings (grid spacing, card geometry).
    pub theme: ThemeConfig,
}

fn default_site_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            store: StoreConfig::default(),
            hero: HeroConfig::default(),
            contact: ContactConfig::default(),
            catalog: CatalogConfig::default(),
            colors: ColorConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.site_url.starts_with("http://") && !self.site_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "site_url must start with http:// or https://".into(),
            ));
        }
        let v = &self.theme.variants;
        if v.small == 0 || v.medium == 0 || v.large == 0 || v.tall == 0 {
            return Err(ConfigError::Validation(
                "theme.variants heights must be non-zero".into(),
            ));
        }
        if self.catalog.source_dir.is_empty() {
            return Err(ConfigError::Validation(
                "catalog.source_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Store identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Brand name shown in the header and footer.
    pub name: String,
    /// Short perk lines rendered in the strip below the grid.
    pub perks: Vec<String>,
    /// Free-form footer note. Empty hides it.
    pub footer_note: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "My Store".to_string(),
            perks: vec![
                "Fast shipping".to_string(),
                "30-day returns".to_string(),
                "Secure checkout".to_string(),
            ],
            footer_note: String::new(),
        }
    }
}

/// Hero section copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    /// Headline.
    pub title: String,
    /// Supporting paragraph under the headline.
    pub copy: String,
    /// Call-to-action button label (targets the product grid).
    pub cta_label: String,
    /// Small print under the call to action. Empty hides it.
    pub note: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Welcome to My Store".to_string(),
            copy: "Curated essentials, updated often. Shop our featured picks below.".to_string(),
            cta_label: "Shop Featured".to_string(),
            note: String::new(),
        }
    }
}

/// Contact settings for the Buy Now deep links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Owner phone number in international digit form (`2348012345678`).
    /// Formatting characters are tolerated; an empty value turns the
    /// Buy Now links into inert placeholders.
    pub phone: String,
}

/// Product catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Section heading above the grid.
    pub heading: String,
    /// Directory under the content root scanned for product images when
    /// `products` is empty.
    pub source_dir: String,
    /// Explicit product list. Entries are path strings or partial
    /// `{ id, src, src2, alt }` tables.
    pub products: Vec<ProductInput>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            heading: "Featured products".to_string(),
            source_dir: "products".to_string(),
            products: Vec::new(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Card and header surface color.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text (nav, perks, footer).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Accent color (call-to-action and Buy Now buttons).
    pub accent: String,
    /// Text color on accent surfaces.
    pub accent_text: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#fafafa".to_string(),
            surface: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            accent: "#25d366".to_string(),
            accent_text: "#ffffff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0f0f0f".to_string(),
            surface: "#1a1a1a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            accent: "#25d366".to_string(),
            accent_text: "#ffffff".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

/// Theme/layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Gap between cards in the product grid (CSS value).
    pub grid_gap: String,
    /// Padding around the grid container (CSS value).
    pub grid_padding: String,
    /// Card corner radius (CSS value).
    pub card_radius: String,
    /// Card heights per visual variant.
    pub variants: VariantHeights,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            grid_gap: "18px".to_string(),
            grid_padding: "24px".to_string(),
            card_radius: "12px".to_string(),
            variants: VariantHeights::default(),
        }
    }
}

/// Card heights in pixels for each visual variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VariantHeights {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
    pub tall: u32,
}

impl Default for VariantHeights {
    fn default() -> Self {
        Self {
            small: 180,
            medium: 240,
            large: 300,
            tall: 380,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let mut merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    sanitize_product_list(&mut merged);
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Degrade a malformed `catalog.products` value instead of failing.
///
/// A non-array value is replaced by an empty array; array items that are
/// neither strings nor tables become empty tables (which normalize to
/// positional placeholder records). This keeps the normalizer total all the
/// way down to the TOML boundary.
fn sanitize_product_list(value: &mut toml::Value) {
    let Some(catalog) = value.get_mut("catalog").and_then(|v| v.as_table_mut()) else {
        return;
    };
    let Some(products) = catalog.get_mut("products") else {
        return;
    };
    match products {
        toml::Value::Array(items) => {
            for item in items.iter_mut() {
                if !item.is_str() && !item.is_table() {
                    *item = toml::Value::Table(toml::map::Map::new());
                }
            }
        }
        other => *other = toml::Value::Array(Vec::new()),
    }
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Shopfront Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the root of your content directory. Each key only
# needs to be present when you want to override it; unknown keys are an
# error.

# Public base URL of the published site. Buy Now messages embed absolute
# product URLs built from this value, so set it to the real deployment URL
# (and make sure the images are publicly reachable) before going live.
site_url = "http://localhost:3000"

# ---------------------------------------------------------------------------
# Store identity
# ---------------------------------------------------------------------------
[store]
# Brand name shown in the header and footer.
name = "My Store"

# Perk lines rendered in the strip below the product grid.
perks = ["Fast shipping", "30-day returns", "Secure checkout"]

# Free-form footer note. Leave empty to hide.
footer_note = ""

# ---------------------------------------------------------------------------
# Hero section
# ---------------------------------------------------------------------------
[hero]
title = "Welcome to My Store"
copy = "Curated essentials, updated often. Shop our featured picks below."

# Call-to-action button (scrolls to the product grid).
cta_label = "Shop Featured"

# Small print under the call to action. Leave empty to hide.
note = ""

# ---------------------------------------------------------------------------
# Contact
# ---------------------------------------------------------------------------
[contact]
# Owner phone number in international digit form, e.g. "2348012345678".
# Formatting characters are tolerated. When empty, Buy Now links render
# as inert placeholders instead of WhatsApp deep links.
phone = ""

# ---------------------------------------------------------------------------
# Catalog
# ---------------------------------------------------------------------------
[catalog]
# Section heading above the grid.
heading = "Featured products"

# Directory (under the content root) scanned for product images when
# `products` is empty. Images are ordered by path.
source_dir = "products"

# Explicit product list. Mix plain paths and partial records:
#   products = [
#       "products/blue_hat.jpg",
#       { src = "products/shoes.jpg", src2 = "products/shoes_back.jpg", alt = "Red shoes" },
#   ]
products = []

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#fafafa"
surface = "#ffffff"     # Cards, header
text = "#111111"
text_muted = "#666666"  # Nav, perks, footer
border = "#e0e0e0"
accent = "#25d366"      # Call-to-action and Buy Now buttons
accent_text = "#ffffff"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0f0f0f"
surface = "#1a1a1a"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
accent = "#25d366"
accent_text = "#ffffff"

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Gap between cards in the product grid (CSS value).
grid_gap = "18px"

# Padding around the grid container (CSS value).
grid_padding = "24px"

# Card corner radius (CSS value).
card_radius = "12px"

# Card heights in pixels per visual variant. Every product is assigned one
# of the four variants deterministically from its identity.
[theme.variants]
small = 180
medium = 240
large = 300
tall = 380
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
    --color-accent-text: {light_accent_text};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-surface: {dark_surface};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
        --color-accent-text: {dark_accent_text};
    }}
}}"#,
        light_bg = colors.light.background,
        light_surface = colors.light.surface,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        light_accent_text = colors.light.accent_text,
        dark_bg = colors.dark.background,
        dark_surface = colors.dark.surface,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
        dark_accent_text = colors.dark.accent_text,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --grid-gap: {grid_gap};
    --grid-padding: {grid_padding};
    --card-radius: {card_radius};
    --card-h-small: {small}px;
    --card-h-medium: {medium}px;
    --card-h-large: {large}px;
    --card-h-tall: {tall}px;
}}"#,
        grid_gap = theme.grid_gap,
        grid_padding = theme.grid_padding,
        card_radius = theme.card_radius,
        small = theme.variants.small,
        medium = theme.variants.medium,
        large = theme.variants.large,
        tall = theme.variants.tall,
    )
}
