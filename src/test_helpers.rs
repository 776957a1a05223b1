//! Shared test utilities for the shopfront test suite.
//!
//! Builds minimal content directories programmatically so tests get an
//! isolated tree they can mutate without fixture files.

use std::fs;
use std::path::Path;

/// Write a minimal storefront content directory: a config with a site URL
/// and phone, plus two product images in `products/`.
///
/// The two products give the circular hover-image derivation something to
/// wrap around.
pub fn write_min_content(root: &Path) {
    fs::create_dir_all(root.join("products")).unwrap();
    fs::write(
        root.join("config.toml"),
        r##"
site_url = "https://shop.example"

[contact]
phone = "2348012345678"
"##,
    )
    .unwrap();
    fs::write(root.join("products/blue_hat.jpg"), "fake image").unwrap();
    fs::write(root.join("products/red_shoes.jpg"), "fake image").unwrap();
}
