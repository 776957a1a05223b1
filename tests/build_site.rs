//! End-to-end pipeline tests: scan a content directory, generate the site,
//! and assert on the published files.

use shopfront::{generate, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Build a content tree, run both stages, and return the output directory.
fn build(content: impl Fn(&Path)) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("content");
    fs::create_dir_all(&source).unwrap();
    content(&source);

    let manifest = scan::scan(&source).unwrap();
    let manifest_path = tmp.path().join("manifest.json");
    fs::write(
        &manifest_path,
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();

    let out = tmp.path().join("dist");
    generate::generate(&manifest_path, &out, &source).unwrap();
    (tmp, out)
}

fn write_store(source: &Path) {
    fs::write(
        source.join("config.toml"),
        r##"
site_url = "https://babystore.example"

[store]
name = "Baby Store"
footer_note = "Curated essentials for little ones"

[hero]
title = "Welcome to Baby Store"
note = "Free shipping on orders over N10,000"

[contact]
phone = "+234 801 234 5678"
"##,
    )
    .unwrap();
    fs::create_dir_all(source.join("products")).unwrap();
    fs::write(source.join("products/blue_hat.jpg"), "fake hat").unwrap();
    fs::write(source.join("products/red_shoes.jpg"), "fake shoes").unwrap();
    fs::write(source.join("products/soft_blanket.png"), "fake blanket").unwrap();
}

#[test]
fn full_build_produces_storefront() {
    let (_tmp, out) = build(write_store);

    let index = fs::read_to_string(out.join("index.html")).unwrap();

    // Hero and chrome
    assert!(index.starts_with("<!DOCTYPE html>"));
    assert!(index.contains("Welcome to Baby Store"));
    assert!(index.contains("Free shipping on orders over N10,000"));
    assert!(index.contains("Baby Store"));
    assert!(index.contains("Curated essentials for little ones"));

    // One card per product, labels from filenames
    assert_eq!(index.matches("class=\"card\"").count(), 3);
    assert!(index.contains(r#"alt="blue hat""#));
    assert!(index.contains(r#"alt="soft blanket""#));

    // Buy Now deep links carry digits only and the absolute product URL
    assert!(index.contains("https://wa.me/2348012345678?text="));
    let encoded_url =
        urlencoding::encode("https://babystore.example/products/blue_hat.jpg").into_owned();
    assert!(index.contains(&encoded_url));

    // Variant classes present and heights emitted in the stylesheet
    assert!(index.contains("card-visual variant-"));
    assert!(index.contains("--card-h-tall: 380px"));
}

#[test]
fn product_images_copied_to_output() {
    let (_tmp, out) = build(write_store);

    assert!(out.join("products/blue_hat.jpg").is_file());
    assert!(out.join("products/red_shoes.jpg").is_file());
    assert!(out.join("products/soft_blanket.png").is_file());
    assert_eq!(
        fs::read_to_string(out.join("products/blue_hat.jpg")).unwrap(),
        "fake hat"
    );
}

#[test]
fn hover_images_wrap_circularly() {
    let (_tmp, out) = build(write_store);
    let index = fs::read_to_string(out.join("index.html")).unwrap();

    // Last product's hover image wraps to the first
    let last_card = index.rfind("/products/soft_blanket.png").unwrap();
    let tail = &index[last_card..];
    assert!(tail.contains("/products/blue_hat.jpg"));
}

#[test]
fn pages_rendered_and_linked() {
    let (_tmp, out) = build(|source| {
        write_store(source);
        fs::write(
            source.join("010-about.md"),
            "# About Us\n\nWe sell **soft** things.",
        )
        .unwrap();
        fs::write(
            source.join("050-instagram.md"),
            "https://instagram.com/babystore\n",
        )
        .unwrap();
    });

    let about = fs::read_to_string(out.join("about.html")).unwrap();
    assert!(about.contains("<strong>soft</strong>"));
    assert!(about.contains("<title>About Us</title>"));

    // Link pages get a nav entry but no file
    assert!(!out.join("instagram.html").exists());
    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains(r#"href="https://instagram.com/babystore""#));
    assert!(index.contains(r#"href="/about.html""#));
}

#[test]
fn assets_copied_to_output_root() {
    let (_tmp, out) = build(|source| {
        write_store(source);
        fs::create_dir_all(source.join("assets/fonts")).unwrap();
        fs::write(source.join("assets/favicon.ico"), "fake icon").unwrap();
        fs::write(source.join("assets/fonts/store.woff2"), "fake font").unwrap();
    });

    assert!(out.join("favicon.ico").is_file());
    assert!(out.join("fonts/store.woff2").is_file());
}

#[test]
fn unconfigured_store_still_builds() {
    let (_tmp, out) = build(|_| {});

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    // Defaults render; no grid, no WhatsApp links, no failure
    assert!(index.contains("Welcome to My Store"));
    assert!(!index.contains("product-grid"));
    assert!(!index.contains("wa.me"));
}

#[test]
fn explicit_catalog_with_records() {
    let (_tmp, out) = build(|source| {
        fs::write(
            source.join("config.toml"),
            r##"
site_url = "https://shop.example"

[contact]
phone = "15551234"

[catalog]
products = [
    "items/plain_mug.jpg",
    { src = "items/fancy_mug.jpg", src2 = "items/fancy_mug_back.jpg", alt = "Fancy mug" },
]
"##,
        )
        .unwrap();
        fs::create_dir_all(source.join("items")).unwrap();
        fs::write(source.join("items/plain_mug.jpg"), "fake mug").unwrap();
        fs::write(source.join("items/fancy_mug.jpg"), "fake mug 2").unwrap();
        fs::write(source.join("items/fancy_mug_back.jpg"), "fake mug 3").unwrap();
    });

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains(r#"alt="plain mug""#));
    assert!(index.contains(r#"alt="Fancy mug""#));
    // Record's explicit hover image is copied too
    assert!(out.join("items/fancy_mug_back.jpg").is_file());

    // Path entry followed by a record falls back to its own image as hover
    let plain = index.find("/items/plain_mug.jpg").unwrap();
    let after = &index[plain..];
    assert!(after.contains("class=\"secondary\" src=\"/items/plain_mug.jpg\""));
}

#[test]
fn rebuild_is_deterministic() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("content");
    fs::create_dir_all(&source).unwrap();
    write_store(&source);

    let mut outputs = Vec::new();
    for name in ["dist-a", "dist-b"] {
        let manifest = scan::scan(&source).unwrap();
        let manifest_path = tmp.path().join("manifest.json");
        fs::write(
            &manifest_path,
            serde_json::to_string_pretty(&manifest).unwrap(),
        )
        .unwrap();
        let out = tmp.path().join(name);
        generate::generate(&manifest_path, &out, &source).unwrap();
        outputs.push(fs::read_to_string(out.join("index.html")).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}
