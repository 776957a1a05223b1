use clap::{Parser, Subcommand};
use shopfront::{generate, output, scan};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(about = "Static site generator for marketing storefronts")]
#[command(long_about = "\
Static site generator for marketing storefronts

Builds a one-page store: hero section, responsive product grid, and
per-product Buy Now links that open WhatsApp with a pre-filled message.
The output is plain HTML and CSS - drop it on any file server.

Content structure:

  content/
  ├── config.toml                  # Site config (optional; see gen-config)
  ├── assets/                      # Static assets (favicon, fonts) → copied to output root
  ├── products/                    # Product images → the grid, ordered by path
  │   ├── blue_hat.jpg             # Label derived from filename (\"blue hat\")
  │   └── red_shoes.jpg
  ├── 010-about.md                 # Page (numbered = shown in nav)
  └── 050-instagram.md             # Link page (URL-only .md → external nav link)

Products come from the products/ directory, or from an explicit
[catalog].products list in config.toml (paths and/or partial records).
Every product is assigned one of four card heights deterministically from
its identity, so the collage layout is stable across rebuilds.

Set [contact].phone to enable the WhatsApp Buy Now links and site_url so
the pre-filled message carries absolute product URLs.

Run 'shopfront gen-config' to print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for the intermediate manifest
    #[arg(long, default_value = ".shopfront-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory into a manifest
    Scan,
    /// Produce the final HTML site from the manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate the content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let summary = generate::generate(&manifest_path, &cli.output, &cli.source)?;
            let manifest_content = std::fs::read_to_string(&manifest_path)?;
            let manifest: scan::Manifest = serde_json::from_str(&manifest_content)?;
            output::print_generate_output(&manifest, &summary);
        }
        Command::Build => {
            std::fs::create_dir_all(&cli.temp_dir)?;

            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let summary = generate::generate(&manifest_path, &cli.output, &cli.source)?;
            output::print_generate_output(&manifest, &summary);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", shopfront::config::stock_config_toml());
        }
    }

    Ok(())
}
