use clap::{Parser, Subcommand};
use doc_gal::{config, generate, output, scan};
use std::path::PathBuf;

/// Shared flags for commands that render the carousel.
#[derive(clap::Args, Clone)]
struct RenderArgs {
    /// Seed for the active-item pick - same seed, same tree, same bytes
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser)]
#[command(name = "doc-gal")]
#[command(about = "Sidebar carousel generator for documentation example galleries")]
#[command(long_about = "\
Sidebar carousel generator for documentation example galleries

Your documentation tree is the data source. Example and tutorial scripts are
discovered by filename convention, their RST section titles become captions,
and the result is one static HTML carousel fragment for the site sidebar.

Doc tree structure:

  doc/
  ├── gallery.toml                 # Gallery config (optional)
  ├── examples/                    # Source root (scanned first)
  │   └── foo/
  │       └── plot_foo.py          # Qualifies: contains 'plot', ends in .py
  ├── tutorials/                   # Source root (scanned second)
  │   └── intro/
  │       └── plot_intro.py
  ├── _build/html/                 # Site build output (linked, not scanned)
  └── _templates/
      └── gallery.html             # Generated carousel fragment

Captions come from each script's first RST section title (a line of text
underlined with - or =). A qualifying script without one fails the build.

Run 'doc-gal gen-config' to generate a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Documentation root directory
    #[arg(long, default_value = "doc", global = true)]
    doc_root: PathBuf,

    /// Directory for intermediate files (scan manifest)
    #[arg(long, default_value = ".doc-gal-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the doc tree into a manifest
    Scan,
    /// Render the carousel fragment from the scan manifest
    Generate(RenderArgs),
    /// Run the full pipeline: scan → generate
    Build(RenderArgs),
    /// Validate gallery scripts without writing anything
    Check,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.doc_root)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest);
        }
        Command::Generate(render_args) => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let (gallery, out_path) =
                generate::generate(&manifest_path, &cli.doc_root, render_args.seed)?;
            output::print_generate_output(&gallery, &out_path);
        }
        Command::Build(render_args) => {
            std::fs::create_dir_all(&cli.temp_dir)?;

            println!("==> Stage 1: Scanning {}", cli.doc_root.display());
            let manifest = scan::scan(&cli.doc_root)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 2: Rendering carousel");
            let (gallery, out_path) =
                generate::generate(&manifest_path, &cli.doc_root, render_args.seed)?;
            output::print_generate_output(&gallery, &out_path);

            println!("==> Build complete: {}", out_path.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.doc_root.display());
            let manifest = scan::scan(&cli.doc_root)?;
            output::print_scan_output(&manifest);
            println!("==> Gallery content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
