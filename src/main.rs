//! treeline - render a directory hierarchy as a text tree.
//!
//! Usage:
//!   trl PATH                 Print the tree to stdout
//!   trl PATH -o FILE         Write the tree to a file
//!   trl PATH -l              Follow symbolic links
//!   trl PATH -l -s           Follow links, guarding against cycles
//!   trl --help               Show help

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};

use treeline_core::RenderConfig;
use treeline_render::TreeRenderer;

#[derive(Parser)]
#[command(
    name = "treeline",
    version,
    about = "Render a directory hierarchy as a text tree",
    long_about = "treeline walks a directory depth-first and prints the classic \
                  connector-drawn tree listing.\n\n\
                  Symbolic links are annotated with their target; descending into \
                  them is opt-in via -l, and -s additionally guards against cyclic \
                  link chains."
)]
struct Cli {
    /// Directory to render
    path: PathBuf,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// Follow symbolic links into directories
    #[arg(short = 'l', long)]
    follow_symlinks: bool,

    /// Track visited link targets to avoid cyclic descent (with -l)
    #[arg(short, long)]
    safe_mode: bool,

    /// Entry names to prune from the listing (repeatable)
    #[arg(short, long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config = RenderConfig::builder()
        .root(cli.path)
        .output_file(cli.output_file)
        .follow_symlinks(cli.follow_symlinks)
        .safe_mode(cli.safe_mode)
        .ignore_names(cli.ignore)
        .build()?;

    let renderer = TreeRenderer::new();
    let listing = renderer.render(&config).context("Render failed")?;

    match &config.output_file {
        Some(path) => {
            eprintln!(
                "Rendering {} to {}...",
                config.root.display(),
                path.display()
            );
            let mut file = File::create(path)
                .with_context(|| format!("Cannot create output file {}", path.display()))?;
            listing.write_to(&mut file).context("Write failed")?;
            file.flush().context("Write failed")?;
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            listing.write_to(&mut lock).context("Write failed")?;
        }
    }

    if listing.has_warnings() {
        eprintln!("{} warning(s) during render", listing.warnings.len());
    }

    Ok(())
}
