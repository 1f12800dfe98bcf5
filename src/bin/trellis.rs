use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "trellis", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the min/pref/max sizes of the document root.
    Sizes(SizesArgs),
    /// Lay the document out and print where every node went.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct SizesArgs {
    /// Input layout document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input layout document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Root width. Requires --height. Defaults to the document viewport, then the preferred size.
    #[arg(long, requires = "height")]
    width: Option<f64>,

    /// Root height. Requires --width.
    #[arg(long, requires = "width")]
    height: Option<f64>,

    /// Write the placements here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sizes(args) => cmd_sizes(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn read_document(path: &Path) -> anyhow::Result<trellis::LayoutDocument> {
    let f = File::open(path).with_context(|| format!("open layout document '{}'", path.display()))?;
    let r = BufReader::new(f);
    let doc: trellis::LayoutDocument =
        serde_json::from_reader(r).with_context(|| "parse layout document JSON")?;
    Ok(doc)
}

fn cmd_sizes(args: SizesArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let sizes = doc.sizes()?;
    println!("{}", serde_json::to_string_pretty(&sizes)?);
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let size = match (args.width, args.height) {
        (Some(width), Some(height)) => Some(trellis::Size::new(width, height)),
        _ => None,
    };
    let placements = doc.layout(size)?;
    let json = serde_json::to_string_pretty(&placements)?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json + "\n")
                .with_context(|| format!("write placements '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
