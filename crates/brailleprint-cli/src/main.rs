use anyhow::{Context, Result};
use brailleprint::{
    png::{PngFormat, Sprites},
    svg::SvgFormat,
    text::TextFormat,
    convert, CharTable, Glyph, Metrics, Output,
};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use std::{fs, path::Path, path::PathBuf};

#[derive(Parser)]
#[command(name = "brailleprint", about = "Render text as Braille images")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FormatKind {
    Svg,
    Png,
    Text,
}

impl FormatKind {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(FormatKind::Svg),
            "png" => Some(FormatKind::Png),
            "txt" => Some(FormatKind::Text),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Render text to an SVG, PNG or Unicode text file
    Render {
        #[arg(short, long)]
        text: String,
        #[arg(short, long)]
        output: PathBuf,
        /// Output format; inferred from the output extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<FormatKind>,
        /// Character table JSON; the built-in English table is used otherwise
        #[arg(long)]
        table: Option<PathBuf>,
        /// Sprite for raised dots (PNG only)
        #[arg(long, requires = "off")]
        on: Option<PathBuf>,
        /// Sprite for flat dots (PNG only)
        #[arg(long, requires = "on")]
        off: Option<PathBuf>,
    },
    /// Print text as Unicode Braille
    Preview {
        #[arg(short, long)]
        text: String,
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Inspect a character table
    Inspect {
        #[arg(long)]
        table: Option<PathBuf>,
    },
}

fn load_table(path: Option<&Path>) -> Result<CharTable> {
    match path {
        Some(path) => CharTable::load(path)
            .with_context(|| format!("failed to load character table {}", path.display())),
        None => Ok(CharTable::english().clone()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Cmd::Render {
            text,
            output,
            format,
            table,
            on,
            off,
        } => {
            let table = load_table(table.as_deref())?;
            let kind = format
                .or_else(|| FormatKind::from_path(&output))
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "cannot infer format from {}; pass --format",
                        output.display()
                    )
                })?;
            let renderer = match kind {
                FormatKind::Svg => Output::Svg(SvgFormat::new()),
                FormatKind::Text => Output::Text(TextFormat::new()),
                FormatKind::Png => {
                    let sprites = match (on, off) {
                        (Some(on), Some(off)) => Sprites::load(&on, &off)
                            .context("failed to load dot sprites")?,
                        _ => Sprites::generated(Metrics::PNG.diameter),
                    };
                    Output::Png(PngFormat::new(sprites))
                }
            };
            debug!("rendering {} chars as {}", text.chars().count(), renderer.name());
            let artifact = renderer.convert(&text, &table)?;
            let (width, height) = artifact.dimensions();
            fs::write(&output, artifact.to_bytes()?)
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!("wrote {width}x{height} {} to {}", renderer.name(), output.display());
        }
        Cmd::Preview { text, table } => {
            let table = load_table(table.as_deref())?;
            println!("{}", convert(&text, &table, &TextFormat::new())?);
        }
        Cmd::Inspect { table } => {
            let source = table
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in English".to_string());
            let table = load_table(table.as_deref())?;
            let mut entries: Vec<(char, &Glyph)> = table.iter().collect();
            entries.sort_by_key(|(ch, _)| *ch);
            println!("Character table: {source}");
            println!("  Defined characters: {}", table.len());
            let multi = entries.iter().filter(|(_, g)| g.width() > 1).count();
            println!("  Multi-cell glyphs: {multi}");
            for (ch, glyph) in entries {
                let cells: String = glyph.cells().iter().map(|c| c.to_unicode()).collect();
                println!("  {ch:?} {cells}");
            }
        }
    }
    Ok(())
}
