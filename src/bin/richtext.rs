use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "richtext", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the token stream (one line per non-empty run with its tag stack).
    Tokens(TokensArgs),
    /// Lay the text out and print the positioned runs as JSON.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct TokensArgs {
    /// Input file containing tagged text.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Style set JSON (tag name -> style). Defaults to only the built-in default style.
    #[arg(long)]
    styles: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input file containing tagged text.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Style set JSON (tag name -> style). Defaults to only the built-in default style.
    #[arg(long)]
    styles: Option<PathBuf>,

    /// Font file (TTF/OTF) used to measure runs. Without it runs are measured as monospace.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Monospace advance per character, as a fraction of the font size.
    #[arg(long, default_value_t = 0.6)]
    advance: f64,

    /// Print only the rectangles instead of full runs.
    #[arg(long)]
    rects_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Tokens(args) => cmd_tokens(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn read_document(in_path: &Path, styles: Option<&Path>) -> anyhow::Result<richtext::RichText> {
    let text = std::fs::read_to_string(in_path)
        .with_context(|| format!("read tagged text '{}'", in_path.display()))?;
    let styles = match styles {
        Some(p) => {
            let json = std::fs::read_to_string(p)
                .with_context(|| format!("read style set '{}'", p.display()))?;
            richtext::StyleSet::from_json(&json)
                .with_context(|| format!("parse style set '{}'", p.display()))?
        }
        None => richtext::StyleSet::new(),
    };
    Ok(richtext::RichText::new(text, styles))
}

fn report_unclosed(doc: &richtext::RichText) -> anyhow::Result<()> {
    let report = doc.parse()?;
    if !report.unclosed.is_empty() {
        eprintln!(
            "warning: {} unclosed tag(s): {}",
            report.unclosed.len(),
            report.unclosed.join("-")
        );
    }
    Ok(())
}

fn cmd_tokens(args: TokensArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path, args.styles.as_deref())?;
    report_unclosed(&doc)?;
    let tokens = doc.tokens()?;
    print!("{}", richtext::tokens_to_string(&tokens));
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path, args.styles.as_deref())?;
    report_unclosed(&doc)?;

    let runs = match &args.font {
        Some(font_path) => {
            let bytes = std::fs::read(font_path)
                .with_context(|| format!("read font '{}'", font_path.display()))?;
            let mut measurer = richtext::ParleyMeasurer::new(bytes)
                .with_context(|| format!("load font '{}'", font_path.display()))?;
            doc.layout(&mut measurer)?
        }
        None => {
            let mut measurer = richtext::MonospaceMeasurer {
                advance: args.advance,
                ..richtext::MonospaceMeasurer::default()
            };
            doc.layout(&mut measurer)?
        }
    };

    let stdout = std::io::stdout().lock();
    if args.rects_only {
        let rects: Vec<richtext::Rect> = runs.iter().map(|r| r.rect).collect();
        serde_json::to_writer_pretty(stdout, &rects).context("write rects JSON")?;
    } else {
        serde_json::to_writer_pretty(stdout, &runs).context("write runs JSON")?;
    }
    println!();
    Ok(())
}
