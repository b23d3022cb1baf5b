//! codepress CLI - render colored source listings to paginated PDFs

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use codepress::{Codepress, Document, FontFamily, LineSpacing, Theme};

#[derive(Parser)]
#[command(name = "codepress")]
#[command(version)]
#[command(about = "Render colored source listings to paginated PDFs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON document to a PDF
    Render {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Font family
        #[arg(long, value_enum, default_value = "mono")]
        font_family: FontChoice,

        /// Body font size in points
        #[arg(long, default_value = "9")]
        font_size: f32,

        /// Line spacing preset
        #[arg(long, value_enum, default_value = "normal")]
        line_spacing: SpacingChoice,

        /// Color theme
        #[arg(long, value_enum, default_value = "light")]
        theme: ThemeChoice,
    },

    /// Show document statistics
    Info {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FontChoice {
    Mono,
    Sans,
    Serif,
}

impl From<FontChoice> for FontFamily {
    fn from(choice: FontChoice) -> Self {
        match choice {
            FontChoice::Mono => FontFamily::Mono,
            FontChoice::Sans => FontFamily::Sans,
            FontChoice::Serif => FontFamily::Serif,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SpacingChoice {
    Compact,
    Normal,
    Spacious,
}

impl From<SpacingChoice> for LineSpacing {
    fn from(choice: SpacingChoice) -> Self {
        match choice {
            SpacingChoice::Compact => LineSpacing::Compact,
            SpacingChoice::Normal => LineSpacing::Normal,
            SpacingChoice::Spacious => LineSpacing::Spacious,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeChoice {
    Light,
    Dark,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            input,
            output,
            font_family,
            font_size,
            line_spacing,
            theme,
        } => cmd_render(input, output, font_family, font_size, line_spacing, theme),
        Commands::Info { input } => cmd_info(input),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn load_document(input: &PathBuf) -> Result<Document, String> {
    let json = fs::read_to_string(input)
        .map_err(|e| format!("cannot read {}: {}", input.display(), e))?;
    Document::from_json(&json).map_err(|e| e.to_string())
}

fn cmd_render(
    input: PathBuf,
    output: Option<PathBuf>,
    font_family: FontChoice,
    font_size: f32,
    line_spacing: SpacingChoice,
    theme: ThemeChoice,
) -> Result<(), String> {
    let doc = load_document(&input)?;
    log::info!(
        "rendering {} files, {} lines",
        doc.files.len(),
        doc.line_count()
    );
    if doc.is_empty() {
        eprintln!(
            "{} document has no files; rendering title and contents only",
            "warning:".yellow().bold()
        );
    }

    let output = output.unwrap_or_else(|| input.with_extension("pdf"));

    let press = Codepress::new()
        .with_font_family(font_family.into())
        .with_font_size(font_size)
        .with_line_spacing(line_spacing.into())
        .with_theme(theme.into());

    let pages = press.paginate(&doc).map_err(|e| e.to_string())?;
    let bytes =
        codepress::pdf::serialize(&pages, press.config().theme).map_err(|e| e.to_string())?;
    fs::write(&output, bytes).map_err(|e| format!("cannot write {}: {}", output.display(), e))?;

    println!(
        "{} {} ({} pages)",
        "wrote".green().bold(),
        output.display(),
        pages.len()
    );
    Ok(())
}

fn cmd_info(input: PathBuf) -> Result<(), String> {
    let doc = load_document(&input)?;

    println!("{}", doc.title.bold());
    println!("  files: {}", doc.files.len());
    println!("  toc entries: {}", doc.table_of_contents.len());
    println!("  lines: {}", doc.line_count());

    for file in doc.files_in_toc_order() {
        println!(
            "  {} ({}, {} lines, {} tokens)",
            file.path.cyan(),
            file.language,
            file.lines.len(),
            file.token_count()
        );
    }
    Ok(())
}
