//! md-pdf CLI - render extracted PDF documents to Markdown

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use md_pdf::convert::{io, output_path};
use md_pdf::{Converter, ExtractionStats, PartialOptions, RenderResult};

#[derive(Parser)]
#[command(name = "md-pdf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert extracted PDF content to Markdown", long_about = None)]
struct Cli {
    /// Input file (serialized document model)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output file (defaults to the input path with a .md extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Insert <!-- Page N --> markers
    #[arg(long)]
    page_numbers: bool,

    /// Render text without bold/italic/underline markers
    #[arg(long)]
    no_font_styles: bool,

    /// Render lists as plain paragraphs
    #[arg(long)]
    no_lists: bool,

    /// Render tables as plain paragraphs
    #[arg(long)]
    no_tables: bool,

    /// Render links as plain text
    #[arg(long)]
    no_links: bool,

    /// Wrap paragraph text at N columns (default 80, 0 disables wrapping)
    #[arg(long, value_name = "N", env = "MD_PDF_MAX_LINE_LENGTH")]
    max_line_length: Option<usize>,

    /// JSON file with conversion options (flags take precedence)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the Markdown to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Print rendering statistics
    #[arg(long)]
    stats: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Options set explicitly on the command line.
    fn flag_options(&self) -> PartialOptions {
        PartialOptions {
            include_page_numbers: self.page_numbers.then_some(true),
            preserve_font_styles: self.no_font_styles.then_some(false),
            detect_lists: self.no_lists.then_some(false),
            detect_tables: self.no_tables.then_some(false),
            detect_links: self.no_links.then_some(false),
            max_line_length: self.max_line_length,
        }
    }

    /// Config file options overlaid with flags.
    fn options(&self) -> Result<PartialOptions, Box<dyn std::error::Error>> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => PartialOptions::default(),
        };
        Ok(base.merge(&self.flag_options()))
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  {} {}", "caused by:".dimmed(), cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = cli.options()?;
    log::debug!("Resolved options: {:?}", options.resolve());

    let converter = Converter::new().with_options(options);

    let pb = if cli.stdout {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(4)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading input...");
    let bytes = converter.read_input(&cli.input)?;
    pb.inc(1);

    pb.set_message("Extracting document...");
    let doc = converter.extract(&bytes)?;
    pb.inc(1);

    pb.set_message("Generating Markdown...");
    let result = converter.render(&doc)?;
    pb.inc(1);

    if cli.stdout {
        pb.finish_and_clear();
        println!("{}", result.content);
    } else {
        let target = output_path(&cli.input, cli.output.as_deref())?;

        pb.set_message("Writing output...");
        io::write_file(&target, &result.content)?;
        pb.inc(1);
        pb.finish_with_message("Done!");

        println!("{} {}", "Saved to".green(), target.display());
    }

    if cli.stats {
        print_stats(&cli.input, &result);
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<PartialOptions, Box<dyn std::error::Error>> {
    let bytes = io::read_file(path)?;
    let options = serde_json::from_slice(&bytes)
        .map_err(|e| format!("Invalid config file {}: {}", path.display(), e))?;
    Ok(options)
}

fn print_stats(input: &Path, result: &RenderResult) {
    let stats: &ExtractionStats = &result.stats;

    eprintln!();
    eprintln!("{}", "Document Information".cyan().bold());
    eprintln!("{}", "─".repeat(40).dimmed());
    eprintln!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = result.title {
        eprintln!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = result.author {
        eprintln!("{}: {}", "Author".bold(), author);
    }

    eprintln!();
    eprintln!("{}", "Content Statistics".cyan().bold());
    eprintln!("{}", "─".repeat(40).dimmed());
    eprintln!("{}: {}", "Pages".bold(), stats.page_count);
    eprintln!("{}: {}", "Headings".bold(), stats.heading_count);
    eprintln!(
        "{}: {} ({} joined across pages)",
        "Paragraphs".bold(),
        stats.paragraph_count,
        stats.continuation_count
    );
    eprintln!(
        "{}: {} ({} items)",
        "Lists".bold(),
        stats.list_count,
        stats.list_item_count
    );
    eprintln!("{}: {}", "Tables".bold(), stats.table_count);
    eprintln!("{}: {}", "Links".bold(), stats.link_count);
    eprintln!("{}: {}", "Words".bold(), stats.word_count);
    eprintln!("{}: {}", "Characters".bold(), stats.char_count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_partial_options() {
        let cli = Cli::parse_from([
            "md-pdf",
            "-i",
            "doc.json",
            "--page-numbers",
            "--no-links",
            "--max-line-length",
            "60",
        ]);
        let options = cli.flag_options();

        assert_eq!(options.include_page_numbers, Some(true));
        assert_eq!(options.detect_links, Some(false));
        assert_eq!(options.detect_lists, None);
        assert_eq!(options.max_line_length, Some(60));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("md-pdf.json");
        std::fs::write(&config, r#"{"includePageNumbers": false, "detectTables": false}"#)
            .unwrap();

        let cli = Cli::parse_from([
            "md-pdf",
            "--input",
            "doc.json",
            "--page-numbers",
            "--config",
            config.to_str().unwrap(),
        ]);
        let resolved = cli.options().unwrap().resolve();

        assert!(resolved.include_page_numbers);
        assert!(!resolved.detect_tables);
        assert!(resolved.detect_lists);
    }

    #[test]
    fn test_invalid_config_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("bad.json");
        std::fs::write(&config, "not json").unwrap();

        let err = load_config(&config).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config file"));
    }
}
