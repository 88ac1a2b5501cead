//! pagetext CLI - write a PDF's text page by page to a text file

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagetext::{CargoInstaller, ExtractionReport, Installer, Outcome, Pagetext};

#[derive(Parser)]
#[command(name = "pagetext")]
#[command(version)]
#[command(about = "Extract PDF text page by page into a text file", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output text file (created or overwritten)
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "PAGETEXT_OUTPUT",
        default_value = "pdf_content.txt"
    )]
    output: PathBuf,

    /// Use this text capability instead of probing
    #[arg(long, value_enum)]
    backend: Option<BackendChoice>,

    /// Abort on the first page whose text cannot be extracted
    #[arg(long)]
    strict: bool,

    /// Print the extraction report as JSON
    #[arg(long)]
    json: bool,

    /// cargo executable used to install a capability
    #[arg(long, env = "PAGETEXT_CARGO", default_value = "cargo", hide = true)]
    cargo: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List text capabilities in the order they are tried
    Backends,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BackendChoice {
    /// lopdf (primary)
    Lopdf,
    /// pdf-extract (fallback)
    PdfExtract,
}

impl BackendChoice {
    fn name(self) -> &'static str {
        match self {
            BackendChoice::Lopdf => "lopdf",
            BackendChoice::PdfExtract => "pdf-extract",
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Backends) => {
            cmd_backends();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_extract(&input, &cli.output, cli.backend, cli.strict, cli.json, &cli.cargo)
            } else {
                println!("{}", "Usage: pagetext <FILE> [-o OUTPUT]".yellow());
                println!("       pagetext --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_extract(
    input: &Path,
    output: &Path,
    backend: Option<BackendChoice>,
    strict: bool,
    json: bool,
    cargo: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} pages")?
            .progress_chars("#>-"),
    );

    let bar = pb.clone();
    let mut builder = Pagetext::new().on_page(move |page, total| {
        bar.set_length(u64::from(total));
        bar.set_position(u64::from(page));
    });
    if strict {
        builder = builder.strict();
    }
    if let Some(choice) = backend {
        builder = builder.with_backend(choice.name());
    }

    log::debug!("Extracting {} into {}", input.display(), output.display());

    let installer = CargoInstaller::new().with_program(cargo);
    if backend.is_none() && !builder.backends().iter().any(|b| b.available) {
        println!("{}", "No PDF text capability is available.".yellow());
        println!("Installing with '{}'...", installer.description().cyan());
    }

    let outcome = builder.extract_or_install(&installer, input, output);
    pb.finish_and_clear();

    match outcome? {
        Outcome::Extracted(report) => print_report(&report, json)?,
        Outcome::Installed => {
            println!("{} Install complete.", "✓".green().bold());
            println!("Please run this command again.");
        }
    }

    Ok(())
}

fn print_report(report: &ExtractionReport, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !report.is_complete() {
        let pages: Vec<String> = report.failed_pages.iter().map(u32::to_string).collect();
        eprintln!(
            "{} no text extracted from page(s) {}",
            "Warning:".yellow().bold(),
            pages.join(", ")
        );
    }

    println!(
        "PDF content extracted to: {}",
        report.output_path.display().to_string().green()
    );

    if json {
        println!("{}", report.to_json()?);
    }

    Ok(())
}

fn cmd_backends() {
    println!("{}", "Text capabilities (in order tried)".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let backends = Pagetext::new().backends();
    if backends.is_empty() {
        println!("{}", "none compiled in".yellow());
        return;
    }

    for info in backends {
        let mark = if info.available {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        println!("  {} {}", mark, info.name);
    }
}

fn cmd_version() {
    println!("{} {}", "pagetext".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page-by-page PDF text extraction");
}
