use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use sopguide::app::App;
use sopguide::config::Config;
use sopguide::content::{self, ContentPage, ContentTable, PageKind, StepId, FALLBACK_STEP};
use sopguide::export::MarkdownExporter;
use sopguide::links::SystemLinkOpener;
use sopguide::logging;

#[derive(Parser)]
#[command(name = "sopguide")]
#[command(about = "Interactive terminal guide to the frontend development SOP")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Guide content file (JSON); overrides the configured or built-in guide
    #[arg(long)]
    content: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every step with its page count
    Steps,

    /// Show one step's guidance
    Show {
        /// Step number (1-based)
        step: usize,
    },

    /// Print a step's reference pages
    Pages {
        /// Step number (1-based)
        step: usize,

        /// Only print this page (1-based)
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// List every learning resource link
    Links,

    /// Export the whole guide as Markdown
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the effective configuration to .sopguide/config.toml
    Init {
        /// Overwrite an existing project config
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a guide content file
    Validate {
        /// Content file (default: configured content or the built-in guide)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    let is_tui_mode = cli.command.is_none();
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    let content_path = cli.content.clone().or_else(|| config.content_path());

    match cli.command {
        Some(Commands::Steps) => {
            cmd_steps(&load_table(content_path.as_deref())?);
        }
        Some(Commands::Show { step }) => {
            cmd_show(&load_table(content_path.as_deref())?, step)?;
        }
        Some(Commands::Pages { step, page }) => {
            cmd_pages(&load_table(content_path.as_deref())?, step, page)?;
        }
        Some(Commands::Links) => {
            cmd_links(&load_table(content_path.as_deref())?);
        }
        Some(Commands::Export { output }) => {
            cmd_export(&load_table(content_path.as_deref())?, output.as_deref())?;
        }
        Some(Commands::Init { force }) => {
            cmd_init(&config, force)?;
        }
        Some(Commands::Validate { path }) => {
            cmd_validate(path.or(content_path).as_deref())?;
        }
        None => {
            // No subcommand = launch the TUI
            let table = load_table(content_path.as_deref())?;
            run_tui(config, table, logging_handle.log_file_path)?;
        }
    }

    Ok(())
}

fn load_table(path: Option<&Path>) -> Result<ContentTable> {
    match path {
        Some(path) => content::load(Some(path))
            .with_context(|| format!("Failed to load guide content from {}", path.display())),
        None => content::load(None).context("Built-in guide content is invalid"),
    }
}

fn run_tui(config: Config, table: ContentTable, log_file_path: Option<PathBuf>) -> Result<()> {
    let opener = SystemLinkOpener::new(&config.links);
    let mut app = App::new(config, table, Box::new(opener));
    let result = app.run();

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if logging::non_empty_log(&log_path) {
            eprintln!("Session log: {}", log_path.display());
        }
    }

    result
}

/// Convert a 1-based step number to a step id that exists
fn resolve_step(table: &ContentTable, number: usize) -> Result<StepId> {
    if number == 0 || number > table.step_count() {
        bail!(
            "Step {} does not exist (the guide has steps 1-{})",
            number,
            table.step_count()
        );
    }
    Ok(number - 1)
}

fn cmd_steps(table: &ContentTable) {
    let header = table.header();
    println!("{} ({} steps)", header.title, table.step_count());
    println!("{}", "─".repeat(60));

    for step in table.steps() {
        println!(
            "{:>2}. {:<36} {} pages",
            step.id + 1,
            step.title,
            table.pages_for(step.id).len()
        );
        if !step.short_summary.is_empty() {
            println!("    {}", step.short_summary);
        }
    }
}

fn cmd_show(table: &ContentTable, number: usize) -> Result<()> {
    let id = resolve_step(table, number)?;
    let Some(step) = table.step(id) else {
        bail!("Step {} does not exist", number);
    };

    println!("Step {}: {}", number, step.title);
    println!("{}", "─".repeat(60));
    if !step.short_summary.is_empty() {
        println!("{}", step.short_summary);
        println!();
    }
    if !step.detail.is_empty() {
        println!("{}", step.detail);
        println!();
    }
    if !step.checklist.is_empty() {
        println!("Guidance & Checklist:");
        for item in &step.checklist {
            println!("  ✓ {}", item);
        }
        println!();
    }
    println!(
        "{} reference pages (see `sopguide pages {}`)",
        table.pages_for(id).len(),
        number
    );

    Ok(())
}

fn cmd_pages(table: &ContentTable, number: usize, page: Option<usize>) -> Result<()> {
    if number == 0 {
        bail!("Step numbers start at 1");
    }
    // Unknown steps fall back to the shared pages, like the viewer does
    let id = number - 1;
    let pages = table.pages_for(id);

    if pages.is_empty() {
        println!("No pages available for step {}", number);
        return Ok(());
    }
    if !table.has_authored_pages(id) {
        println!(
            "Step {} has no pages of its own; showing step {}'s pages",
            number,
            FALLBACK_STEP + 1
        );
        println!();
    }

    match page {
        Some(page_number) => {
            let Some(content_page) = page_number
                .checked_sub(1)
                .and_then(|index| pages.get(index))
            else {
                bail!(
                    "Page {} does not exist (step {} has pages 1-{})",
                    page_number,
                    number,
                    pages.len()
                );
            };
            print_page(content_page, page_number, pages.len());
        }
        None => {
            for (index, content_page) in pages.iter().enumerate() {
                print_page(content_page, index + 1, pages.len());
            }
        }
    }

    Ok(())
}

fn print_page(page: &ContentPage, number: usize, total: usize) {
    println!("[{}/{}] {} {}", number, total, page.icon, page.title);
    println!("{}", "─".repeat(60));
    if !page.description.is_empty() {
        println!("{}", page.description);
        println!();
    }
    for item in &page.items {
        println!("  → {}", item);
    }

    match &page.kind {
        PageKind::Plain => {}
        PageKind::Samples { samples } => {
            for sample in samples {
                println!();
                println!("{}:", sample.title);
                println!("{}", sample.code);
            }
        }
        PageKind::Resources { .. } => {
            println!();
            println!("Learning Resources:");
            for link in page.links() {
                println!("  {} <{}>", link.label, link.url);
            }
        }
    }
    println!();
}

fn cmd_links(table: &ContentTable) {
    let links = table.all_links();
    if links.is_empty() {
        println!("No resource links in this guide");
        return;
    }

    println!("Learning Resources ({} links)", links.len());
    println!("{}", "─".repeat(60));
    for link in links {
        println!("{}", link.label);
        println!("  {}", link.url);
    }
}

fn cmd_export(table: &ContentTable, output: Option<&Path>) -> Result<()> {
    let exporter = MarkdownExporter::new(table);
    match output {
        Some(path) => {
            exporter.write(path)?;
            println!("Exported guide to {}", path.display());
        }
        None => print!("{}", exporter.render()),
    }
    Ok(())
}

fn cmd_validate(path: Option<&Path>) -> Result<()> {
    let table = load_table(path)?;
    let page_count: usize = table.page_entries().map(|(_, pages)| pages.len()).sum();

    let source = path.map_or_else(|| "built-in guide".to_string(), |p| p.display().to_string());
    println!("Content OK: {}", source);
    println!(
        "  {} steps, {} pages, {} links",
        table.step_count(),
        page_count,
        table.all_links().len()
    );
    Ok(())
}

fn cmd_init(config: &Config, force: bool) -> Result<()> {
    let path = Config::local_config_path();
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    config.save()?;
    tracing::info!(path = %path.display(), "Wrote project config");
    println!("Wrote {}", path.display());
    Ok(())
}
