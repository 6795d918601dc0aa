use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use pagemark_core::{
    FetchConfig, InlineCodePolicy, Preferences, ScrapeOptions, effective_selector, fetch_file, fetch_stdin, fetch_url,
    scrape,
};

mod echo;

use echo::{print_banner, print_info, print_step, print_success, print_warning};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert web page content to Markdown, skipping boilerplate regions
#[derive(Parser, Debug)]
#[command(name = "pagemark")]
#[command(author = "Pagemark Contributors")]
#[command(version = "1.0.0")]
#[command(about = "Convert web page content to Markdown", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Keep the default boilerplate regions (nav, sidebar, footer, ...) in the output
    #[arg(long)]
    keep_chrome: bool,

    /// Extra comma-separated CSS selectors to exclude
    #[arg(short = 's', long, value_name = "SELECTORS")]
    skip: Option<String>,

    /// Inline code handling during text extraction (baseline, refined)
    #[arg(long, default_value = "refined", value_name = "POLICY")]
    inline_code: InlineCodePolicy,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Persist the omission settings for future runs
    #[arg(long)]
    save_prefs: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Format file size for display
fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let prefs = match Preferences::load() {
        Ok(prefs) => prefs,
        Err(e) => {
            print_warning(&format!("Ignoring unreadable preferences: {}", e));
            Preferences::default()
        }
    };

    let omit_defaults = if args.keep_chrome { false } else { prefs.omit_defaults };
    let extra_selectors = args.skip.unwrap_or_else(|| prefs.extra_selectors.clone());

    let (html, size) = if args.input == "-" {
        if args.verbose {
            print_step(1, 4, "Reading from stdin");
        }
        let buffer = fetch_stdin().context("Failed to read from stdin")?;
        let len = buffer.len();
        (buffer, len)
    } else if args.input.starts_with("http://") || args.input.starts_with("https://") {
        if args.verbose {
            print_step(
                1,
                4,
                &format!("Fetching from {}", args.input.bright_white().underline()),
            );
        }

        let config = FetchConfig {
            timeout: args.timeout,
            user_agent: args
                .user_agent
                .unwrap_or_else(|| "Mozilla/5.0 (compatible; Pagemark/1.0)".to_string()),
        };

        let content = fetch_url(&args.input, &config).await.context("Failed to fetch URL")?;
        let len = content.len();
        (content, len)
    } else {
        if args.verbose {
            print_step(1, 4, &format!("Reading from file {}", args.input.bright_white()));
        }
        let content = fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?;
        let len = content.len();
        (content, len)
    };

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(size).bright_white());
        eprintln!();
        print_step(2, 4, "Resolving exclusion selectors");
        match effective_selector(omit_defaults, &extra_selectors) {
            Some(selector) => eprintln!("  {} {}", "Skip:".dimmed(), selector.bright_white()),
            None => eprintln!("  {} {}", "Skip:".dimmed(), "(nothing)".dimmed()),
        }
        eprintln!();
    }

    if args.save_prefs {
        let updated = Preferences { omit_defaults, extra_selectors: extra_selectors.clone(), theme: prefs.theme };
        updated.store().context("Failed to save preferences")?;
        if args.verbose {
            print_info("Preferences saved");
            eprintln!();
        }
    }

    if args.verbose {
        print_step(3, 4, "Converting to Markdown");
    }

    let options = ScrapeOptions { omit_defaults, extra_selectors, inline_code: args.inline_code };

    let markdown = scrape(&html, &options).context("Failed to convert page")?;

    if args.verbose {
        eprintln!(
            "  {} {}",
            "Output:".dimmed(),
            format_size(markdown.len()).bright_white()
        );
        eprintln!();
        print_step(4, 4, "Writing output");
        if args.inline_code == InlineCodePolicy::Baseline {
            eprintln!("  {} {}", "Inline code:".dimmed(), "baseline".bright_white());
        }
        eprintln!();
    }

    match args.output {
        Some(path) => {
            fs::write(&path, markdown).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", markdown);
        }
    }

    Ok(())
}
