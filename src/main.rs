use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use struct_filter::{FilterConfig, FilterForm, Lang};

#[derive(Parser)]
#[command(name = "struct-filter", about = "Render a filter form for a search result dump")]
struct Cli {
    /// JSON result dump to build the form from.
    #[arg(short, long)]
    input: PathBuf,

    /// Page id written into the form's hidden `id` field.
    #[arg(short, long)]
    page: String,

    /// Language of the embedded strings (en, de).
    #[arg(long, default_value = "en")]
    lang: String,

    /// TOML file with custom `[filter]` strings; overrides --lang.
    #[arg(long)]
    lang_file: Option<PathBuf>,

    /// TOML config layered over the built-in defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the form here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG overrides the level).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let config = FilterConfig::load(cli.config.as_deref()).context("loading config")?;
    let lang = match &cli.lang_file {
        Some(path) => Lang::load_file(path)
            .with_context(|| format!("loading language strings from {}", path.display()))?,
        None => Lang::load(&cli.lang),
    };
    let search = struct_filter::source::json::from_path(&cli.input, &config)
        .with_context(|| format!("loading result dump {}", cli.input.display()))?;

    let mut doc = String::new();
    FilterForm::with_config(&search, config)?.render(&cli.page, &lang, &mut doc)?;
    doc.push('\n');

    match &cli.output {
        Some(path) => std::fs::write(path, &doc)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout().lock().write_all(doc.as_bytes())?,
    }
    tracing::info!(bytes = doc.len(), "filter form written");
    Ok(())
}
