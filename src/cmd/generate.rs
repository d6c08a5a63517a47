//! Generate command CLI handler.

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime};
use indicatif::{ProgressBar, ProgressStyle};
use retail_seed::{write_output, GenerationStats, Generator, GeneratorConfig, Renderer};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

pub struct GenerateArgs {
    pub output: PathBuf,
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub reference_time: Option<String>,
    pub customers: Option<usize>,
    pub products: Option<usize>,
    pub baskets: Option<usize>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    pub delivery_tags: Option<String>,
    pub card_selection: Option<String>,
    pub dry_run: bool,
    pub json: bool,
    pub progress: bool,
    pub verbose: bool,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    init_tracing(args.verbose);

    let config = build_config(&args)?;

    // Validation happens here, before anything is drawn or written
    let mut generator = Generator::new(config)?;

    let pb = if args.progress && !args.json {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")?
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb.set_message("Generating...");
        Some(pb)
    } else {
        None
    };

    let start_time = Instant::now();
    let data = generator.generate()?;
    let text = Renderer::new().render_to_string(&generator.config().title, &data)?;
    let stats = data.stats();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if !args.dry_run {
        let path = write_output(&args.output, &text)
            .with_context(|| format!("failed to write {}", args.output.display()))?;
        if !args.json {
            eprintln!(
                "Sample data has been generated and saved to {}",
                path.display()
            );
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else if args.dry_run || args.progress {
        print_stats(&stats, start_time.elapsed().as_secs_f64());
    }

    Ok(())
}

fn build_config(args: &GenerateArgs) -> anyhow::Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(n) = args.customers {
        config.customer_count = n;
    }
    if let Some(n) = args.products {
        config.product_count = n;
    }
    if let Some(n) = args.baskets {
        config.basket_count = n;
    }
    if let Some(n) = args.min_items {
        config.min_items_per_basket = n;
    }
    if let Some(n) = args.max_items {
        config.max_items_per_basket = n;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(ref mode) = args.delivery_tags {
        config.delivery_tags = mode.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    }
    if let Some(ref mode) = args.card_selection {
        config.card_selection = mode.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    }
    if let Some(ref value) = args.reference_time {
        config.reference_time = Some(parse_reference_time(value)?);
    }

    Ok(config)
}

/// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` or a bare date (midnight)
fn parse_reference_time(value: &str) -> anyhow::Result<NaiveDateTime> {
    let value = value.trim();
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(ts);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| anyhow::anyhow!("invalid --reference-time: {}", value))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Ignore an already-installed global subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_stats(stats: &GenerationStats, elapsed: f64) {
    eprintln!();
    eprintln!("Generation Statistics:");
    if let Some(seed) = stats.seed {
        eprintln!("  Seed: {}", seed);
    }
    eprintln!("  Reference time: {}", stats.reference_time);
    eprintln!("  Total rows: {}", stats.total_rows);
    for table in &stats.tables {
        eprintln!("  {}: {}", table.table, table.rows);
    }
    if !stats.skipped_baskets.is_empty() {
        let ids: Vec<String> = stats.skipped_baskets.iter().map(|id| id.to_string()).collect();
        eprintln!("  Skipped baskets (no shipping address): {}", ids.join(", "));
    }
    eprintln!("  Elapsed: {:.3}s", elapsed);
}
