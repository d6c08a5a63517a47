mod generate;
mod schema;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "retail-seed")]
#[command(version)]
#[command(about = "Generate referentially consistent sample data for a retail schema", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate INSERT statements for customers, products, baskets and transactions
    Generate {
        /// Output SQL file
        #[arg(short, long, default_value = "sample_data.sql")]
        output: PathBuf,

        /// YAML config file (volumes, ranges, value pools)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Random seed for reproducibility (random if not specified)
        #[arg(long)]
        seed: Option<u64>,

        /// Reference "now" for expiry and transaction dates (YYYY-MM-DD HH:MM:SS)
        #[arg(long)]
        reference_time: Option<String>,

        /// Number of customers
        #[arg(long)]
        customers: Option<usize>,

        /// Number of products
        #[arg(long)]
        products: Option<usize>,

        /// Number of baskets
        #[arg(long)]
        baskets: Option<usize>,

        /// Minimum distinct products per basket
        #[arg(long)]
        min_items: Option<usize>,

        /// Maximum distinct products per basket
        #[arg(long)]
        max_items: Option<usize>,

        /// Delivery tag distribution: literal, intended
        #[arg(long)]
        delivery_tags: Option<String>,

        /// Cards a transaction may use: global-pool, owner-only
        #[arg(long)]
        card_selection: Option<String>,

        /// Generate and report without writing the output file
        #[arg(long)]
        dry_run: bool,

        /// Print the generation summary as JSON on stdout
        #[arg(long)]
        json: bool,

        /// Show progress during generation
        #[arg(short, long)]
        progress: bool,

        /// Verbose output (debug-level stage logging)
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the target tables, their columns and foreign keys
    Schema,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            output,
            config,
            seed,
            reference_time,
            customers,
            products,
            baskets,
            min_items,
            max_items,
            delivery_tags,
            card_selection,
            dry_run,
            json,
            progress,
            verbose,
        } => generate::run(generate::GenerateArgs {
            output,
            config,
            seed,
            reference_time,
            customers,
            products,
            baskets,
            min_items,
            max_items,
            delivery_tags,
            card_selection,
            dry_run,
            json,
            progress,
            verbose,
        }),
        Commands::Schema => schema::run(),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "retail-seed", &mut io::stdout());
            Ok(())
        }
    }
}
