mod files;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mealplan_core::{MealPlanner, PlannerSettings, RandomSource, RngSource};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

use files::{read_request, read_rules, JsonFileCatalog};

#[derive(Parser)]
#[command(name = "mealplan")]
#[command(about = "Meal plan generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a meal plan and print it as JSON
    Generate {
        /// Recipe catalog (JSON array of recipes)
        #[arg(long)]
        catalog: PathBuf,
        /// Plan request (config, mealSlots, tagNames)
        #[arg(long)]
        request: PathBuf,
        /// Seed for reproducible plans (falls back to MEALPLAN_SEED)
        #[arg(long)]
        seed: Option<u64>,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// List recipes that could replace one in a plan
    Alternatives {
        /// Recipe catalog (JSON array of recipes)
        #[arg(long)]
        catalog: PathBuf,
        /// Recipe currently in the slot
        #[arg(long)]
        recipe: Uuid,
        /// Weekday of the slot, 0 = Sunday
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
        weekday: u8,
        /// Day tag rules (JSON array)
        #[arg(long)]
        rules: Option<PathBuf>,
        /// Recipes already in the plan
        #[arg(long, num_args = 1..)]
        used: Vec<Uuid>,
        /// Maximum number of suggestions
        #[arg(long)]
        limit: Option<usize>,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

/// Console logging to stderr, filtered by RUST_LOG (default: info).
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let settings = PlannerSettings::from_env().context("Invalid planner settings")?;

    match cli.command {
        Commands::Generate {
            catalog,
            request,
            seed,
            pretty,
        } => {
            generate(settings, catalog, request, seed, pretty).await?;
        }
        Commands::Alternatives {
            catalog,
            recipe,
            weekday,
            rules,
            used,
            limit,
            pretty,
        } => {
            let rules = match rules {
                Some(path) => read_rules(&path).await?,
                None => Vec::new(),
            };
            let planner = MealPlanner::new(Box::new(JsonFileCatalog::new(catalog)))
                .with_settings(settings);
            let alternatives = planner
                .alternatives(recipe, weekday, &rules, &used, limit)
                .await
                .context("Failed to find alternatives")?;
            print_json(&alternatives, pretty)?;
        }
    }

    Ok(())
}

async fn generate(
    settings: PlannerSettings,
    catalog: PathBuf,
    request: PathBuf,
    seed: Option<u64>,
    pretty: bool,
) -> Result<()> {
    let request = read_request(&request).await?;
    let planner =
        MealPlanner::new(Box::new(JsonFileCatalog::new(catalog))).with_settings(settings);

    let seed = match seed {
        Some(seed) => Some(seed),
        None => seed_from_env()?,
    };
    let mut rng: Box<dyn RandomSource> = match seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded random source");
            Box::new(RngSource::seeded(seed))
        }
        None => Box::new(RngSource::thread()),
    };

    let plan = planner
        .generate(
            &request.config,
            &request.meal_slots,
            &request.tag_names,
            rng.as_mut(),
        )
        .await
        .context("Failed to generate meal plan")?;

    print_json(&plan, pretty)
}

fn seed_from_env() -> Result<Option<u64>> {
    match std::env::var("MEALPLAN_SEED") {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("MEALPLAN_SEED is not a valid seed: {value:?}")),
        Err(_) => Ok(None),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
