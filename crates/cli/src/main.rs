mod render;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use dashboard::{RecipeDashboard, compute_view};
use pipeline::{COOKING_TIME_PRESETS, CUISINE_PRESETS, DIET_PRESETS, FilterPipeline, FilterSpec};
use rand::Rng;
use recipe_data::Recipe;
use sources::{FileSource, SourceConfig, SpoonacularSource};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// recipe-dash - Recipe search dashboard
#[derive(Parser)]
#[command(name = "recipe-dash")]
#[command(about = "Fetch recipes, filter them and summarize the result", long_about = None)]
struct Cli {
    /// Read a saved search response instead of calling the API
    #[arg(short, long, global = true)]
    from_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show summary statistics and recipe cards for a filter
    Summary {
        #[command(flatten)]
        filters: FilterArgs,

        /// Only print the statistics
        #[arg(long)]
        no_cards: bool,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the diets, cuisines and cooking times to filter on
    Options,

    /// Time filtering and aggregation over a synthetic recipe set
    Benchmark {
        /// Number of filter specs to evaluate
        #[arg(long, default_value = "1000")]
        iterations: usize,

        /// Size of the synthetic recipe set
        #[arg(long, default_value = "100")]
        recipes: usize,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Case-insensitive title search
    #[arg(long, default_value = "")]
    search: String,

    /// Exact diet tag, e.g. "vegan"
    #[arg(long, default_value = "")]
    diet: String,

    /// Exact cuisine tag, e.g. "Italian"
    #[arg(long, default_value = "")]
    cuisine: String,

    /// Lower calorie bound (inclusive)
    #[arg(long, default_value = "0")]
    min_calories: f64,

    /// Upper calorie bound (inclusive)
    #[arg(long, default_value = "1000")]
    max_calories: f64,

    /// Cooking-time bucket in minutes, e.g. "16-30"
    #[arg(long, default_value = "")]
    cooking_time: String,
}

impl FilterArgs {
    fn to_spec(&self) -> FilterSpec {
        FilterSpec::new()
            .with_search(self.search.clone())
            .with_diet(self.diet.clone())
            .with_cuisine(self.cuisine.clone())
            .with_calorie_range(self.min_calories, self.max_calories)
            .with_cooking_time(&self.cooking_time)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary {
            filters,
            no_cards,
            json,
        } => {
            let dashboard = load_dashboard(cli.from_file).await?;
            handle_summary(dashboard, filters.to_spec(), no_cards, json)?
        }
        Commands::Options => {
            let dashboard = load_dashboard(cli.from_file).await?;
            handle_options(&dashboard)?
        }
        Commands::Benchmark {
            iterations,
            recipes,
        } => handle_benchmark(iterations, recipes)?,
    }

    Ok(())
}

/// Fetch the recipes once, from a file or the API
async fn load_dashboard(from_file: Option<PathBuf>) -> Result<RecipeDashboard> {
    let start = Instant::now();
    let dashboard = match from_file {
        Some(path) => RecipeDashboard::load(&FileSource::new(path)).await,
        None => {
            let config = SourceConfig::from_env().context("Failed to load source configuration")?;
            let source = SpoonacularSource::new(config).context("Failed to build HTTP client")?;
            RecipeDashboard::load(&source).await
        }
    };

    if let Some(message) = dashboard.error_message() {
        bail!("{}", message);
    }
    eprintln!("{} Loaded recipes in {:?}", "✓".green(), start.elapsed());
    Ok(dashboard)
}

/// Handle the 'summary' command
fn handle_summary(
    mut dashboard: RecipeDashboard,
    spec: FilterSpec,
    no_cards: bool,
    json: bool,
) -> Result<()> {
    if let Some(catalog) = dashboard.catalog() {
        render::print_skipped(catalog);
    }

    let view = dashboard
        .view(&spec)
        .context("Recipes are not loaded")?;

    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    render::print_summary(&view.stats);
    if !no_cards {
        render::print_cards(&view.recipes);
    }
    Ok(())
}

/// Handle the 'options' command
fn handle_options(dashboard: &RecipeDashboard) -> Result<()> {
    let catalog = dashboard.catalog().context("Recipes are not loaded")?;
    render::print_options(catalog);
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(iterations: usize, recipes: usize) -> Result<()> {
    if iterations == 0 {
        bail!("--iterations must be at least 1");
    }

    let mut rng = rand::rng();
    let recipes = synthetic_recipes(&mut rng, recipes);
    let pipeline = FilterPipeline::standard();

    let specs: Vec<FilterSpec> = (0..iterations).map(|_| random_spec(&mut rng)).collect();
    info!(
        "Running {} filter specs over {} recipes",
        specs.len(),
        recipes.len()
    );

    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    let mut matched = 0usize;
    for spec in &specs {
        let start = Instant::now();
        let view = compute_view(&pipeline, &recipes, spec);
        timings.push(start.elapsed());
        matched += view.stats.count;
    }

    // Calculate and display statistics
    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];
    let throughput = iterations as f64 / total_time.as_secs_f64().max(f64::EPSILON);

    println!("{}", "Benchmark results:".bold().blue());
    println!("Recipes: {}", recipes.len());
    println!("Specs evaluated: {}", iterations);
    println!("Average matches per spec: {:.2}", matched as f64 / iterations as f64);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} views/second", throughput);

    Ok(())
}

const TITLE_WORDS: &[&str] = &[
    "Pasta", "Salad", "Curry", "Tacos", "Soup", "Stew", "Bowl", "Risotto", "Wrap", "Pie",
];

fn synthetic_recipes(rng: &mut impl Rng, count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            let word = TITLE_WORDS[rng.random_range(0..TITLE_WORDS.len())];
            let diets = DIET_PRESETS
                .iter()
                .filter(|_| rng.random_bool(0.3))
                .map(|d| d.to_string())
                .collect();
            let cuisines = CUISINE_PRESETS
                .iter()
                .filter(|_| rng.random_bool(0.2))
                .map(|c| c.to_string())
                .collect();

            Recipe {
                id: i as u64,
                title: format!("{} #{}", word, i),
                image: String::new(),
                ready_in_minutes: rng.random_range(0..=180),
                diets,
                cuisines,
                calories: rng.random_range(0.0..1200.0),
            }
        })
        .collect()
}

fn random_spec(rng: &mut impl Rng) -> FilterSpec {
    let mut spec = FilterSpec::new();
    if rng.random_bool(0.3) {
        spec = spec.with_search(TITLE_WORDS[rng.random_range(0..TITLE_WORDS.len())].to_lowercase());
    }
    if rng.random_bool(0.5) {
        spec = spec.with_diet(DIET_PRESETS[rng.random_range(0..DIET_PRESETS.len())]);
    }
    if rng.random_bool(0.3) {
        spec = spec.with_cuisine(CUISINE_PRESETS[rng.random_range(0..CUISINE_PRESETS.len())]);
    }
    if rng.random_bool(0.5) {
        let (_, bucket) = COOKING_TIME_PRESETS[rng.random_range(0..COOKING_TIME_PRESETS.len())];
        spec = spec.with_cooking_time_bucket(bucket);
    }
    let min = rng.random_range(0.0..500.0);
    spec.with_calorie_range(min, min + rng.random_range(100.0..700.0))
}
