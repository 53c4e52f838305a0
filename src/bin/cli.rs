use anyhow::Context;
use clap::{Parser, Subcommand};
use roster_match_engine::core::load_roster;
use roster_match_engine::{
    BlockedIndex, EngineConfig, MatchResult, Metric, RapidfuzzMatcher, Record, RosterResolver,
    SmithWaterman, TopNRanker,
};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster-match")]
#[command(about = "Roster Match Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON engine configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Smith-Waterman score between two strings
    Score {
        s1: String,
        s2: String,

        #[arg(long)]
        match_reward: Option<u32>,

        #[arg(long)]
        gap_cost: Option<u32>,
    },

    /// Rank a pool of strings against a target by alignment score
    Rank {
        target: String,

        /// Candidate strings
        #[arg(required = true)]
        pool: Vec<String>,

        /// Number of results to keep
        #[arg(short, default_value = "5")]
        n: usize,
    },

    /// Resolve one name against a roster
    Resolve {
        /// Roster JSON file: [{"name": ..., "year": ...}]
        #[arg(short, long)]
        roster: PathBuf,

        #[arg(long)]
        name: String,

        /// Year of birth
        #[arg(long)]
        year: i32,

        /// Override the configured threshold
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Override the configured metric (jaro_winkler, indel, token_sort)
        #[arg(short, long)]
        metric: Option<Metric>,
    },

    /// Resolve a JSON file of queries against a roster, printing JSON lines
    Batch {
        #[arg(short, long)]
        roster: PathBuf,

        /// Queries JSON file, same shape as the roster
        #[arg(short, long)]
        queries: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct BatchLine<'a> {
    query: &'a str,
    year: i32,
    #[serde(flatten)]
    result: &'a MatchResult,
}

/// Roster and query files share the same row format and validation
fn load_records(path: &Path) -> anyhow::Result<Vec<Record<i32>>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    load_roster(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

fn load_index(path: &Path) -> anyhow::Result<BlockedIndex<i32>> {
    Ok(BlockedIndex::build(load_records(path)?))
}

fn build_resolver(
    config: &EngineConfig,
    index: BlockedIndex<i32>,
) -> anyhow::Result<RosterResolver<i32>> {
    let matcher = Arc::new(RapidfuzzMatcher::with_metric(config.metric));
    Ok(RosterResolver::with_matcher(index, matcher, config.resolver)?)
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Score {
            s1,
            s2,
            match_reward,
            gap_cost,
        } => {
            if let Some(reward) = match_reward {
                config.alignment.match_reward = reward;
            }
            if let Some(cost) = gap_cost {
                config.alignment.gap_cost = cost;
            }
            config.validate()?;

            let score = SmithWaterman::new(config.alignment).score(&s1, &s2);
            println!("{}", score);
        }

        Commands::Rank { target, pool, n } => {
            let ranker = TopNRanker::with_scorer(SmithWaterman::new(config.alignment));

            for (i, ranked) in ranker.rank_par(&target, &pool, n).iter().enumerate() {
                println!("{}. {} ({})", i + 1, ranked.candidate, ranked.score);
            }
        }

        Commands::Resolve {
            roster,
            name,
            year,
            threshold,
            metric,
        } => {
            if let Some(threshold) = threshold {
                config.resolver.threshold = threshold;
            }
            if let Some(metric) = metric {
                config.metric = metric;
            }

            let resolver = build_resolver(&config, load_index(&roster)?)?;
            let result = resolver.resolve(&name, &year);
            println!("{}", serde_json::to_string(&result)?);
        }

        Commands::Batch { roster, queries } => {
            let resolver = build_resolver(&config, load_index(&roster)?)?;

            let queries = load_records(&queries)?;
            let pairs: Vec<(&str, i32)> = queries
                .iter()
                .map(|q| (q.name.as_str(), q.key))
                .collect();

            for ((query, year), result) in pairs.iter().zip(resolver.resolve_batch(&pairs).iter()) {
                let line = BatchLine {
                    query,
                    year: *year,
                    result,
                };
                println!("{}", serde_json::to_string(&line)?);
            }
        }
    }

    Ok(())
}
