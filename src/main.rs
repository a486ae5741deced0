use anyhow::Context;
use clap::Parser;
use phish_rs::config::Config;
use phish_rs::dataset::CorpusLoader;
use phish_rs::eval::Evaluator;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "phish-rs")]
#[command(about = "Phishing email detection with k-fold cross-validation", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Dataset CSV path (overrides the config file)
    #[arg(short, long)]
    dataset: Option<String>,

    /// Number of cross-validation folds (overrides the config file)
    #[arg(short, long)]
    folds: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = if std::path::Path::new(&cli.config).exists() {
        Config::from_file(&cli.config)?
    } else {
        Config::default()
    };
    if let Some(dataset) = cli.dataset {
        config.dataset.path = dataset;
    }
    if let Some(folds) = cli.folds {
        config.evaluation.fold_count = folds;
    }

    init_logging(&config);

    info!("Starting phish-rs evaluation");
    info!("  Dataset: {}", config.dataset.path);
    info!("  Folds: {}", config.evaluation.fold_count);

    let started = std::time::Instant::now();

    let records = CorpusLoader::load(&config.dataset.path)
        .with_context(|| format!("failed to load dataset {}", config.dataset.path))?;

    let evaluator = Evaluator::new(config.evaluation.fold_count)?;
    let report = evaluator.evaluate(&records)?;

    for fold in &report.folds {
        println!("Accuracy for fold {}: {:.1} %", fold.fold, fold.accuracy);
    }
    println!("Average accuracy: {:.1} %", report.mean);

    info!("Evaluation finished in {:.2?}", started.elapsed());

    Ok(())
}

fn init_logging(config: &Config) {
    let level: Level = config.logging.level.parse().unwrap_or(Level::INFO);
    let builder = FmtSubscriber::builder().with_max_level(level);

    if config.logging.format == "pretty" {
        tracing::subscriber::set_global_default(builder.pretty().finish())
            .expect("Failed to set tracing subscriber");
    } else {
        tracing::subscriber::set_global_default(builder.compact().finish())
            .expect("Failed to set tracing subscriber");
    }
}
