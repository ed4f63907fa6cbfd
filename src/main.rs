use anyhow::Context;
use clap::{Parser, Subcommand};
use shoprank_api::RestApi;
use shoprank_core::{ProductId, Record};
use shoprank_recommend::{Recommender, RecommenderConfig};
use shoprank_storage::ArtifactLoader;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Catalog recommendations by item, free text or user
#[derive(Parser, Debug)]
#[command(name = "shoprank")]
#[command(about = "Rank catalog items by similarity or predicted rating", long_about = None)]
struct Args {
    /// Directory holding catalog.json and models/
    #[arg(short, long, global = true, default_value = "./data")]
    data_dir: PathBuf,

    /// Results per request when none is given (4 for a card grid, 10 for a list)
    #[arg(long, global = true, default_value_t = 4)]
    default_nums: usize,

    /// Upper bound on results per request
    #[arg(long, global = true, default_value_t = 100)]
    max_nums: usize,

    /// Stop-word file, one word per line
    #[arg(long, global = true)]
    stop_words: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API
    Serve {
        /// HTTP API port
        #[arg(long, default_value_t = 8080)]
        http_port: u16,
    },
    /// Items similar to an existing catalog item
    Item {
        product_id: u64,
        #[arg(short, long)]
        nums: Option<usize>,
    },
    /// Items similar to a free-text description
    Text {
        query: String,
        #[arg(short, long)]
        nums: Option<usize>,
    },
    /// Items with the highest predicted rating for a user
    User {
        user_id: String,
        #[arg(short, long)]
        nums: Option<usize>,
    },
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_recommender(args: &Args) -> anyhow::Result<Recommender> {
    let mut config = RecommenderConfig {
        default_nums: args.default_nums,
        max_nums: args.max_nums,
        stop_words: None,
    };
    if let Some(path) = &args.stop_words {
        let stop_words = RecommenderConfig::load_stop_words(path)
            .with_context(|| format!("reading stop words from {}", path.display()))?;
        info!(words = stop_words.len(), "Stop words loaded");
        config = config.with_stop_words(stop_words);
    }

    info!("Data directory: {:?}", args.data_dir);
    let artifacts = ArtifactLoader::new(&args.data_dir)?
        .load()
        .context("loading artifacts")?;
    Ok(Recommender::from_artifacts(artifacts, config)?)
}

fn print_records(records: &[Record]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let recommender = build_recommender(&args)?;

    match args.command {
        Command::Serve { http_port } => serve(Arc::new(recommender), http_port).await,
        Command::Item { product_id, nums } => {
            let nums = recommender.config().resolve_nums(nums);
            print_records(&recommender.recommend_by_item(ProductId(product_id), nums)?)
        }
        Command::Text { query, nums } => {
            let nums = recommender.config().resolve_nums(nums);
            print_records(&recommender.recommend_by_text(&query, nums, None)?)
        }
        Command::User { user_id, nums } => {
            let nums = recommender.config().resolve_nums(nums);
            print_records(&recommender.recommend_by_user(&user_id, nums)?)
        }
    }
}

async fn serve(recommender: Arc<Recommender>, http_port: u16) -> anyhow::Result<()> {
    info!("Starting shoprank v{}", env!("CARGO_PKG_VERSION"));
    info!("{:?}", recommender.stats());

    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(recommender, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
