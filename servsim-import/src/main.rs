use clap::Parser;
use servsim::{ImportConfiguration, Importer, MemoryPairStore, SimulationStore};
use std::{process, sync::Arc, time::Duration};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for servsim-import
#[derive(Parser, Debug)]
#[command(name = "servsim-import")]
#[command(about = "Imports recorded or templated simulation data")]
#[command(version)]
struct Args {
    /// `.json` files or URLs to import, in order
    #[arg(required = true)]
    uris: Vec<String>,

    /// Give up on a remote source after this many seconds. Waits forever when unset.
    #[arg(long, env = "SERVSIM_FETCH_TIMEOUT")]
    fetch_timeout: Option<u64>,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "servsim=info,servsim_import=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!(error = %e, "import failed");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut configuration = ImportConfiguration::new();
    if let Some(seconds) = args.fetch_timeout {
        configuration.set_http_client(
            reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(seconds))
                .build()?,
        );
    }

    let pairs = Arc::new(MemoryPairStore::new());
    let store = Arc::new(SimulationStore::new(pairs.clone()));
    let importer = Importer::new(configuration, store.clone())?;

    for uri in &args.uris {
        let summary = importer.import(uri)?;
        info!(
            uri = uri.as_str(),
            total = summary.total,
            successful = summary.success,
            failed = summary.failed,
            "source imported"
        );
    }

    println!(
        "{} templates and {} recorded pairs in simulation",
        store.template_count(),
        pairs.len()?
    );

    Ok(())
}
