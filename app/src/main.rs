mod config;
mod prefs;
mod render;

use config::AppConfig;
use connectors::{coinlore::CoinloreConnector, FetchSlot, TickerSource};
use prefs::{Prefs, Theme};
use registry::CoinRegistry;
use tracing::{error, info};

struct CliArgs {
    query: String,
    coin: Option<String>,
    quantity: Option<String>,
    theme: Option<Theme>,
}

fn parse_args() -> Result<CliArgs, Box<dyn std::error::Error>> {
    let mut parsed = CliArgs {
        query: String::new(),
        coin: None,
        quantity: None,
        theme: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--coin" => {
                parsed.coin = Some(args.next().ok_or("--coin requires a coin name")?);
            }
            "--qty" => {
                parsed.quantity = Some(args.next().ok_or("--qty requires a quantity")?);
            }
            "--theme" => {
                let value = args.next().ok_or("--theme requires light or dark")?;
                parsed.theme = Some(value.parse()?);
            }
            other => parsed.query = other.to_string(),
        }
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    let args = parse_args()?;

    // Theme preference is an explicit value backed by a small file store, not
    // ambient global state.
    let prefs = Prefs::new(config.prefs_path.clone());
    if let Some(theme) = args.theme {
        prefs.save_theme(theme)?;
        info!("Saved theme preference: {}", theme);
    }
    match prefs.load_theme()? {
        Some(theme) => info!("Using {} theme", theme),
        None => println!("No theme preferences found"),
    }

    let connector = CoinloreConnector::with_tickers_url(config.tickers_url.clone())
        .timeout(config.fetch_timeout);

    // One fetch slot, so a refresh would supersede a pending fetch instead of
    // piling up a second request.
    let mut slot = FetchSlot::new();
    slot.start(async move { connector.fetch_tickers().await });

    let list = match slot.join().await {
        Some(Ok(list)) => list,
        Some(Err(e)) => {
            // Network and parse failures route to the same generic message;
            // no partial data is shown for either.
            error!("Failed to load coin data: {}", e);
            eprintln!("Something went wrong loading coin data. Please try again later.");
            std::process::exit(1);
        }
        None => {
            error!("Ticker fetch was cancelled before completing");
            std::process::exit(1);
        }
    };

    info!("Loaded {} coins", list.len());

    let mut registry = CoinRegistry::new();
    registry.load(list);
    registry.apply_query(&args.query);

    for coin in registry.current() {
        println!("{}", render::render_row(coin));
    }

    if let Some(name) = args.coin {
        match registry.current().iter().find(|c| c.name == name) {
            Some(coin) => {
                println!();
                println!("{}", render::render_detail(coin, args.quantity.as_deref()));
                println!("{}", render::share_text(coin));
            }
            None => eprintln!("No coin named {:?} in the current view", name),
        }
    }

    Ok(())
}
