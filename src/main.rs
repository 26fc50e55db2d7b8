use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use stockcandle::cli::Args;
use stockcandle::config::ChartConfig;
use stockcandle::credentials;
use stockcandle::data::fetch_daily_series;
use stockcandle::ui::Chart;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let api_key = credentials::api_key_path()
        .and_then(|path| credentials::load_or_prompt(&path))
        .wrap_err("could not obtain an API key")?;

    println!("Fetching {}...", args.symbol);
    let bars = fetch_daily_series(&args.symbol, &api_key)
        .await
        .wrap_err_with(|| format!("failed to load daily series for {}", args.symbol))?;

    let chart = Chart::new(ChartConfig::default());
    let stdout = std::io::stdout();
    chart
        .render(&bars, &args.symbol, &mut stdout.lock())
        .wrap_err("failed to write chart")?;
    Ok(())
}
