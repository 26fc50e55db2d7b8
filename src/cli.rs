use clap::Parser;

/// Daily candlestick chart for a ticker, drawn in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Ticker symbol to chart
    #[arg(default_value = "AAPL")]
    pub symbol: String,
}
