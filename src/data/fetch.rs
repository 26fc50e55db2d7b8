use crate::data::Bar;
use crate::error::FetchError;
use log::debug;
use reqwest::Client;
use serde_json::Value;

const URL: &str = "https://www.alphavantage.co/query";
const SERIES_KEY: &str = "Time Series (Daily)";

pub async fn fetch_daily_series(symbol: &str, api_key: &str) -> Result<Vec<Bar>, FetchError> {
    let client = Client::new();
    debug!("GET {} function=TIME_SERIES_DAILY symbol={}", URL, symbol);
    let body = client
        .get(URL)
        .query(&[
            ("function", "TIME_SERIES_DAILY"),
            ("symbol", symbol),
            ("apikey", api_key),
        ])
        .send()
        .await?
        .text()
        .await?;

    debug!("received {} bytes", body.len());
    parse_daily_series(&body)
}

/// Decodes a `TIME_SERIES_DAILY` document into bars, oldest first.
pub fn parse_daily_series(body: &str) -> Result<Vec<Bar>, FetchError> {
    let json: Value = serde_json::from_str(body)?;

    if let Some(msg) = json.get("Error Message") {
        return Err(FetchError::Api(message_text(msg)));
    }
    if let Some(msg) = json.get("Note").or_else(|| json.get("Information")) {
        return Err(FetchError::RateLimited(message_text(msg)));
    }

    let series = json
        .get(SERIES_KEY)
        .and_then(|v| v.as_object())
        .ok_or(FetchError::MissingSeries)?;

    let mut bars = series
        .iter()
        .map(|(date, quote)| {
            Ok(Bar {
                date: date.clone(),
                open: parse_field(date, quote, "1. open")?,
                high: parse_field(date, quote, "2. high")?,
                low: parse_field(date, quote, "3. low")?,
                close: parse_field(date, quote, "4. close")?,
            })
        })
        .collect::<Result<Vec<Bar>, FetchError>>()?;

    // The provider lists newest first.
    bars.sort_by(|a, b| a.date.cmp(&b.date));
    debug!("decoded {} daily bars", bars.len());
    Ok(bars)
}

fn parse_field(date: &str, quote: &Value, field: &'static str) -> Result<f64, FetchError> {
    let raw = quote.get(field).ok_or_else(|| FetchError::MissingField {
        date: date.to_string(),
        field,
    })?;

    let invalid = || FetchError::InvalidNumber {
        date: date.to_string(),
        field,
        value: message_text(raw),
    };

    let value = raw
        .as_str()
        .ok_or_else(invalid)?
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid())?;

    // "NaN" and "inf" parse as f64 but are not prices.
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

fn message_text(msg: &Value) -> String {
    msg.as_str()
        .map(str::to_string)
        .unwrap_or_else(|| msg.to_string())
}
