/// One trading day's quote. `date` is the provider's ISO label and only needs
/// to sort chronologically.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    pub fn new(date: impl Into<String>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date: date.into(),
            open,
            high,
            low,
            close,
        }
    }

    /// Doji bars (close == open) count as bullish.
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}
