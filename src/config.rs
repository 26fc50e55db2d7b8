/// Layout constants for the candlestick chart. The binary renders with
/// `ChartConfig::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    /// Rows used for the price axis, independent of the real terminal height.
    pub height: usize,
    /// Columns per bar: one glyph plus spacing.
    pub stride: usize,
    /// Columns reserved for margins.
    pub padding: usize,
    /// Width assumed when the terminal size cannot be queried.
    pub default_width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: 20,
            stride: 2,
            padding: 4,
            default_width: 80,
        }
    }
}

impl ChartConfig {
    pub fn sanitized(mut self) -> Self {
        self.height = self.height.clamp(1, 200);
        self.stride = self.stride.max(1);
        if self.default_width == 0 {
            self.default_width = ChartConfig::default().default_width;
        }
        self
    }
}
