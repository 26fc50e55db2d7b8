use crate::config::ChartConfig;
use crate::data::Bar;
use crossterm::{
    queue,
    style::{Attribute, Print, PrintStyledContent, SetAttribute, Stylize},
    terminal,
};
use log::debug;
use std::io::{self, Write};

const BODY_GLYPH: &str = "█";
const WICK_GLYPH: &str = "│";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Wick,
    BullishBody,
    BearishBody,
}

/// Maps prices onto grid rows, row 0 being the highest price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    pub min: f64,
    pub max: f64,
    height: usize,
}

impl PriceScale {
    /// Range over the window's lows and highs. A flat window is widened by 1.0
    /// so the division in `row` is always defined.
    pub fn from_window(window: &[Bar], height: usize) -> Self {
        let (min, mut max) = window.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), bar| (min.min(bar.low), max.max(bar.high)),
        );
        if max == min {
            max += 1.0;
        }

        Self {
            min,
            max,
            height: height.max(1),
        }
    }

    /// Rounds half up, flips so higher prices get smaller indices, then clamps
    /// into the grid for bars that break the OHLC ordering.
    pub fn row(&self, price: f64) -> usize {
        let last = (self.height - 1) as f64;
        let ratio = (price - self.min) / (self.max - self.min);
        let row = (ratio * last + 0.5).floor();
        (last - row).clamp(0.0, last) as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Blank; width]; height],
        }
    }

    #[cfg(test)]
    fn height(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[cfg(test)]
    fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows[row][col]
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    fn fill(&mut self, col: usize, from: usize, to: usize, cell: Cell) {
        let (top, bottom) = (from.min(to), from.max(to));
        for row in &mut self.rows[top..=bottom] {
            row[col] = cell;
        }
    }

    /// Wick first, body second, so the body wins where they overlap.
    pub fn paint(&mut self, col: usize, bar: &Bar, scale: &PriceScale) {
        self.fill(col, scale.row(bar.high), scale.row(bar.low), Cell::Wick);

        let body = if bar.is_bullish() {
            Cell::BullishBody
        } else {
            Cell::BearishBody
        };
        self.fill(col, scale.row(bar.open), scale.row(bar.close), body);
    }
}

/// Terminal column count, or `default` when the size query fails.
pub fn terminal_width(default: usize) -> usize {
    resolve_width(terminal::size(), default)
}

fn resolve_width(size: io::Result<(u16, u16)>, default: usize) -> usize {
    match size {
        Ok((cols, _)) => cols as usize,
        Err(e) => {
            debug!("terminal size unavailable ({}), assuming {} columns", e, default);
            default
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chart {
    config: ChartConfig,
}

impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn max_bars_visible(&self, width: usize) -> usize {
        width.saturating_sub(self.config.padding) / self.config.stride
    }

    /// The most recent bars that fit in `width` columns.
    pub fn window<'a>(&self, bars: &'a [Bar], width: usize) -> &'a [Bar] {
        let shown = bars.len().min(self.max_bars_visible(width));
        &bars[bars.len() - shown..]
    }

    pub fn build_grid(&self, window: &[Bar]) -> (PriceScale, Grid) {
        let scale = PriceScale::from_window(window, self.config.height);
        let mut grid = Grid::new(self.config.height, window.len());
        for (col, bar) in window.iter().enumerate() {
            grid.paint(col, bar, &scale);
        }
        (scale, grid)
    }

    /// Renders at the current terminal width.
    pub fn render<W: Write>(&self, bars: &[Bar], symbol: &str, out: &mut W) -> io::Result<()> {
        let width = terminal_width(self.config.default_width);
        self.render_with_width(bars, symbol, width, out)
    }

    pub fn render_with_width<W: Write>(
        &self,
        bars: &[Bar],
        symbol: &str,
        width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let window = self.window(bars, width);
        if window.is_empty() {
            debug!("nothing to draw: {} bars, width {}", bars.len(), width);
            return Ok(());
        }
        debug!(
            "showing {} of {} bars at width {}",
            window.len(),
            bars.len(),
            width
        );

        let (scale, grid) = self.build_grid(window);
        debug!("price range {} .. {}", scale.min, scale.max);

        queue!(
            out,
            Print("\n"),
            SetAttribute(Attribute::Bold),
            Print(format!("Chart: {} ({} candles)", symbol, window.len())),
            SetAttribute(Attribute::Reset),
            Print("\n"),
            Print(format!("Max: {}\n\n", scale.max)),
        )?;

        for row in grid.rows() {
            queue!(out, Print("  "))?;
            for cell in row {
                match cell {
                    Cell::BullishBody => queue!(out, PrintStyledContent(BODY_GLYPH.dark_green()))?,
                    Cell::BearishBody => queue!(out, PrintStyledContent(BODY_GLYPH.dark_red()))?,
                    Cell::Wick => queue!(out, PrintStyledContent(WICK_GLYPH.dark_grey()))?,
                    Cell::Blank => queue!(out, Print(" "))?,
                }
                queue!(out, Print(" "))?;
            }
            queue!(out, Print("\n"))?;
        }

        let first = &window[0];
        let last = &window[window.len() - 1];
        queue!(
            out,
            Print(format!("\nMin: {}\n", scale.min)),
            Print(format!("Range: {} -> {}\n\n", first.date, last.date)),
        )?;
        out.flush()
    }
}
