pub mod chart;

pub use chart::{Cell, Chart, Grid, PriceScale};
