pub mod bar;
pub mod fetch;

pub use bar::Bar;
pub use fetch::*;
