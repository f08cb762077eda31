pub mod logging;
pub mod numbers;
pub mod timing;

pub use numbers::{parse_numbers_comma, parse_numbers_split};
pub use timing::{timing, Timing};
