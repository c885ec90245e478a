mod args;
mod decimal;
mod value;

pub use args::{Args, Options};
pub use decimal::parse_decimal;
pub use value::{Record, Value};
