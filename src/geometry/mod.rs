pub mod rect;
pub mod tagged;
pub mod unit;
