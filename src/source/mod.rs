pub mod dimensions;
