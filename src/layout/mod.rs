pub mod cut;
pub mod model;
pub mod scale;
