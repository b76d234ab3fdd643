pub mod distances;
pub mod generate;
pub mod score;
