pub mod answers;
pub mod prediction;
pub mod risk;
pub mod variant;
