pub mod config;
pub mod submission;
pub mod validation;

pub use submission::*;
pub use validation::*;
