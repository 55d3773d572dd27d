pub mod config;
pub mod error;
pub mod models;
pub mod problems;
pub mod segment;
pub mod server;

pub use config::AppConfig;
pub use error::GenerateError;
pub use problems::{generate_insertion_problems, generate_ordering_problems, ProblemGenerator};
pub use server::run_server;
