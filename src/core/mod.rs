pub mod config;
pub mod errors;
pub mod validation;

pub use config::SharingConfig;
pub use errors::ShamirError;
pub use validation::is_valid_share;
