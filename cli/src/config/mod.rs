pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use error::ConfigError;
pub use loader::*;
pub use settings::*;
pub use validation::*;
