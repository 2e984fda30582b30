//! Dataset domain - loading the YAML repository and resolving items and subsets

pub mod errors;
pub mod loader;
pub mod resolver;
pub mod types;

pub use errors::*;
pub use loader::load_registry;
pub use types::*;
