//! Settings context - defaults, site configuration and override layers

pub mod defaults;
pub mod errors;
pub mod settings;
pub mod site;
pub mod types;

pub use errors::*;
pub use settings::*;
pub use site::*;
pub use types::*;
