//! Rendering domain - binds dataset items into listing, row and card templates

pub mod binder;
pub mod context;
pub mod errors;
pub mod tera_engine;
pub mod traits;

pub use binder::*;
pub use context::*;
pub use errors::*;
pub use tera_engine::*;
pub use traits::*;
