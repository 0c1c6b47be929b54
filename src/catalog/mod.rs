//! Word list catalog and settings.
//!
//! - `registry`: named categories, with the built-in zodiac list
//! - `settings`: TOML settings (active category, peer marker, swipe
//!   threshold, extra categories)

pub mod registry;
pub mod settings;

pub use registry::{CatalogError, Category, CategoryRegistry, ZODIAC};
pub use settings::{CategoryConfig, ConfigError, Settings};
