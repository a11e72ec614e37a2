#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{engine::ConverterEngine, pipeline::TwosComplementPipeline};
pub use domain::model::Conversion;
pub use utils::error::{ConvertError, Result};
