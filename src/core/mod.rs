pub mod classify;
pub mod codec;
pub mod engine;
pub mod pipeline;
pub mod render;
pub mod width;

pub use crate::domain::model::{BitVector, Conversion, NumeralInput, NumeralKind, Rendering, Resolved};
pub use crate::domain::ports::{ConfigProvider, ConversionPipeline, OutputFormat};
pub use crate::utils::error::Result;
