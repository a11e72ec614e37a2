use crate::domain::model::{Conversion, NumeralInput, Resolved};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub trait ConfigProvider {
    /// Command-line tokens as typed, before whitespace removal.
    fn input_tokens(&self) -> &[String];
    fn output_format(&self) -> OutputFormat;

    fn raw_input(&self) -> String {
        self.input_tokens().join(" ")
    }
}

pub trait ConversionPipeline {
    fn classify(&self, raw: &str) -> Result<NumeralInput>;
    fn resolve(&self, input: NumeralInput) -> Result<Resolved>;
    fn encode(&self, resolved: Resolved) -> Result<Conversion>;
}
