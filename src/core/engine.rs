use crate::core::render;
use crate::domain::ports::{ConfigProvider, ConversionPipeline, OutputFormat};
use crate::utils::error::Result;

pub struct ConverterEngine<P: ConversionPipeline> {
    pipeline: P,
}

impl<P: ConversionPipeline> ConverterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Produces the full stdout text. Nothing is returned unless every stage succeeds.
    pub fn run<C: ConfigProvider>(&self, config: &C) -> Result<String> {
        let raw = config.raw_input();
        tracing::info!("Converting '{}'", raw);

        let input = self.pipeline.classify(&raw)?;
        let resolved = self.pipeline.resolve(input)?;
        let conversion = self.pipeline.encode(resolved)?;

        tracing::info!(
            "Converted {} input to {} ({} bits)",
            conversion.kind,
            conversion.decimal,
            conversion.width
        );

        match config.output_format() {
            OutputFormat::Text => Ok(render::text(&conversion)),
            OutputFormat::Json => render::json(&conversion),
        }
    }
}
