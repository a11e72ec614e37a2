use crate::core::classify::Classifier;
use crate::core::{codec, render, width};
use crate::domain::model::{Conversion, NumeralInput, NumeralKind, Resolved, REFERENCE_WIDTH};
use crate::domain::ports::ConversionPipeline;
use crate::utils::error::Result;

/// Classify, infer width, decode, then encode at both widths.
pub struct TwosComplementPipeline {
    classifier: Classifier,
}

impl TwosComplementPipeline {
    pub fn new() -> Result<Self> {
        Ok(Self {
            classifier: Classifier::new()?,
        })
    }

    /// Runs every stage on one raw input.
    pub fn convert(&self, raw: &str) -> Result<Conversion> {
        let input = self.classify(raw)?;
        let resolved = self.resolve(input)?;
        self.encode(resolved)
    }
}

impl ConversionPipeline for TwosComplementPipeline {
    fn classify(&self, raw: &str) -> Result<NumeralInput> {
        self.classifier.classify(raw)
    }

    fn resolve(&self, input: NumeralInput) -> Result<Resolved> {
        let (value, width) = match input.kind {
            NumeralKind::Hexadecimal => {
                let width = width::hex_width(input.digits())?;
                let bits = codec::hex_to_bits(input.digits())?;
                (codec::decode(&bits)?, width)
            }
            NumeralKind::Binary => {
                let bits = width::pad_binary(input.digits())?;
                (codec::decode(&bits)?, bits.width())
            }
            NumeralKind::Decimal => {
                let value = width::parse_decimal(input.digits())?;
                (value, width::decimal_width(value))
            }
        };

        tracing::debug!("Resolved {} input to {} in {} bits", input.kind, value, width);

        Ok(Resolved {
            input,
            value,
            width,
        })
    }

    fn encode(&self, resolved: Resolved) -> Result<Conversion> {
        let minimal = codec::encode(resolved.value, resolved.width)?;
        let reference = codec::encode(resolved.value, REFERENCE_WIDTH)?;

        Ok(Conversion {
            input: resolved.input.raw,
            kind: resolved.input.kind,
            decimal: resolved.value,
            width: resolved.width,
            minimal: render::rendering(&minimal, true),
            reference: render::rendering(&reference, false),
        })
    }
}
