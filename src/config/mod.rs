use crate::domain::ports::{ConfigProvider, OutputFormat};
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_non_empty_input, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "twos-comp")]
#[command(about = "Two's complement converter for decimal, binary and hexadecimal numerals")]
#[command(disable_help_flag = true)]
pub struct CliConfig {
    /// Numeral to convert; tokens are joined and whitespace is ignored
    #[arg(
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        allow_negative_numbers = true,
        trailing_var_arg = true
    )]
    pub input: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Parses the process arguments. Anything clap rejects is reported as an
    /// unrecognised numeral, so `-h` or a lone `--json` fail like `12a`.
    pub fn try_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        Self::try_parse_from(&args).map_err(|_| ConvertError::InvalidInput {
            input: args
                .iter()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" "),
        })
    }
}

impl ConfigProvider for CliConfig {
    fn input_tokens(&self) -> &[String] {
        &self.input
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_input("input", &self.raw_input())
    }
}
