use anyhow::Context;
use std::io::Write;
use twos_complement::utils::{logger, validation::Validate};
use twos_complement::{CliConfig, ConverterEngine, TwosComplementPipeline};

fn main() -> anyhow::Result<()> {
    let config = match CliConfig::try_from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let result = config.validate().and_then(|_| {
        let pipeline = TwosComplementPipeline::new()?;
        ConverterEngine::new(pipeline).run(&config)
    });

    match result {
        Ok(report) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(report.as_bytes())
                .and_then(|_| stdout.flush())
                .context("failed to write the conversion to stdout")?;
        }
        Err(e) => {
            tracing::debug!(
                "Conversion failed: {:?} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::info!("Suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
