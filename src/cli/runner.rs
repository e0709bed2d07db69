use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use romcalc::{CalcParams, OutputFormat, run_session};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("romcalc=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn params_from_args(args: &CliArgs) -> CalcParams {
    let mut params = CalcParams {
        format: args.format,
        ..CalcParams::default()
    };
    // A prompt line would break machine-readable output.
    if args.no_prompt || args.format == OutputFormat::Json {
        params.prompt = None;
    }
    params
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let params = params_from_args(&args);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let ok = run_session(
        &params,
        args.expression.as_deref(),
        stdin.lock(),
        stdout.lock(),
    )
    .map_err(AppError::from)?;

    info!(ok, "session finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use romcalc::DEFAULT_PROMPT;

    use super::*;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn default_args_keep_prompt() {
        let params = params_from_args(&parse(&["romcalc"]));
        assert_eq!(params.format, OutputFormat::Text);
        assert_eq!(params.prompt.as_deref(), Some(DEFAULT_PROMPT));
    }

    #[test]
    fn no_prompt_flag_suppresses_prompt() {
        let params = params_from_args(&parse(&["romcalc", "--no-prompt"]));
        assert!(params.prompt.is_none());
    }

    #[test]
    fn json_format_never_prompts() {
        let params = params_from_args(&parse(&["romcalc", "--format", "json"]));
        assert_eq!(params.format, OutputFormat::Json);
        assert!(params.prompt.is_none());
    }

    #[test]
    fn expression_may_start_with_minus() {
        let args = parse(&["romcalc", "-3 + 2"]);
        assert_eq!(args.expression.as_deref(), Some("-3 + 2"));

        let args = parse(&["romcalc", "--format", "json", "-3 + 2"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.expression.as_deref(), Some("-3 + 2"));
    }
}
