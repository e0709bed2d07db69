use clap::Parser;

use romcalc::OutputFormat;

#[derive(Parser)]
#[command(name = "romcalc", version, about = "Roman/Arabic two-operand calculator")]
pub struct CliArgs {
    /// Expression to evaluate, e.g. "II + III". Read from stdin when omitted
    #[arg(allow_hyphen_values = true)]
    pub expression: Option<String>,

    /// Output format (text or json)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not print the prompt before reading stdin
    #[arg(long, default_value_t = false)]
    pub no_prompt: bool,

    /// Enable logging (to stderr; RUST_LOG overrides the level)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
