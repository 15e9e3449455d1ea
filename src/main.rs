use anyhow::Result;
use clap::Parser;
use vitalrisk::cli::{Cli, Commands, InputArgs, OutputArgs};
use vitalrisk::commands::{self, AssessConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Assess { input, output } => {
            let explain = output.verbosity > 0;
            commands::handle_assess(build_assess_config(input, output, explain))
        }
        Commands::Explain { input, output } => {
            commands::handle_assess(build_assess_config(input, output, true))
        }
        Commands::Init { force } => commands::init_config(force),
    }
}

// RUST_LOG takes precedence over -v
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

// Pure function to build assess configuration from parsed arguments
fn build_assess_config(input: InputArgs, output: OutputArgs, explain: bool) -> AssessConfig {
    AssessConfig {
        overrides: input.overrides(),
        input: input.input,
        config: input.config,
        strict: input.strict,
        format: output.format,
        output: output.output,
        plain: output.plain,
        color: output.color,
        explain,
    }
}
