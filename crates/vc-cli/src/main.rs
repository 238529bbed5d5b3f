mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use commands::Commands;
use config::{SchemeKind, Settings, VcConfig};

#[derive(Parser, Debug)]
#[command(name = "vc")]
#[command(about = "Compare versions and match them against range constraints")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Version scheme (overrides vc.toml)
    #[arg(long, value_enum, global = true)]
    scheme: Option<SchemeKind>,

    /// Require full X.Y.Z semantic versions without leading zeros
    #[arg(long, global = true, overrides_with = "no_strict")]
    strict: bool,

    /// Accept loose semantic versions even when vc.toml sets strict
    #[arg(long, global = true, overrides_with = "strict")]
    no_strict: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

impl Args {
    fn strict(&self) -> Option<bool> {
        match (self.strict, self.no_strict) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    // RUST_LOG still wins when set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logger(args.verbose);

    // Load vc.toml config if present
    let config = VcConfig::load_from_cwd()?;
    let settings = Settings::resolve(config.as_ref(), args.scheme, args.strict());
    log::debug!("Effective settings: {:?}", settings);

    commands::execute(args.command, &settings, args.json)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("{} {}", console::style("Error:").red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::from(2)
        }
    }
}
