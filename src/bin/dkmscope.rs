use clap::{CommandFactory, Parser, Subcommand};
use dkmscope::config::{self, SummarizeConfig, TARGET_ENV};
use dkmscope::dkms::DEFAULT_DKMS_BASE;
use dkmscope::reader::DEFAULT_TAIL_LINES;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dkmscope", version, about = "Summarize RTL8821CU WSL fix logs into JSON")]
#[command(after_help = "EXAMPLES:\n    dkmscope summarize logs/latest/run.log\n    dkmscope summarize run.log --target /opt/rtl8821cu --pretty")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a log file to JSON
    Summarize {
        /// Path to run.log or similar
        logfile: String,

        /// Target folder containing PATCHES_APPLIED (defaults to $RTL8821CU_WSL_TARGET, then the executable's directory)
        #[arg(long)]
        target: Option<String>,

        /// DKMS module root searched for <version>/build/make.log
        #[arg(long = "dkms-base", default_value = DEFAULT_DKMS_BASE)]
        dkms_base: PathBuf,

        /// Trailing make.log lines to include
        #[arg(long = "tail-lines", default_value_t = DEFAULT_TAIL_LINES)]
        tail_lines: usize,

        /// Indent the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("DKMSCOPE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();

    let Some(Command::Summarize { logfile, target, dkms_base, tail_lines, pretty }) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::from(1));
    };

    let env_target = std::env::var(TARGET_ENV).ok();
    let target_dir = config::resolve_target_dir(target.as_deref(), env_target.as_deref());
    tracing::debug!(target = %target_dir.display(), "resolved target directory");

    let cfg = SummarizeConfig::default()
        .with_target_dir(target_dir)
        .with_dkms_base(dkms_base)
        .with_tail_lines(tail_lines);

    let record = dkmscope::summarize_log(&logfile, &cfg);
    println!("{}", record.to_json(pretty)?);
    Ok(ExitCode::SUCCESS)
}
