mod commands;

use std::env;

use bf2js::logging::init_logging;
use clap::Parser;

use crate::commands::translate::{self, TranslateArgs};

#[derive(Parser, Debug)]
#[command(name = "bf2js", disable_help_flag = true)]
struct Cli {
    #[command(flatten)]
    args: TranslateArgs,
}

fn main() {
    init_logging();

    // Program name for usage and diagnostics
    let program = env::args().next().unwrap_or_else(|| String::from("bf2js"));

    let cli = Cli::parse();
    let code = translate::run(&program, cli.args);

    std::process::exit(code);
}
