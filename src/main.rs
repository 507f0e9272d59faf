use clap::Parser;

use northwind::adapter::inbound::cli::command::{Cli, ColorChoice};
use northwind::adapter::inbound::cli::{output, run};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    let json = cli.json;
    if let Err(report) = run(cli) {
        if json {
            output::error(true, &report.to_string());
        } else {
            eprintln!("{report:?}");
        }
        std::process::exit(1);
    }
}
