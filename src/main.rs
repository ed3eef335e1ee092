use std::process::ExitCode;

use clap::Parser;

use presetmerge::{Cli, merge_files};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match merge_files(&cli.config_file, &cli.preset_file) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
