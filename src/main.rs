use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::debug;

use finalizerom::cli::{self, Args};

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let (mode, output) = match args.mode() {
        Ok(split) => split,
        Err(msg) => Args::command().error(ErrorKind::WrongNumberOfValues, msg).exit(),
    };

    match cli::finalize(mode, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
