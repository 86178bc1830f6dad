#![forbid(unsafe_code)]

//! tabview-demo binary entry point.

use std::process;

use tabview_demo::{app, cli, logging};

fn main() {
    let opts = match cli::Opts::parse() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    };

    if let Some(path) = &opts.log_file
        && let Err(e) = logging::init(path)
    {
        eprintln!("Failed to open log file: {e}");
        process::exit(e.exit_code());
    }

    match app::run(&opts) {
        Ok(Some(selection)) => println!("{selection}"),
        Ok(None) => {}
        Err(e) => {
            eprintln!("tabview-demo: {e}");
            process::exit(e.exit_code());
        }
    }
}
