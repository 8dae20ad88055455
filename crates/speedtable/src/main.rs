//! `speedtable` - render a table description as a styled terminal table.

mod cli;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();
    cli::init_tracing(args.verbose);

    match cli::run(&args) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("error: {:#}", err);
            std::process::exit(1);
        }
    }
}
