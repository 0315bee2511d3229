use clap::Parser;
use log::{debug, LevelFilter};
use snafu::ErrorCompat;

mod args;
mod report;

fn main() {
    let args = args::Args::parse();

    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }
    debug!("args: {:?}", args);

    let config_path = match args.config {
        Some(p) => p,
        None => {
            eprintln!("No snapshot provided, use --config to pass one");
            std::process::exit(2);
        }
    };

    if let Err(e) = report::run_report(&config_path, args.reference, args.out) {
        eprintln!("An error occured: {}", e);
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
