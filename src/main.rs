use clap::Parser;

use proptypes_gen::cli::{run, Cli};

fn main() {
    proptypes_gen::init_tracing();
    let args = Cli::parse();
    std::process::exit(run(&args));
}
