use clap::Parser;

use gridstar_term::Config;

fn main() {
    env_logger::init();
    let config = Config::parse();
    if let Err(e) = gridstar_term::run(&config) {
        eprintln!("gridstar: {e}");
        std::process::exit(1);
    }
}
