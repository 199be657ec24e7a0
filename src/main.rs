use std::env;
use std::io;
use std::process::ExitCode;

use mimalloc::MiMalloc;

use partial_word_count::cli;
use partial_word_count::config::config;
use partial_word_count::logger;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cfg = config();
    if let Err(e) = logger::init(cfg) {
        eprintln!("{e}, continuing without a log file.");
    }

    let stdout = io::stdout();
    let outcome = cli::execute(env::args_os(), cfg, &mut stdout.lock());
    log::logger().flush();

    outcome.into()
}
