//! Judge-facing solution to Codeforces 4A: reads `w` from stdin and prints
//! `YES` when it splits into two positive even parts, `NO` otherwise.

use cf_util::problems::watermelon;
use cf_util::utils::logger;
use std::io;

fn main() {
    logger::init_solver_logger();

    if let Err(e) = watermelon::solve(io::stdin().lock(), io::stdout().lock()) {
        tracing::error!("{} (Category: {:?})", e, e.category());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
