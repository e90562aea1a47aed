//! Static-file pre-compression utility
//!
//! Walks a directory tree and keeps a compressed `.gz` sibling next to every
//! eligible static file, ready for direct delivery by a webserver.

use std::io;
use std::process;

mod opts;

use opts::Opts;

const PROGRAM_NAME: &str = "gzstatic";

fn main() -> io::Result<()> {
    let opts = Opts::parse();
    env_logger::init();

    let config = opts.config();

    match gzstatic::run(&config) {
        Ok(stats) => {
            if opts.verbose {
                eprintln!(
                    "{PROGRAM_NAME}: {} file(s) compressed, {} already fresh",
                    stats.compressed, stats.fresh
                );
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            process::exit(1);
        }
    }
}
