//! Terminal front end for gridpath.
//!
//! Run: cargo run -- [OPTIONS] [MAP_FILE]

use std::io::{self, Write};

use gridpath_lib::args::USAGE;
use gridpath_lib::{Command, parse_args, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&opts, &mut out) {
        let _ = out.flush();
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
