//! Food Truck CLI
//!
//! Runs the interactive inventory and sales menus, or replays a CSV of
//! recount/sale commands.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- replay commands.csv > receipts.csv
//! cargo run -- replay commands.csv --inventory > inventory.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use food_truck_pos::{Replay, Result, Terminal, TruckError};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut terminal = Terminal::new(stdin.lock(), stdout.lock());
            terminal.run()
        }
        Some("replay") => {
            let input_path = args.get(2).ok_or(TruckError::MissingArgument)?;
            let file = File::open(input_path)?;
            let reader = BufReader::new(file);

            let mut replay = Replay::new();
            replay.process_csv(reader)?;

            let stdout = io::stdout();
            let handle = stdout.lock();
            if args.iter().skip(3).any(|a| a == "--inventory") {
                replay.write_inventory(handle)
            } else {
                replay.write_receipts(handle)
            }
        }
        Some(other) => Err(TruckError::UnknownCommand(other.to_string())),
    }
}
