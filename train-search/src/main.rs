use std::io::{self, BufRead};

use tracing_subscriber::EnvFilter;

use train_search::console::{format_record, read_trimmed_line};
use train_search::search::{SearchConfig, find_trains};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = SearchConfig::default();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let departure = prompt(&mut input, "Enter the departure station id:");
    let arrival = prompt(&mut input, "Enter the arrival station id:");
    let criterion = prompt(
        &mut input,
        "Choose a sort criterion (price, arrival-time, departure-time):",
    );

    match find_trains(&departure, &arrival, &criterion, &config) {
        Ok(results) => {
            for record in &results {
                println!("{}", format_record(record));
            }
        }
        Err(e) => eprintln!("{e}"),
    }
}

/// Print a prompt and read the answer line.
///
/// A read failure is reported and treated as an empty answer, which the
/// validator then rejects; the shell never crashes on bad input.
fn prompt(input: &mut impl BufRead, text: &str) -> String {
    println!("{text}");
    match read_trimmed_line(input) {
        Ok(line) => line,
        Err(e) => {
            eprintln!("input error: {e}");
            String::new()
        }
    }
}
