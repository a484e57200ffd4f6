//! slidecrew command-line entry point.
//!
//! Generates a presentation deck for a topic and prints it to standard
//! output as JSON with 2-space indentation, after the crew's progress lines.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` — log filter for diagnostics (default: "info")
//!
//! # Usage
//!
//! ```bash
//! slidecrew "Cloud Migration" "data residency"
//! ```

use std::env;
use std::process;

use slidecrew::utilities::errors::CliError;
use slidecrew::utilities::logger::Logger;
use slidecrew::PresentationCrew;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "slidecrew".to_string());
    let topic = match args.next() {
        Some(topic) => topic,
        None => {
            println!("{}", CliError::MissingTopic { program });
            process::exit(1);
        }
    };
    let requirements = args.next().unwrap_or_default();

    let crew = PresentationCrew::new().with_logger(Logger::new(true));
    let deck = crew.generate(&topic, &requirements);

    match serde_json::to_string_pretty(&deck) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("failed to serialize deck: {}", e);
            process::exit(1);
        }
    }
}
