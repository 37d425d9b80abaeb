use std::env;

use ragcheck_cli::{build_validator, init_tracing};
use ragcheck_core::config::ValidationConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query> [--runs N] [--top-k N]", args[0]);
        eprintln!("Example: {} 'What is ROS2?' --runs 10", args[0]);
        std::process::exit(1);
    }
    let query_text = &args[1];
    let mut runs = 10usize;
    let mut top_k: Option<usize> = None;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => match args.get(i + 1).and_then(|v| v.parse::<usize>().ok()) {
                Some(r) => {
                    runs = r;
                    i += 1;
                }
                None => {
                    eprintln!("Error: --runs requires a number");
                    std::process::exit(1);
                }
            },
            "--top-k" => match args.get(i + 1).and_then(|v| v.parse::<usize>().ok()) {
                Some(k) => {
                    top_k = Some(k);
                    i += 1;
                }
                None => {
                    eprintln!("Error: --top-k requires a number");
                    std::process::exit(1);
                }
            },
            _ => {}
        }
        i += 1;
    }

    let config = ValidationConfig::load()?;
    let validator = build_validator(config)?;

    let report = validator.run_stability_check(query_text, runs, top_k)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
