use std::env;

use ragcheck_cli::{build_validator, init_tracing};
use ragcheck_core::config::ValidationConfig;
use ragcheck_core::queries::predefined_queries;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Positional args are queries; with none given, run the predefined set.
    let mut queries: Vec<String> = Vec::new();
    let mut top_k: Option<usize> = None;
    let args: Vec<String> = env::args().skip(1).collect();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--top-k" {
            match args.get(i + 1).and_then(|v| v.parse::<usize>().ok()) {
                Some(k) => {
                    top_k = Some(k);
                    i += 1;
                }
                None => {
                    eprintln!("Error: --top-k requires a number");
                    std::process::exit(1);
                }
            }
        } else {
            queries.push(args[i].clone());
        }
        i += 1;
    }
    if queries.is_empty() {
        queries = predefined_queries();
    }

    let config = ValidationConfig::load()?;
    let validator = build_validator(config)?;

    let report = validator.run_batch(&queries, top_k)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.completed_queries < report.total_queries {
        eprintln!(
            "warning: {} of {} queries failed",
            report.total_queries - report.completed_queries,
            report.total_queries
        );
    }
    Ok(())
}
