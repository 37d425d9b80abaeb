use std::env;
use std::time::Instant;

use serde_json::json;

use ragcheck_cli::{build_validator, init_tracing};
use ragcheck_core::config::ValidationConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query> [--top-k N]", args[0]);
        eprintln!("Example: {} 'What is ROS2?' --top-k 3", args[0]);
        std::process::exit(1);
    }
    let query_text = &args[1];
    let mut top_k: Option<usize> = None;
    let mut i = 2;
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
        }
        i += 1;
    }

    let config = ValidationConfig::load()?;
    let validator = build_validator(config)?;

    let start = Instant::now();
    match validator.execute(query_text, top_k) {
        Ok(result) => {
            let validation = validator.evaluate(&result);
            let out = json!({
                "query_result": result,
                "validation_result": validation,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(())
        }
        Err(e) => {
            let out = json!({
                "error": e.to_string(),
                "response_time_ms": start.elapsed().as_secs_f64() * 1000.0,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            std::process::exit(1);
        }
    }
}
