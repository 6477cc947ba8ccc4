use std::env;
use std::fs;
use std::io::{self, Read};

use colschema_core::{infer_schema_with_config, infer_table_schema_with_config, InferenceConfig};
use serde_json::Value;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_cli()
}

// Extract the main logic into a separate function so we can call it from tests
fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut config = InferenceConfig::default();
    let mut input_file = None;
    let mut ndjson = false;
    let mut fields_output = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--ndjson" => {
                ndjson = true;
            }
            "--fields" => {
                fields_output = true;
            }
            "--debug" => {
                config.debug = true;
            }
            _ => {
                if !args[i].starts_with('-') && input_file.is_none() {
                    input_file = Some(args[i].clone());
                }
            }
        }
        i += 1;
    }

    // Read input from file or stdin
    let input = if let Some(path) = input_file {
        fs::read_to_string(path)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let data = parse_input(&input, ndjson)?;
    let record_count = match &data {
        Value::Array(items) => items.len(),
        _ => 1,
    };

    if fields_output {
        let table = infer_table_schema_with_config(&data, &config)
            .map_err(|e| format!("Schema inference failed: {}", e))?;
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        let schema = infer_schema_with_config(&data, &config)
            .map_err(|e| format!("Schema inference failed: {}", e))?;
        println!("{}", serde_json::to_string_pretty(&schema)?);
    }

    eprintln!("Processed {} record(s)", record_count);
    Ok(())
}

/// Turn the raw input text into driver input: NDJSON keeps each line as a
/// serialized record for the core to deserialize, regular mode parses the
/// whole input as one JSON document.
fn parse_input(input: &str, ndjson: bool) -> Result<Value, Box<dyn std::error::Error>> {
    if ndjson {
        let records = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| Value::String(line.to_string()))
            .collect();
        Ok(Value::Array(records))
    } else {
        serde_json::from_str(input).map_err(|e| format!("Invalid JSON input: {}", e).into())
    }
}

fn print_help() {
    println!("colschema-cli - columnar table schema inference tool");
    println!();
    println!("USAGE:");
    println!("    colschema-cli [OPTIONS] [FILE]");
    println!();
    println!("ARGS:");
    println!("    <FILE>    Input JSON file (reads from stdin if not provided)");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help    Print this help message");
    println!("    --ndjson      Treat input as newline-delimited records");
    println!("    --fields      Output the registration field list instead of the mapping");
    println!("    --debug       Print per-field classification details to stderr");
    println!();
    println!("EXAMPLES:");
    println!("    colschema-cli sample.json");
    println!("    echo '{{\"name\": \"test\"}}' | colschema-cli");
    println!("    colschema-cli --ndjson --fields rows.jsonl");
}
