//! docwrap-gen - a code generator for typed document wrappers
//!
//! This binary reads a JSON GeneratorRequest from stdin and writes a JSON
//! GeneratorResponse to stdout. The invoking build writes the returned files
//! into its generated-sources area.

use docwrap_gen::metadata::GeneratorResponse;
use std::io::{self, Read, Write};

fn main() {
    if let Err(e) = run() {
        eprintln!("docwrap-gen: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Read the request envelope from stdin
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;

    let response = docwrap_gen::generate_from_json(&buf).unwrap_or_else(|e| GeneratorResponse {
        error: Some(e.to_string()),
        ..Default::default()
    });

    // Mirror diagnostics to stderr for the invoking build's log
    for diagnostic in &response.diagnostics {
        eprintln!("docwrap-gen: {}", diagnostic);
    }

    // Debug: print what we generated
    if std::env::var("DOCWRAP_DEBUG").is_ok() {
        eprintln!("[docwrap-gen] Generated {} files", response.files.len());
        for f in &response.files {
            eprintln!("[docwrap-gen]   - {}", f.name);
        }
        if let Some(ref err) = response.error {
            eprintln!("[docwrap-gen] Error: {}", err);
        }
    }

    // Write the response envelope to stdout
    let out = serde_json::to_string_pretty(&response)?;
    io::stdout().write_all(out.as_bytes())?;

    Ok(())
}
