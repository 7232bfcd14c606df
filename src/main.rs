use std::env;
use std::fs::File;
use std::io::BufReader;

use jmdict_reader::{parse, Entry};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-jmdict-xml-file>", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    println!("Parsing JMdict file: {}", path);
    println!("{}", "=".repeat(60));

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("ERROR: Cannot open {}: {}", path, e);
            std::process::exit(1);
        }
    };

    match parse(BufReader::new(file)) {
        Ok(dictionary) => {
            println!("\nSUCCESS! Parsing completed.");
            println!("{}", "=".repeat(60));
            println!("\nStatistics:");
            println!("  Total entries: {}", dictionary.entries.len());

            println!("\nSample Entries (first 10):");
            for (i, entry) in dictionary.entries.iter().take(10).enumerate() {
                println!("  {}. [{}] {}", i + 1, entry.sequence, summarize(entry));
            }

            if dictionary.entries.len() > 10 {
                println!("  ... and {} more", dictionary.entries.len() - 10);
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to parse JMdict file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}

/// One-line summary of an entry: headword, reading, first gloss.
fn summarize(entry: &Entry) -> String {
    let headword = entry
        .kanji
        .first()
        .map(|k| k.expression.as_str())
        .or_else(|| entry.readings.first().map(|r| r.reading.as_str()))
        .unwrap_or("<no headword>");
    let reading = entry
        .readings
        .first()
        .map(|r| r.reading.as_str())
        .unwrap_or("");
    let gloss = entry
        .senses
        .first()
        .and_then(|s| s.glosses.first())
        .map(|g| g.content.as_str())
        .unwrap_or("");
    format!("{} ({}) - {}", headword, reading, gloss)
}
