use clap::{Parser, ValueEnum};
use kaidoku::prelude::*;
use std::fs;

/// A CLI-specific enum for clap to parse the output style.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    Pseudocode,
    Js,
}

/// A flow-definition structuring engine CLI: reads a decoded flow document
/// (JSON) and prints it as structured pseudocode.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the decoded flow document (JSON)
    flow_path: String,

    /// The output style to render
    #[arg(short, long, value_enum)]
    format: Option<FormatCli>,

    /// Dump the parse tree instead of rendered pseudocode
    #[arg(short, long)]
    tree: bool,
}

fn main() {
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read flow document '{}': {}",
            &cli.flow_path, e
        ))
    });

    let document: FlowDocument = serde_json::from_str(&raw)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse flow JSON: {}", e)));
    let flow = document
        .into_flow()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert document: {}", e)));

    let tree = Structurer::new(&flow)
        .structure()
        .unwrap_or_else(|e| exit_with_error(&format!("Structuring failed: {}", e)));

    if cli.tree {
        print!("{}", DisplayParseTree { root: &tree });
        return;
    }

    let output = match cli.format.unwrap_or(FormatCli::Pseudocode) {
        FormatCli::Pseudocode => PseudocodeFormatter.render(&flow, &tree),
        FormatCli::Js => JsFormatter.render(&flow, &tree),
    };
    print!("{}", output);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
