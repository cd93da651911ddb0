//! Example: Analyze one text
//!
//! Usage:
//!   cargo run --example analyze_text -- [--config FILE] [--json] [TEXT...]
//!
//! Reads the text from stdin when none is given on the command line.

use finsent::features::phrases::extract_key_phrases;
use finsent::{assess_consensus, AnalysisConfig, Method, SentimentAnalyzer};
use std::env;
use std::io::{self, Read};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut config_path: Option<String> = None;
    let mut words: Vec<String> = Vec::new();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--config" => {
                let v = args.first().ok_or("--config requires a path")?.clone();
                args.remove(0);
                config_path = Some(v);
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: analyze_text [--config FILE] [--json] [TEXT...]\n\
                     \n\
                     --config FILE  JSON analysis configuration\n\
                     --json         Emit the full result as JSON\n"
                );
                return Ok(());
            }
            _ => words.push(a),
        }
    }

    let text = if words.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        words.join(" ")
    };

    let config = match config_path {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    let analyzer = SentimentAnalyzer::new(config)?;

    let result = analyzer.analyze(&text);
    let assessment = assess_consensus(&result, analyzer.config());

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "Sentiment: {} (score={:.3}, confidence={:.3}, method={})",
        result.label, result.score, result.confidence, result.method
    );
    for method in Method::SCORERS {
        if let Some(r) = result.method_result(method) {
            println!(
                "  {:<9} score={:>7} conf={:.3} label={}",
                method.as_str(),
                r.score.map(|s| format!("{:.3}", s)).unwrap_or("-".to_string()),
                r.confidence,
                r.label
            );
        }
    }
    println!(
        "Votes: positive={:.2} negative={:.2} neutral={:.2}",
        result.votes.positive, result.votes.negative, result.votes.neutral
    );
    println!(
        "Agreement: {:.2} across {} methods",
        assessment.agreement, assessment.active_methods
    );
    if !assessment.flags.is_empty() {
        println!("Flags: {:?}", assessment.flags);
    }

    let phrases = extract_key_phrases(&text, 5);
    if !phrases.is_empty() {
        println!("Key phrases: {}", phrases.join(", "));
    }

    Ok(())
}
