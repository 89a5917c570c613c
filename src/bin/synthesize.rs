// Developer driver for the synthesis engine: loads captured signals from
// disk, runs one synthesis call, prints a summary and optionally dumps
// the diagnostic record as JSON. Stands in for the presentation layer.

use anyhow::{Context, Result};
use espejo_lib::models::{
    AuthoredItem, DiagnosticLevel, EconomicSignal, SignalPayload, SynthesisRequest,
};
use espejo_lib::services::config_store::{ConfigStore, EngineConfig};
use espejo_lib::services::language_model::LanguageModel;
use espejo_lib::services::synthesis::synthesize;
use espejo_lib::services::text_processor::normalize_punctuation;

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

fn load_config(args: &[String]) -> Result<EngineConfig> {
    if let Some(path) = parse_arg_value(args, "--config") {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("read config file {}", path))?;
        return serde_json::from_str(&raw).with_context(|| format!("parse config file {}", path));
    }
    if let Some(dir) = ConfigStore::default_config_dir() {
        if let Ok(config) = ConfigStore::new(dir).load() {
            return Ok(config);
        }
    }
    Ok(EngineConfig::default())
}

fn main() -> Result<()> {
    espejo_lib::init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || has_flag(&args, "--help") {
        eprintln!(
            "Usage:\n  cargo run --bin synthesize -- [--text <path>] [--posts <path.json>] \
             [--rate <value>] [--keyword <word>] [--level <signal|discourse|provenance>] \
             [--config <path>] [--out <json_path>]\n\nNotes:\n  \
             - --posts expects a JSON array of authored items \
             (text, verified, followerCount, sourceLabel).\n  \
             - With no --out the record is printed to stdout as pretty JSON."
        );
        return Ok(());
    }

    let config = load_config(&args)?;
    let model = LanguageModel::global();

    let linguistic_signal = match parse_arg_value(&args, "--text") {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("read text file {}", path))?;
            Some(SignalPayload::Text(normalize_punctuation(&raw)))
        }
        None => None,
    };

    let authored_items: Vec<AuthoredItem> = match parse_arg_value(&args, "--posts") {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("read posts file {}", path))?;
            serde_json::from_str(&raw).with_context(|| format!("parse posts file {}", path))?
        }
        None => Vec::new(),
    };

    let economic_signal = parse_arg_value(&args, "--rate")
        .map(|raw| raw.parse::<f64>().with_context(|| format!("parse rate '{}'", raw)))
        .transpose()?
        .map(EconomicSignal::Rate);

    let level = parse_arg_value(&args, "--level")
        .map(|raw| DiagnosticLevel::from_str(&raw))
        .unwrap_or_default();

    let request = SynthesisRequest {
        linguistic_signal,
        economic_signal,
        authored_items,
        intent_keyword: parse_arg_value(&args, "--keyword"),
        level,
    };

    let record = synthesize(&request, model, &config);

    println!("Record: {} ({:?})", record.request_id, record.level);
    if let Some(entropy) = record.linguistic_entropy {
        println!("Linguistic entropy: {:.4} bits", entropy);
    }
    if let Some(energy) = record.economic_energy {
        println!("Economic energy: {:.4}", energy);
    }
    if let Some(ref counts) = record.split_counts {
        println!(
            "Split: {} systemic / {} organic",
            counts.systemic, counts.organic
        );
    }
    if let Some(ref contamination) = record.contamination {
        match contamination.percent() {
            Some(percent) => println!("Contamination index: {:.1}%", percent),
            None => println!("Contamination index: no data"),
        }
    }
    for (label, analysis) in [
        ("overall", record.overall.as_ref()),
        ("systemic", record.systemic.as_ref()),
        ("organic", record.organic.as_ref()),
    ] {
        if let Some(analysis) = analysis {
            println!(
                "[{}] items={} sentiment +{:.1}/-{:.1}/~{:.1} readability={:.1}",
                label,
                analysis.item_count,
                analysis.sentiment.positive,
                analysis.sentiment.negative,
                analysis.sentiment.neutral,
                analysis.readability
            );
            for topic in &analysis.topics {
                println!("  topic {}: {}", topic.index, topic.top_terms.join(", "));
            }
            for entity in &analysis.entities {
                println!("  entity {:?} {} x{}", entity.kind, entity.text, entity.count);
            }
        }
    }

    let json = serde_json::to_string_pretty(&record)?;
    match parse_arg_value(&args, "--out") {
        Some(out_path) => {
            std::fs::write(&out_path, json).with_context(|| format!("write {}", out_path))?;
            println!("Wrote JSON: {}", out_path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
