use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use smsledger_classify::{BayesClassifier, Model};
use smsledger_core::Transaction;
use smsledger_parse::{ParseOutcome, RaiffeisenParser, TransactionReportParser};

mod inbox;
mod store;

#[derive(Parser, Debug)]
#[command(name = "smsledger", version, about = "Extract transactions from bank notification SMS")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an inbox export, classify descriptions, persist the results
    Analyze {
        /// JSON inbox export: [{"id", "address", "body"}]
        #[arg(long)]
        inbox: PathBuf,

        /// Classifier model JSON
        #[arg(long)]
        model: PathBuf,

        /// Sender address to filter on
        #[arg(long, default_value = "Raiffeisen")]
        address: String,

        /// CSV store; reused instead of re-parsing when already populated
        #[arg(long)]
        store: Option<PathBuf>,

        /// Re-parse the inbox even if the store is populated
        #[arg(long)]
        refresh: bool,

        /// Maximum number of messages to process
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },

    /// Parse a single raw message and print the record as JSON
    ParseOne {
        /// Classifier model JSON (optional; no category without it)
        #[arg(long)]
        model: Option<PathBuf>,

        /// Raw message text
        message: String,
    },

    /// Classify a merchant description against a model
    Classify {
        /// Classifier model JSON
        #[arg(long)]
        model: PathBuf,

        /// Description text, e.g. "SKYPE +44 870835190"
        description: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            inbox,
            model,
            address,
            store,
            refresh,
            limit,
        } => analyze(&inbox, &model, &address, store.as_deref(), refresh, limit),
        Command::ParseOne { model, message } => parse_one(model.as_deref(), &message),
        Command::Classify { model, description } => {
            let classifier = BayesClassifier::new(load_model(&model)?);
            println!("{}", classifier.classify(&description)?);
            Ok(())
        }
    }
}

fn load_model(path: &Path) -> Result<Model> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading model {}", path.display()))?;
    Ok(Model::from_json(&raw)?)
}

fn analyze(
    inbox_path: &Path,
    model_path: &Path,
    address: &str,
    store_path: Option<&Path>,
    refresh: bool,
    limit: usize,
) -> Result<()> {
    let parser = RaiffeisenParser::new(Some(BayesClassifier::new(load_model(model_path)?)));

    let mut transactions = Vec::new();
    if !refresh {
        if let Some(path) = store_path {
            transactions = store::load_transactions(path)?;
        }
    }

    if transactions.is_empty() {
        let messages = inbox::load_inbox(inbox_path)?;
        let matching = inbox::messages_for_address(&messages, address);
        info!("{} of {} inbox messages are from {address}", matching.len(), messages.len());

        for msg in matching.into_iter().take(limit) {
            match parser.parse(&msg.body) {
                Ok(ParseOutcome::Transaction(parsed)) => {
                    for warning in &parsed.warnings {
                        warn!("message {}: {warning}", msg.id);
                    }
                    let mut t = parsed.transaction;
                    t.message_id = Some(msg.id);
                    transactions.push(t);
                }
                Ok(ParseOutcome::NotRecognized) => {
                    info!("message {}: not a transaction notice, skipping", msg.id);
                }
                // One bad message never aborts the batch.
                Err(e) => warn!("message {}: {e}", msg.id),
            }
        }

        if let Some(path) = store_path {
            store::store_transactions(path, &transactions)?;
        }
    } else {
        info!("loaded {} transactions from store, skipping inbox", transactions.len());
    }

    println!("{} transactions", transactions.len());
    for t in &transactions {
        println!("{}", format_line(t));
    }
    Ok(())
}

fn parse_one(model_path: Option<&Path>, message: &str) -> Result<()> {
    let classifier = match model_path {
        Some(path) => Some(BayesClassifier::new(load_model(path)?)),
        None => None,
    };
    let parser = RaiffeisenParser::new(classifier);

    match parser.parse(message)? {
        ParseOutcome::Transaction(parsed) => {
            println!("{}", serde_json::to_string_pretty(&parsed.transaction)?);
            for warning in &parsed.warnings {
                eprintln!("warning: {warning}");
            }
        }
        ParseOutcome::NotRecognized => println!("not a recognized transaction message"),
    }
    Ok(())
}

fn format_line(t: &Transaction) -> String {
    let kind = if t.is_put { "PUT " } else { "CALL" };
    let mut line = format!(
        "[{kind}] card *{} | {} {} | {}",
        t.card_number.as_deref().unwrap_or("????"),
        t.amount
            .map(|a| a.to_string())
            .unwrap_or_else(|| "?".to_string()),
        t.currency.as_deref().unwrap_or("???"),
        t.date
            .map(|d| d.format("%d.%m.%Y").to_string())
            .unwrap_or_else(|| "??.??.????".to_string()),
    );
    if let Some(description) = &t.description {
        line.push_str(" | ");
        line.push_str(description);
        if let Some(category) = &t.category {
            line.push_str(" -> ");
            line.push_str(category);
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_line_full() {
        let mut t = Transaction::new(false);
        t.card_number = Some("6787".to_string());
        t.amount = Some(dec!(5.00));
        t.currency = Some("EUR".to_string());
        t.date = NaiveDate::from_ymd_opt(2013, 7, 16);
        t.description = Some("SKYPE +44 870835190".to_string());
        t.category = Some("communication".to_string());
        assert_eq!(
            format_line(&t),
            "[CALL] card *6787 | 5.00 EUR | 16.07.2013 | SKYPE +44 870835190 -> communication"
        );
    }

    #[test]
    fn test_format_line_sparse_put() {
        let t = Transaction::new(true);
        assert_eq!(format_line(&t), "[PUT ] card *???? | ? ??? | ??.??.????");
    }
}
