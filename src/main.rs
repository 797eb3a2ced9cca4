use anyhow::{Context, Result};
use clap::Parser;
use config::{Command, Config};
use logs::init_logs;
use store::WeekStore;
use tracing::{info, warn};
use types::WeekRecord;
use utils::new_record_id;

mod config;
mod logs;
mod models;
mod slots;
mod store;
mod transfer;
mod types;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logs();

    let config = Config::parse();
    let store = WeekStore::new(&config.data_path);

    match config.command {
        Command::Predict {
            slots,
            buy,
            id,
            json,
        } => predict_command(&store, slots, buy, id, json).await,
        Command::Save { slots, buy, id } => save_command(&store, slots, buy, id).await,
        Command::List { json } => list_command(&store, json).await,
        Command::Delete { id } => delete_command(&store, id).await,
        Command::Export { out } => {
            let count = transfer::export_records(&store, &out).await?;
            info!("Exported {} weeks to {}", count, out.display());
            Ok(())
        }
        Command::Import { files } => {
            let summary = transfer::import_records(&store, &files).await?;
            println!(
                "Imported {} weeks, skipped {} already stored",
                summary.imported, summary.skipped
            );
            Ok(())
        }
    }
}

async fn predict_command(
    store: &WeekStore,
    slots: Option<String>,
    buy: Option<String>,
    id: Option<String>,
    json: bool,
) -> Result<()> {
    let report = match id {
        Some(id) => {
            let record = store.get(&id).await?;
            models::predict_week(&record.slots, record.buy_price)
        }
        None => {
            let raw = slots.context("Pass --slots or --id to predict from")?;
            models::predict(&split_slots(&raw), buy.as_deref().unwrap_or(""))
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}

async fn save_command(
    store: &WeekStore,
    slots_raw: String,
    buy: Option<String>,
    id: Option<String>,
) -> Result<()> {
    let week_slots = slots::normalize_week(&split_slots(&slots_raw));
    let buy_price = slots::normalize_price(buy.as_deref().unwrap_or(""));

    let record = WeekRecord {
        id: id.unwrap_or_else(new_record_id),
        saved_at: chrono::Utc::now(),
        buy_price,
        slots: week_slots,
    };

    let id = record.id.clone();
    store.save(record).await?;

    info!("Saved week {} to {}", id, store.path().display());
    println!("{id}");

    Ok(())
}

async fn list_command(store: &WeekStore, json: bool) -> Result<()> {
    let records = store.load_all().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No weeks saved yet");
        return Ok(());
    }

    for record in records {
        let report = models::predict_week(&record.slots, record.buy_price);
        let best = report
            .best_price
            .map(|price| price.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        println!(
            "{}  {}  best {}  profit {}  {}",
            record.id,
            record.saved_at.format("%Y-%m-%d"),
            best,
            report.profit_display(),
            report.pattern.name,
        );
    }

    Ok(())
}

async fn delete_command(store: &WeekStore, id: String) -> Result<()> {
    let removed = store.delete(&id).await?;
    info!(
        "Deleted week {} saved {}",
        removed.id,
        removed.saved_at.format("%Y-%m-%d")
    );

    Ok(())
}

/// Splits the `--slots` value into raw per-slot text. The normalizer
/// handles anything odd inside a slot; only the count is checked here.
fn split_slots(raw: &str) -> Vec<String> {
    let values: Vec<String> = raw.split(',').map(|value| value.trim().to_string()).collect();

    if values.len() > slots::SLOTS_PER_WEEK {
        warn!(
            "A week has {} slots, ignoring {} extra values",
            slots::SLOTS_PER_WEEK,
            values.len() - slots::SLOTS_PER_WEEK
        );
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_slots_keeps_empty_positions() {
        let values = split_slots("90,,110");

        assert_eq!(values, vec!["90", "", "110"]);
    }

    #[test]
    fn test_split_slots_trims_whitespace() {
        let values = split_slots(" 90 , 85 ,110");

        assert_eq!(values, vec!["90", "85", "110"]);
    }
}
