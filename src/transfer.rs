use crate::store::WeekStore;
use crate::types::WeekRecord;
use anyhow::{Context, Result};
use futures::future::try_join_all;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Writes every stored record out as a pretty-printed JSON array, the
/// same shape import reads back.
pub async fn export_records(store: &WeekStore, out: &Path) -> Result<usize> {
    let records = store.load_all().await?;

    let json = serde_json::to_vec_pretty(&records).context("Encoding export")?;
    tokio::fs::write(out, json)
        .await
        .with_context(|| format!("Writing export file {}", out.display()))?;

    Ok(records.len())
}

/// Reads each file as a JSON array of week records and merges them into
/// the store, deduplicating by record id. A record whose id is already
/// stored is skipped; existing data wins over imports. A malformed file
/// fails the whole import before anything is written.
pub async fn import_records(store: &WeekStore, files: &[PathBuf]) -> Result<ImportSummary> {
    let reads = files.iter().map(|path| async move {
        let raw = tokio::fs::read(path)
            .await
            .with_context(|| format!("Reading import file {}", path.display()))?;

        let records: Vec<WeekRecord> = serde_json::from_slice(&raw)
            .with_context(|| format!("Import file {} is not a valid week list", path.display()))?;

        Ok::<_, anyhow::Error>(records)
    });

    let batches = try_join_all(reads).await?;

    let mut records = store.load_all().await?;
    let mut summary = ImportSummary::default();

    for incoming in batches.into_iter().flatten() {
        if records.iter().any(|existing| existing.id == incoming.id) {
            summary.skipped += 1;
            continue;
        }

        records.push(incoming);
        summary.imported += 1;
    }

    store.write_all(records).await?;

    info!(
        imported = summary.imported,
        skipped = summary.skipped,
        "Merged import files into store"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn create_test_record(id: &str, saved_secs: i64) -> WeekRecord {
        let mut slots = [0u32; 12];
        slots[0] = 90;

        WeekRecord {
            id: id.to_string(),
            saved_at: Utc.timestamp_opt(saved_secs, 0).unwrap(),
            buy_price: 95,
            slots,
        }
    }

    #[tokio::test]
    async fn test_export_then_import_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = WeekStore::new(dir.path().join("weeks.json"));
        let out = dir.path().join("export.json");

        store
            .save(create_test_record("week-1", 1700000000))
            .await
            .unwrap();
        store
            .save(create_test_record("week-2", 1700600000))
            .await
            .unwrap();

        let exported = export_records(&store, &out).await.unwrap();
        assert_eq!(exported, 2);

        let other = WeekStore::new(dir.path().join("other.json"));
        let summary = import_records(&other, &[out]).await.unwrap();

        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped, 0);
        assert_eq!(other.load_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_import_skips_already_stored_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = WeekStore::new(dir.path().join("weeks.json"));
        let file = dir.path().join("incoming.json");

        // The stored copy has a different buy price than the import
        let mut stored = create_test_record("week-1", 1700000000);
        stored.buy_price = 105;
        store.save(stored).await.unwrap();

        let incoming = vec![
            create_test_record("week-1", 1700000000),
            create_test_record("week-2", 1700600000),
        ];
        tokio::fs::write(&file, serde_json::to_vec(&incoming).unwrap())
            .await
            .unwrap();

        let summary = import_records(&store, &[file]).await.unwrap();
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.skipped, 1);

        // Existing data wins over the imported duplicate
        let loaded = store.get("week-1").await.unwrap();
        assert_eq!(loaded.buy_price, 105);
    }

    #[tokio::test]
    async fn test_duplicate_ids_across_import_files_kept_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = WeekStore::new(dir.path().join("weeks.json"));

        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        let records = vec![create_test_record("week-1", 1700000000)];
        let encoded = serde_json::to_vec(&records).unwrap();
        tokio::fs::write(&first, &encoded).await.unwrap();
        tokio::fs::write(&second, &encoded).await.unwrap();

        let summary = import_records(&store, &[first, second]).await.unwrap();
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.skipped, 1);
    }

    #[tokio::test]
    async fn test_malformed_import_file_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = WeekStore::new(dir.path().join("weeks.json"));
        let bad = dir.path().join("bad.json");

        store
            .save(create_test_record("week-1", 1700000000))
            .await
            .unwrap();
        tokio::fs::write(&bad, b"{ not a week list").await.unwrap();

        assert!(import_records(&store, &[bad]).await.is_err());
        assert_eq!(store.load_all().await.unwrap().len(), 1);
    }
}
