//! Export command: write a catalog snapshot to the exports directory

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;

use crate::catalog::Catalog;
use crate::data_paths::DataPaths;

#[derive(Args, Clone)]
pub struct ExportArgs {
    /// Name for the exported snapshot
    pub name: String,

    /// Output format: json or csv
    #[arg(long, default_value = "json")]
    pub format: String,
}

/// Sidecar written next to every exported snapshot
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub item_count: usize,
    pub seed: Option<u64>,
    pub format: String,
}

pub struct ExportCommand {
    args: ExportArgs,
}

impl ExportCommand {
    pub fn new(args: ExportArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, seed: Option<u64>, data_paths: DataPaths) -> Result<()> {
        let catalog = super::build_catalog(seed);

        let export_dir = data_paths.exports().join(&self.args.name);
        fs::create_dir_all(&export_dir)?;

        let catalog_path = match self.args.format.as_str() {
            "json" => {
                let path = export_dir.join("catalog.json");
                let json = serde_json::to_string_pretty(&catalog)?;
                let mut file = File::create(&path)?;
                file.write_all(json.as_bytes())?;
                path
            }
            "csv" => {
                let path = export_dir.join("catalog.csv");
                let mut writer = csv::Writer::from_path(&path)?;
                for item in catalog.items() {
                    writer.serialize(item)?;
                }
                writer.flush()?;
                path
            }
            other => return Err(anyhow!("Invalid format '{}'. Use 'json' or 'csv'", other)),
        };

        let metadata = ExportMetadata {
            name: self.args.name.clone(),
            created_at: Utc::now(),
            item_count: catalog.len(),
            seed,
            format: self.args.format.clone(),
        };
        let metadata_path = export_dir.join("metadata.json");
        let metadata_json = serde_json::to_string_pretty(&metadata)?;
        let mut file = File::create(&metadata_path)?;
        file.write_all(metadata_json.as_bytes())?;

        tracing::info!(
            name = %self.args.name,
            items = catalog.len(),
            path = %catalog_path.display(),
            "Catalog exported"
        );

        println!(
            "{}",
            format!(
                "✅ Exported snapshot '{}' with {} items",
                self.args.name,
                catalog.len()
            )
            .bright_green()
        );
        println!(
            "{}",
            format!("📁 Saved to: {}", export_dir.display()).bright_blue()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;
    use tempfile::TempDir;

    #[test]
    fn test_json_export_roundtrips_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let data_paths = DataPaths::new(temp_dir.path());
        data_paths.ensure_directories().unwrap();

        let command = ExportCommand::new(ExportArgs {
            name: "snapshot".to_string(),
            format: "json".to_string(),
        });
        command.execute(Some(99), data_paths.clone()).unwrap();

        let export_dir = data_paths.exports().join("snapshot");
        let json = fs::read_to_string(export_dir.join("catalog.json")).unwrap();
        let restored: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, Catalog::seeded(99));

        let metadata_json = fs::read_to_string(export_dir.join("metadata.json")).unwrap();
        let metadata: ExportMetadata = serde_json::from_str(&metadata_json).unwrap();
        assert_eq!(metadata.item_count, 200);
        assert_eq!(metadata.seed, Some(99));
    }

    #[test]
    fn test_csv_export_writes_one_row_per_item() {
        let temp_dir = TempDir::new().unwrap();
        let data_paths = DataPaths::new(temp_dir.path());
        data_paths.ensure_directories().unwrap();

        let command = ExportCommand::new(ExportArgs {
            name: "rows".to_string(),
            format: "csv".to_string(),
        });
        command.execute(Some(7), data_paths.clone()).unwrap();

        let csv_path = data_paths.exports().join("rows").join("catalog.csv");
        let contents = fs::read_to_string(csv_path).unwrap();
        // header + 200 item rows
        assert_eq!(contents.lines().count(), 201);
    }

    #[test]
    fn test_csv_export_roundtrips_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let data_paths = DataPaths::new(temp_dir.path());
        data_paths.ensure_directories().unwrap();

        let command = ExportCommand::new(ExportArgs {
            name: "roundtrip".to_string(),
            format: "csv".to_string(),
        });
        command.execute(Some(7), data_paths.clone()).unwrap();

        let csv_path = data_paths.exports().join("roundtrip").join("catalog.csv");
        let mut reader = csv::Reader::from_path(csv_path).unwrap();
        let restored: Vec<CatalogItem> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(restored, Catalog::seeded(7).items());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let data_paths = DataPaths::new(temp_dir.path());

        let command = ExportCommand::new(ExportArgs {
            name: "bad".to_string(),
            format: "xml".to_string(),
        });
        assert!(command.execute(None, data_paths).is_err());
    }
}
