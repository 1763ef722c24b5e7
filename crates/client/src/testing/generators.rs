//! Test data generators using the fake crate.
//!
//! Provides configurable generators for realistic SharePoint payloads:
//! refiner facets, migration job logs, and thumbnail sets.

use fake::Fake;
use fake::faker::lorem::en::Word;
use rand::{Rng, RngExt};
use serde_json::{Value, json};

use super::braced_guid;

/// Generates search refiner payloads as the query endpoint returns them.
///
/// With `verbose` enabled, collections are wrapped in the OData-verbose
/// `{"results": [...]}` form and counts become strings, matching the
/// `odata=verbose` flavor.
#[derive(Debug, Clone)]
pub struct RefinerPayloadGenerator {
    refiner_count: usize,
    entries_per_refiner: usize,
    verbose: bool,
}

impl RefinerPayloadGenerator {
    pub fn new() -> Self {
        Self {
            refiner_count: 1,
            entries_per_refiner: 3,
            verbose: false,
        }
    }

    pub fn with_refiner_count(mut self, count: usize) -> Self {
        self.refiner_count = count;
        self
    }

    pub fn with_entries_per_refiner(mut self, count: usize) -> Self {
        self.entries_per_refiner = count;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Generates the refiner array, one object per refiner.
    pub fn generate(&self) -> Value {
        let mut rng = rand::rng();
        let refiners: Vec<Value> = (0..self.refiner_count)
            .map(|_| {
                let name: String = Word().fake();
                let entries: Vec<Value> = (0..self.entries_per_refiner)
                    .map(|_| self.entry(&mut rng))
                    .collect();
                let entries = self.wrap_collection(entries);
                json!({ "Name": name, "Entries": entries })
            })
            .collect();
        self.wrap_collection(refiners)
    }

    fn entry(&self, rng: &mut impl Rng) -> Value {
        let value: String = Word().fake();
        let count: i64 = rng.random_range(0..1_000_000);
        let count = if self.verbose {
            json!(count.to_string())
        } else {
            json!(count)
        };
        json!({
            "RefinementCount": count,
            "RefinementName": value,
            "RefinementToken": format!("\"ǂǂ{:x}\"", rng.random_range(0u64..u64::MAX)),
            "RefinementValue": value,
        })
    }

    fn wrap_collection(&self, items: Vec<Value>) -> Value {
        if self.verbose {
            json!({ "results": items })
        } else {
            Value::Array(items)
        }
    }
}

impl Default for RefinerPayloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates migration queue log lines in emission order, including the
/// repeated per-object lines a real job produces.
pub fn migration_job_logs(object_count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    let mut logs = Vec::with_capacity(object_count + 2);
    logs.push("JobStart".to_string());
    for _ in 0..object_count {
        let name: String = Word().fake();
        logs.push(format!(
            "ObjectProcessed File {name}.docx bytes={}",
            rng.random_range(1u64..10_000_000)
        ));
    }
    logs.push("JobEnd".to_string());
    logs
}

/// Generates a `CopyMigrationInfo` payload with a fresh job id and key.
pub fn copy_migration_info_payload(source_item_count: usize) -> Value {
    use base64::Engine as _;

    let mut rng = rand::rng();
    let mut key = [0u8; 32];
    rng.fill(&mut key[..]);
    let sources: Vec<Value> = (0..source_item_count)
        .map(|_| json!(braced_guid(uuid::Uuid::new_v4())))
        .collect();
    json!({
        "EncryptionKey": base64::engine::general_purpose::STANDARD.encode(key),
        "JobId": braced_guid(uuid::Uuid::new_v4()),
        "JobQueueUri": "https://example.queue.core.windows.net/spmtjob",
        "SourceListItemUniqueIds": { "results": sources },
    })
}
