//! Journal controller: owns the in-memory records and brand list
//!
//! Every mutation is validated first, applied in memory, then persisted
//! through the `RecordStore`. Persistence failures are logged by the store
//! and never undo the in-memory change.

use crate::services::aggregator::Aggregator;
use crate::services::brands::{self, MoveDirection};
use crate::services::record_store::RecordStore;
use crate::services::storage::KeyValueStore;
use crate::types::{
    BrandConfig, RecordDraft, Result, StatsReport, TeaRecord, TeatrackError,
};
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

pub struct Journal<S: KeyValueStore> {
    store: RecordStore<S>,
    records: Vec<TeaRecord>,
    brands: Vec<BrandConfig>,
}

impl<S: KeyValueStore> Journal<S> {
    pub fn open(store: S) -> Self {
        let store = RecordStore::new(store);
        let records = store.load_records();
        let brands = store.load_brand_config();
        debug!(records = records.len(), brands = brands.len(), "journal opened");
        Self {
            store,
            records,
            brands,
        }
    }

    /// Records in storage order, newest insertion first
    pub fn records(&self) -> &[TeaRecord] {
        &self.records
    }

    pub fn brands(&self) -> &[BrandConfig] {
        &self.brands
    }

    pub fn get(&self, id: &str) -> Option<&TeaRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn add_record(&mut self, draft: RecordDraft) -> Result<&TeaRecord> {
        let draft = validate(draft)?;
        let record = TeaRecord {
            id: Uuid::new_v4().simple().to_string(),
            brand: draft.brand,
            name: draft.name,
            price: draft.price,
            date: draft.date,
            sugar: draft.sugar,
            ice: draft.ice,
            rating: draft.rating,
            note: draft.note,
            created_at: Utc::now().timestamp_millis(),
        };
        debug!(id = %record.id, brand = %record.brand, "adding record");

        let brand_added = brands::ensure_brand(&mut self.brands, &record.brand);
        self.records.insert(0, record);
        self.persist_records();
        if brand_added {
            self.persist_brands();
        }
        Ok(&self.records[0])
    }

    /// Replace the editable fields of `id`, keeping its id and creation time
    pub fn update_record(&mut self, id: &str, draft: RecordDraft) -> Result<&TeaRecord> {
        let idx = self.index_of(id)?;
        let draft = validate(draft)?;

        let brand_added = brands::ensure_brand(&mut self.brands, &draft.brand);
        let record = &mut self.records[idx];
        record.brand = draft.brand;
        record.name = draft.name;
        record.price = draft.price;
        record.date = draft.date;
        record.sugar = draft.sugar;
        record.ice = draft.ice;
        record.rating = draft.rating;
        record.note = draft.note;
        debug!(id, "updated record");

        self.persist_records();
        if brand_added {
            self.persist_brands();
        }
        Ok(&self.records[idx])
    }

    pub fn delete_record(&mut self, id: &str) -> Result<TeaRecord> {
        let idx = self.index_of(id)?;
        let removed = self.records.remove(idx);
        debug!(id, "deleted record");
        self.persist_records();
        Ok(removed)
    }

    /// Full id for an exact id or a unique id prefix
    pub fn resolve_id(&self, prefix: &str) -> Result<String> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(TeatrackError::Validation("record id is empty".into()));
        }
        if let Some(record) = self.get(prefix) {
            return Ok(record.id.clone());
        }

        let found: Vec<&str> = self
            .records
            .iter()
            .map(|r| r.id.as_str())
            .filter(|id| id.starts_with(prefix))
            .collect();

        match found.as_slice() {
            [id] => Ok(id.to_string()),
            [] => Err(TeatrackError::NotFound(format!("record {}", prefix))),
            _ => Err(TeatrackError::Validation(format!(
                "ambiguous record id '{}' matches {} records",
                prefix,
                found.len()
            ))),
        }
    }

    pub fn search(&self, term: &str) -> Vec<&TeaRecord> {
        Aggregator::search(&self.records, term)
    }

    pub fn report(&self, top_n: usize) -> StatsReport {
        Aggregator::report(&self.records, top_n)
    }

    // ========== brand list ==========

    pub fn add_brand(&mut self, name: &str) -> Result<String> {
        let name = brands::add_brand(&mut self.brands, name)?;
        self.persist_brands();
        Ok(name)
    }

    pub fn toggle_brand(&mut self, name: &str) -> Result<bool> {
        let visible = brands::toggle_visibility(&mut self.brands, name)?;
        self.persist_brands();
        Ok(visible)
    }

    pub fn move_brand(&mut self, name: &str, direction: MoveDirection) -> Result<()> {
        brands::move_brand(&mut self.brands, name, direction)?;
        self.persist_brands();
        Ok(())
    }

    pub fn reset_brands(&mut self) {
        self.brands = brands::default_brands();
        self.persist_brands();
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| TeatrackError::NotFound(format!("record {}", id)))
    }

    fn persist_records(&mut self) {
        self.store.save_records(&self.records);
    }

    fn persist_brands(&mut self) {
        self.store.save_brand_config(&self.brands);
    }
}

/// Trim text fields and check ranges. A blank note becomes `None`.
fn validate(draft: RecordDraft) -> Result<RecordDraft> {
    let brand = draft.brand.trim().to_string();
    if brand.is_empty() {
        return Err(TeatrackError::Validation("brand is required".into()));
    }
    let name = draft.name.trim().to_string();
    if name.is_empty() {
        return Err(TeatrackError::Validation("drink name is required".into()));
    }
    if !draft.price.is_finite() || draft.price < 0.0 {
        return Err(TeatrackError::Validation(format!(
            "price must be a non-negative number, got {}",
            draft.price
        )));
    }
    if !(1..=5).contains(&draft.rating) {
        return Err(TeatrackError::Validation(format!(
            "rating must be between 1 and 5, got {}",
            draft.rating
        )));
    }
    let note = draft
        .note
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    Ok(RecordDraft {
        brand,
        name,
        note,
        ..draft
    })
}
