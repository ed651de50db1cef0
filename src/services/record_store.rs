//! Record and brand list persistence
//!
//! Loads never fail: missing or unreadable blobs fall back to an empty
//! record collection or the default brand list. Saves are best-effort and
//! only log on failure.

use crate::services::brands::default_brands;
use crate::services::storage::KeyValueStore;
use crate::types::{BrandConfig, Result, TeaRecord, TeatrackError, BRANDS_KEY, RECORDS_KEY};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Brand list as it may appear on disk.
///
/// Tried in declaration order, so `[]` decodes as `Current` and yields an
/// empty list rather than the defaults.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredBrandList {
    Current(Vec<BrandConfig>),
    /// Plain names written before the visibility flag existed
    Legacy(Vec<String>),
}

impl StoredBrandList {
    fn into_current(self) -> Vec<BrandConfig> {
        match self {
            Self::Current(brands) => brands,
            Self::Legacy(names) => names.into_iter().map(BrandConfig::new).collect(),
        }
    }
}

pub struct RecordStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn into_store(self) -> S {
        self.store
    }

    pub fn load_records(&self) -> Vec<TeaRecord> {
        match self.read_json::<Vec<TeaRecord>>(RECORDS_KEY) {
            Ok(Some(records)) => {
                debug!(count = records.len(), "loaded records");
                records
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to load records, starting empty");
                Vec::new()
            }
        }
    }

    pub fn save_records(&mut self, records: &[TeaRecord]) {
        if let Err(e) = self.write_json(RECORDS_KEY, records) {
            warn!(error = %e, "failed to save records");
        }
    }

    pub fn load_brand_config(&self) -> Vec<BrandConfig> {
        match self.read_json::<StoredBrandList>(BRANDS_KEY) {
            Ok(Some(stored)) => {
                if matches!(stored, StoredBrandList::Legacy(_)) {
                    debug!("upgrading legacy brand list");
                }
                stored.into_current()
            }
            Ok(None) => default_brands(),
            Err(e) => {
                warn!(error = %e, "failed to load brand list, using defaults");
                default_brands()
            }
        }
    }

    pub fn save_brand_config(&mut self, brands: &[BrandConfig]) {
        if let Err(e) = self.write_json(BRANDS_KEY, brands) {
            warn!(error = %e, "failed to save brand list");
        }
    }

    fn read_json<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        let Some(content) = self.store.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| TeatrackError::Parse(format!("{}: {}", key, e)))
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let content = serde_json::to_string(value)
            .map_err(|e| TeatrackError::Storage(format!("Serialization failed: {}", e)))?;
        self.store.set(key, &content)?;
        debug!(blob = key, bytes = content.len(), "saved blob");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::{FileStore, MemoryStore};
    use crate::types::{IceLevel, SugarLevel};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn make_record(id: &str) -> TeaRecord {
        TeaRecord {
            id: id.to_string(),
            brand: "茶百道".to_string(),
            name: "杨枝甘露".to_string(),
            price: 15.0,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            sugar: SugarLevel::Five,
            ice: IceLevel::Less,
            rating: 4,
            note: Some("好喝".to_string()),
            created_at: 1_714_521_600_000,
        }
    }

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(TeatrackError::Storage("read-only".into()))
        }
        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(TeatrackError::Storage("read-only".into()))
        }
    }

    // ========== records ==========

    #[test]
    fn test_missing_records_load_empty() {
        let store = RecordStore::new(MemoryStore::new());
        assert!(store.load_records().is_empty());
    }

    #[test]
    fn test_corrupt_records_load_empty() {
        let store = RecordStore::new(MemoryStore::with_blob(RECORDS_KEY, "not valid json {{{"));
        assert!(store.load_records().is_empty());
    }

    #[test]
    fn test_records_save_then_load() {
        let mut store = RecordStore::new(MemoryStore::new());
        let records = vec![make_record("a"), make_record("b")];
        store.save_records(&records);

        assert_eq!(store.load_records(), records);
    }

    #[test]
    fn test_records_persist_through_file_store() {
        let temp = TempDir::new().unwrap();
        let records = vec![make_record("x")];
        {
            let mut store = RecordStore::new(FileStore::new(temp.path().to_path_buf()).unwrap());
            store.save_records(&records);
        }

        let reopened = RecordStore::new(FileStore::new(temp.path().to_path_buf()).unwrap());
        assert_eq!(reopened.load_records(), records);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let mut store = RecordStore::new(ReadOnlyStore);
        store.save_records(&[make_record("a")]);
        store.save_brand_config(&default_brands());

        assert!(store.load_records().is_empty());
    }

    // ========== brand list ==========

    #[test]
    fn test_missing_brands_load_defaults() {
        let store = RecordStore::new(MemoryStore::new());
        let brands = store.load_brand_config();

        assert_eq!(brands, default_brands());
        assert!(brands.iter().all(|b| b.visible));
    }

    #[test]
    fn test_legacy_brand_strings_upgrade() {
        let store = RecordStore::new(MemoryStore::with_blob(BRANDS_KEY, r#"["A","B"]"#));

        assert_eq!(
            store.load_brand_config(),
            vec![BrandConfig::new("A"), BrandConfig::new("B")]
        );
    }

    #[test]
    fn test_current_brand_objects_keep_visibility() {
        let blob = r#"[{"name":"A","visible":false},{"name":"B","visible":true}]"#;
        let store = RecordStore::new(MemoryStore::with_blob(BRANDS_KEY, blob));
        let brands = store.load_brand_config();

        assert_eq!(brands.len(), 2);
        assert!(!brands[0].visible);
        assert!(brands[1].visible);
    }

    #[test]
    fn test_empty_brand_array_stays_empty() {
        let store = RecordStore::new(MemoryStore::with_blob(BRANDS_KEY, "[]"));
        assert!(store.load_brand_config().is_empty());
    }

    #[test]
    fn test_mixed_brand_array_falls_back_to_defaults() {
        let blob = r#"["A",{"name":"B","visible":true}]"#;
        let store = RecordStore::new(MemoryStore::with_blob(BRANDS_KEY, blob));

        assert_eq!(store.load_brand_config(), default_brands());
    }

    #[test]
    fn test_corrupt_brands_load_defaults() {
        let store = RecordStore::new(MemoryStore::with_blob(BRANDS_KEY, "{oops"));
        assert_eq!(store.load_brand_config(), default_brands());
    }

    #[test]
    fn test_brands_saved_in_current_shape() {
        let mut store = RecordStore::new(MemoryStore::with_blob(BRANDS_KEY, r#"["A"]"#));
        let brands = store.load_brand_config();
        store.save_brand_config(&brands);

        let raw = store.store().get(BRANDS_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"name":"A","visible":true}]"#);
    }
}
