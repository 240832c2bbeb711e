use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{error, info};
use rocket::fairing::AdHoc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::models::{Job, Profile, Review};

/* ----------------------------- ERRORS ----------------------------- */

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failure on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Json {
            path: path.display().to_string(),
            source,
        }
    }
}

/* ----------------------------- RECORDS ----------------------------- */

/// Lets the store handle a record without knowing its shape.
pub trait Record {
    fn id(&self) -> &str;
}

impl Record for Job {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Profile {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Review {
    fn id(&self) -> &str {
        &self.id
    }
}

/* ----------------------------- COLLECTIONS ----------------------------- */

/// One named collection backed by a JSON array file.
///
/// Records live in memory keyed by id; every mutation rewrites the whole
/// snapshot before the write lock is released, so the file never lags
/// behind what readers can observe.
pub struct Collection<T> {
    path: PathBuf,
    records: RwLock<IndexMap<String, T>>,
}

impl<T> Collection<T>
where
    T: Record + Clone + Serialize + DeserializeOwned,
{
    /// Loads the snapshot at `dir/file`, or starts empty when the file
    /// does not exist yet.
    fn open(dir: &Path, file: &str) -> Result<Self, StoreError> {
        let path = dir.join(file);
        let records = match std::fs::read(&path) {
            Ok(bytes) => {
                let list: Vec<T> =
                    serde_json::from_slice(&bytes).map_err(|e| StoreError::json(&path, e))?;
                list.into_iter().map(|r| (r.id().to_owned(), r)).collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => IndexMap::new(),
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        Ok(Collection {
            path,
            records: RwLock::new(records),
        })
    }

    async fn persist(&self, records: &IndexMap<String, T>) -> Result<(), StoreError> {
        let snapshot: Vec<&T> = records.values().collect();
        let bytes =
            serde_json::to_vec_pretty(&snapshot).map_err(|e| StoreError::json(&self.path, e))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| StoreError::io(&self.path, e))
    }

    pub async fn all(&self) -> Vec<T> {
        self.records.read().await.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Option<T> {
        self.records.read().await.get(id).cloned()
    }

    pub async fn insert(&self, record: T) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        records.insert(record.id().to_owned(), record.clone());
        self.persist(&records).await?;
        Ok(record)
    }

    /// Read-modify-write under the collection's write lock.
    ///
    /// `apply` edits a draft of the stored record; the record and the
    /// snapshot change only if it returns `Ok`. Returns `None` when `id`
    /// is unknown. Because validation and mutation share one critical
    /// section, two callers racing on the same record serialize here and
    /// the loser revalidates against the winner's result.
    pub async fn update<E, F>(&self, id: &str, apply: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&mut T) -> Result<(), E>,
        E: From<StoreError>,
    {
        let mut records = self.records.write().await;
        let Some(stored) = records.get_mut(id) else {
            return Ok(None);
        };

        let mut draft = stored.clone();
        apply(&mut draft)?;
        *stored = draft.clone();

        self.persist(&records).await?;
        Ok(Some(draft))
    }

    /// Removes the record, reporting whether it existed.
    pub async fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        if records.shift_remove(id).is_none() {
            return Ok(false);
        }
        self.persist(&records).await?;
        Ok(true)
    }
}

/* ----------------------------- STORE ----------------------------- */

/// The three marketplace collections.
pub struct Store {
    pub jobs: Collection<Job>,
    pub profiles: Collection<Profile>,
    pub reviews: Collection<Review>,
}

impl Store {
    /// Opens (creating if needed) the snapshot files under `data_dir`.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = data_dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

        Ok(Store {
            jobs: Collection::open(dir, "jobs.json")?,
            profiles: Collection::open(dir, "profiles.json")?,
            reviews: Collection::open(dir, "reviews.json")?,
        })
    }
}

pub fn init() -> AdHoc {
    AdHoc::try_on_ignite("JSON Store", |rocket| async {
        let data_dir = Config::data_dir();
        match Store::open(&data_dir) {
            Ok(store) => {
                info!("✅ JSON store ready at {}/", data_dir);
                Ok(rocket.manage(store))
            }
            Err(e) => {
                error!("❌ Failed to open JSON store: {}", e);
                Err(rocket)
            }
        }
    })
}

/* ----------------------------- TESTS ----------------------------- */
