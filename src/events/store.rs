use super::dto::EventRecord;
use super::model::Event;
use crate::error::StoreError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Flat JSON file holding every submitted event.
///
/// Appending rewrites the whole file, so two concurrent submitters can lose one of their events.
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load_all(&self) -> Result<Vec<Event>, StoreError> {
        let json = fs::read_to_string(&self.path).await?;
        let records = serde_json::from_str::<Vec<EventRecord>>(&json)?;

        debug!("Loaded {} events", records.len());

        Ok(records.into_iter().map(EventRecord::to_model).collect())
    }

    /// A missing file counts as an empty store, a malformed one is left untouched.
    #[tracing::instrument(skip(self, event), fields(path = %self.path.display(), event = %event.name))]
    pub async fn append(&self, event: Event) -> Result<(), StoreError> {
        let mut events = match self.load_all().await {
            Ok(events) => events,
            Err(StoreError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                info!("Events file doesn't exist yet, creating it");
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        events.push(event);

        let records: Vec<EventRecord> = events.into_iter().map(EventRecord::from).collect();
        let json = serde_json::to_string_pretty(&records).map_err(StoreError::Encode)?;

        fs::write(&self.path, json).await?;

        info!("Stored event, {} in total", records.len());

        Ok(())
    }
}
