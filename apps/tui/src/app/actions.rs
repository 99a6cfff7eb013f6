use pasture_core::resources::{parse_origins, parse_records, LABELED_FILE, ORIGINS_FILE};
use pasture_core::{LexicalRecord, LoadError, OriginSummary};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Outcome of a background resource load, delivered to the draw loop.
#[derive(Debug)]
pub enum LoadEvent {
    Records(Result<Vec<LexicalRecord>, LoadError>),
    Origins(Result<OriginSummary, LoadError>),
}

/// Spawns resource loads on the tokio runtime and collects their results.
#[derive(Debug)]
pub struct AppActions {
    sender: UnboundedSender<LoadEvent>,
    receiver: UnboundedReceiver<LoadEvent>,
}

impl AppActions {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded_channel();
        Self { sender, receiver }
    }

    pub fn spawn_records_load(&self, path: PathBuf) {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let result = read_records(&path).await;
            if sender.send(LoadEvent::Records(result)).is_err() {
                tracing::warn!("dashboard closed before records finished loading");
            }
        });
    }

    pub fn spawn_origins_load(&self, path: PathBuf) {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let result = read_origins(&path).await;
            if sender.send(LoadEvent::Origins(result)).is_err() {
                tracing::warn!("dashboard closed before origins finished loading");
            }
        });
    }

    /// Everything that arrived since the last call, without blocking.
    pub fn drain(&mut self) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for AppActions {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn read_records(path: &Path) -> Result<Vec<LexicalRecord>, LoadError> {
    tracing::info!(path = %path.display(), "loading records");
    let body = read_resource(LABELED_FILE, path).await?;
    let records = parse_records(LABELED_FILE, &body)?;
    tracing::info!(count = records.len(), "records loaded");
    Ok(records)
}

pub async fn read_origins(path: &Path) -> Result<OriginSummary, LoadError> {
    tracing::info!(path = %path.display(), "loading origin summary");
    let body = read_resource(ORIGINS_FILE, path).await?;
    let summary = parse_origins(ORIGINS_FILE, &body)?;
    tracing::info!(countries = summary.countries.len(), "origin summary loaded");
    Ok(summary)
}

async fn read_resource(resource: &str, path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path).await.map_err(|error| {
        tracing::error!(%error, path = %path.display(), "resource read failed");
        LoadError::transport(resource, error)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_records_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LABELED_FILE);
        std::fs::write(
            &path,
            r#"[{"zh":"牛肉","en":"beef","frequency":12,"labels":["meat_type","meat_type"]}]"#,
        )
        .unwrap();

        let records = read_records(&path).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].labels, vec!["meat_type".to_string()]);
    }

    #[tokio::test]
    async fn missing_file_is_a_transport_error() {
        let dir = tempfile::tempdir().unwrap();

        let error = read_origins(&dir.path().join(ORIGINS_FILE)).await.unwrap_err();

        assert!(matches!(error, LoadError::Transport { .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LABELED_FILE);
        std::fs::write(&path, "{not json").unwrap();

        let error = read_records(&path).await.unwrap_err();

        assert!(matches!(error, LoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn spawned_loads_are_drained() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ORIGINS_FILE);
        std::fs::write(&path, r#"{"countries":[],"total_mentions":0,"unique_countries":0}"#)
            .unwrap();
        let mut actions = AppActions::new();

        actions.spawn_origins_load(path);
        let mut events = Vec::new();
        for _ in 0..50 {
            events.extend(actions.drain());
            if !events.is_empty() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        assert!(matches!(events.as_slice(), [LoadEvent::Origins(Ok(_))]));
    }
}
