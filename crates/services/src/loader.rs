use std::path::PathBuf;

use tokio::task::JoinSet;
use voca_core::model::{QuizConfig, SourceJoin};

use crate::error::LoadError;

/// Reads one batch of vocabulary files and joins them into a single text blob.
///
/// Files are read concurrently; the joined text keeps the order in which the
/// paths were given. The batch completes only once every file has been read.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceLoader {
    join: SourceJoin,
}

impl SourceLoader {
    #[must_use]
    pub fn new(join: SourceJoin) -> Self {
        Self { join }
    }

    #[must_use]
    pub fn from_config(config: &QuizConfig) -> Self {
        Self::new(config.join())
    }

    /// # Errors
    ///
    /// Returns `LoadError::NoSources` for an empty batch and `LoadError::Io`
    /// for the first file that cannot be read.
    pub async fn read_all(&self, paths: &[PathBuf]) -> Result<String, LoadError> {
        if paths.is_empty() {
            return Err(LoadError::NoSources);
        }

        let mut readers = JoinSet::new();
        for (index, path) in paths.iter().cloned().enumerate() {
            readers.spawn(async move {
                let read = tokio::fs::read_to_string(&path).await;
                (index, path, read)
            });
        }

        let mut blobs: Vec<Option<String>> = vec![None; paths.len()];
        while let Some(joined) = readers.join_next().await {
            let (index, path, read) = joined?;
            let text = read.map_err(|source| LoadError::Io { path, source })?;
            tracing::debug!(index, bytes = text.len(), "vocabulary file read");
            blobs[index] = Some(text);
        }

        Ok(self.join.join(blobs.into_iter().flatten()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn joins_in_selection_order() {
        let first = write_temp("one");
        let second = write_temp("two");
        let paths = vec![first.path().to_path_buf(), second.path().to_path_buf()];

        let newline = SourceLoader::new(SourceJoin::Newline).read_all(&paths).await.unwrap();
        assert_eq!(newline, "one\ntwo\n");

        let raw = SourceLoader::new(SourceJoin::Raw).read_all(&paths).await.unwrap();
        assert_eq!(raw, "onetwo");
    }

    #[tokio::test]
    async fn missing_file_fails_batch() {
        let ok = write_temp("one");
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let paths = vec![ok.path().to_path_buf(), missing.clone()];

        let err = SourceLoader::default().read_all(&paths).await.unwrap_err();
        assert!(matches!(err, LoadError::Io { path, .. } if path == missing));
    }

    #[tokio::test]
    async fn empty_batch_is_rejected() {
        let err = SourceLoader::default().read_all(&[]).await.unwrap_err();
        assert!(matches!(err, LoadError::NoSources));
    }
}
