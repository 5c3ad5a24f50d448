//! Artwork loader: local files and http(s) downloads.

use std::path::PathBuf;
use std::time::Duration;

use super::{Artwork, ArtworkError};

/// Where an artwork reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtworkSource {
    Local(PathBuf),
    Remote(String),
}

impl ArtworkSource {
    /// Classify a reference. `file://` URLs are treated as local paths.
    pub fn parse(reference: &str) -> Result<Self, ArtworkError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(ArtworkError::EmptyReference);
        }
        let lower = reference.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Remote(reference.to_string()))
        } else if let Some(path) = reference.strip_prefix("file://") {
            Ok(Self::Local(PathBuf::from(path)))
        } else {
            Ok(Self::Local(PathBuf::from(reference)))
        }
    }
}

/// Loads and decodes artwork. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ArtworkLoader {
    http_client: reqwest::Client,
    fetch_remote: bool,
}

impl ArtworkLoader {
    /// Create a loader. `timeout` bounds each remote request.
    pub fn new(fetch_remote: bool, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tunesphere/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(target: "artwork", error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self {
            http_client,
            fetch_remote,
        }
    }

    /// A loader that never touches the network.
    pub fn local_only() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            fetch_remote: false,
        }
    }

    pub fn fetches_remote(&self) -> bool {
        self.fetch_remote
    }

    /// Load and decode one reference.
    pub async fn load(&self, reference: &str) -> Result<Artwork, ArtworkError> {
        let bytes = match ArtworkSource::parse(reference)? {
            ArtworkSource::Local(path) => tokio::fs::read(&path)
                .await
                .map_err(|e| ArtworkError::Read(path, e))?,
            ArtworkSource::Remote(url) => {
                if !self.fetch_remote {
                    return Err(ArtworkError::RemoteDisabled(url));
                }
                self.download(&url).await?
            }
        };

        // Decoding large images is CPU work; keep it off the async workers
        tokio::task::spawn_blocking(move || Artwork::decode(&bytes))
            .await
            .map_err(|e| ArtworkError::Task(e.to_string()))?
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, ArtworkError> {
        let network = |e: reqwest::Error| ArtworkError::Network {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.http_client.get(url).send().await.map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArtworkError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(network)?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::tests::png_bytes;

    #[test]
    fn test_parse_sources() {
        assert_eq!(
            ArtworkSource::parse("https://example.com/a.png").unwrap(),
            ArtworkSource::Remote("https://example.com/a.png".to_string())
        );
        assert_eq!(
            ArtworkSource::parse("HTTP://example.com/a.png").unwrap(),
            ArtworkSource::Remote("HTTP://example.com/a.png".to_string())
        );
        assert_eq!(
            ArtworkSource::parse("file:///tmp/a.png").unwrap(),
            ArtworkSource::Local(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            ArtworkSource::parse("art/cover.jpg").unwrap(),
            ArtworkSource::Local(PathBuf::from("art/cover.jpg"))
        );
        assert!(matches!(
            ArtworkSource::parse("   "),
            Err(ArtworkError::EmptyReference)
        ));
    }

    #[tokio::test]
    async fn test_load_local_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        std::fs::write(&path, png_bytes(3, 3)).unwrap();

        let loader = ArtworkLoader::local_only();
        let art = loader.load(path.to_str().unwrap()).await.unwrap();
        assert_eq!((art.width, art.height), (3, 3));
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let err = ArtworkLoader::local_only()
            .load(path.to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ArtworkError::Read(_, _)));
    }

    #[tokio::test]
    async fn test_load_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"\x89PNG not really").unwrap();

        let err = ArtworkLoader::local_only()
            .load(path.to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ArtworkError::Decode(_)));
    }

    #[tokio::test]
    async fn test_remote_disabled_never_fetches() {
        let loader = ArtworkLoader::new(false, Duration::from_secs(1));
        let err = loader
            .load("https://via.placeholder.com/300x300/8B5CF6/FFFFFF?text=MV")
            .await
            .unwrap_err();
        assert!(matches!(err, ArtworkError::RemoteDisabled(_)));
    }
}
