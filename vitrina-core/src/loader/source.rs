//! Where content documents come from.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::constants::resources::HTTP_TIMEOUT_SECS;
use crate::error::LoadError;

/// A read-only store of named documents.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError>;

    /// Short human-readable origin for logs.
    fn describe(&self) -> String;
}

/// Documents served over HTTP relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    /// `localhost:8080/data` is accepted and treated as `http://`.
    pub fn new(base_url: &str) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base: normalize_base(base_url)?,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url_for(&self, path: &str) -> Result<Url, LoadError> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }
}

fn normalize_base(raw: &str) -> Result<Url, LoadError> {
    let trimmed = raw.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        let normalized = format!("http://{trimmed}");
        log::warn!("Normalized base URL from '{trimmed}' to '{normalized}'");
        normalized
    };
    // Url::join replaces the last segment unless the base ends in '/'.
    let with_slash = if with_scheme.ends_with('/') {
        with_scheme
    } else {
        format!("{with_scheme}/")
    };
    Ok(Url::parse(&with_slash)?)
}

#[async_trait]
impl ResourceSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let url = self.url_for(path)?;
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}

/// Documents read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `path` under the root. Absolute paths and `..` are rejected.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, LoadError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(LoadError::InvalidPath(path.to_string()));
                }
            }
        }
        if resolved == self.root {
            return Err(LoadError::InvalidPath(path.to_string()));
        }
        Ok(resolved)
    }
}

#[async_trait]
impl ResourceSource for DirectorySource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let resolved = self.resolve(path)?;
        tokio::fs::read(&resolved).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound(path.to_string())
            } else {
                LoadError::Io {
                    path: resolved,
                    source,
                }
            }
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// In-memory documents.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<String, Vec<u8>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.insert(path, body);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.documents.insert(path.into(), body.into());
    }
}

#[async_trait]
impl ResourceSource for StaticSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        self.documents
            .get(path.trim_start_matches('/'))
            .cloned()
            .ok_or_else(|| LoadError::NotFound(path.to_string()))
    }

    fn describe(&self) -> String {
        format!("static ({} documents)", self.documents.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized_for_joining() {
        let source = HttpSource::new("localhost:8080/data").expect("client");
        assert_eq!(
            source.url_for("/hero_slides.json").expect("url").as_str(),
            "http://localhost:8080/data/hero_slides.json"
        );
    }

    #[test]
    fn directory_source_stays_under_root() {
        let source = DirectorySource::new("/srv/site/data");
        assert_eq!(
            source.resolve("./trends.json").expect("resolves"),
            PathBuf::from("/srv/site/data/trends.json")
        );
        assert!(matches!(
            source.resolve("../secrets.json"),
            Err(LoadError::InvalidPath(_))
        ));
        assert!(matches!(source.resolve(""), Err(LoadError::InvalidPath(_))));
    }
}
