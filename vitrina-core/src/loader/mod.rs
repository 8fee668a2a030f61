//! Resource loader
//!
//! Fetches a JSON document and reports it as `{data, isLoading, error}`
//! through [`LoadState`]. Carousels observe the state passively; they never
//! drive or retry a fetch.

mod source;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::watch;

use crate::error::LoadError;

pub use source::{DirectorySource, HttpSource, ResourceSource, StaticSource};

/// Observable state of one fetch.
#[derive(Debug, Clone)]
pub enum LoadState<T> {
    Loading,
    Failed(Arc<LoadError>),
    Ready(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(error) => Some(error.as_ref()),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::Failed(error) => LoadState::Failed(error),
            Self::Ready(data) => LoadState::Ready(f(data)),
        }
    }
}

impl<T> From<Result<T, LoadError>> for LoadState<T> {
    fn from(result: Result<T, LoadError>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(error) => Self::Failed(Arc::new(error)),
        }
    }
}

/// Decodes JSON documents from a [`ResourceSource`].
#[derive(Clone)]
pub struct ResourceLoader {
    source: Arc<dyn ResourceSource>,
}

impl fmt::Debug for ResourceLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceLoader")
            .field("source", &self.source.describe())
            .finish()
    }
}

impl ResourceLoader {
    pub fn new(source: impl ResourceSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn from_arc(source: Arc<dyn ResourceSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &dyn ResourceSource {
        self.source.as_ref()
    }

    /// Fetch and decode, surfacing the error.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, LoadError> {
        let bytes = self.source.fetch(path).await?;
        let decoded = serde_json::from_slice(&bytes)?;
        log::debug!(
            "Loaded {path} ({} bytes) from {}",
            bytes.len(),
            self.source.describe()
        );
        Ok(decoded)
    }

    /// Fetch and decode into a terminal [`LoadState`]. Failures are logged
    /// here so callers only need to render them.
    pub async fn load<T: DeserializeOwned>(&self, path: &str) -> LoadState<T> {
        let result = self.fetch(path).await;
        if let Err(error) = &result {
            log::error!("Error fetching {path}: {error}");
        }
        result.into()
    }

    /// Start the fetch in the background. The receiver observes `Loading`
    /// first, then exactly one terminal state.
    pub fn watch<T>(&self, path: &str) -> watch::Receiver<LoadState<T>>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let (tx, rx) = watch::channel(LoadState::Loading);
        let loader = self.clone();
        let path = path.to_string();
        tokio::spawn(async move {
            let state = loader.load(&path).await;
            // Nobody listening any more: the view unmounted mid-fetch.
            if tx.send(state).is_err() {
                log::debug!("Discarding {path}: no observers left");
            }
        });
        rx
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Slide {
        id: u32,
    }

    fn loader() -> ResourceLoader {
        ResourceLoader::new(
            StaticSource::new()
                .with("slides.json", r#"[{"id": 1}, {"id": 2}]"#)
                .with("broken.json", r#"[{"id": "#),
        )
    }

    #[test]
    fn state_accessors_mirror_data_loading_error() {
        let loading: LoadState<u8> = LoadState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none() && loading.error().is_none());

        let failed: LoadState<u8> = Err(LoadError::NotFound("x".into())).into();
        assert!(!failed.is_loading());
        assert!(failed.error().is_some());

        let ready = LoadState::Ready(3u8).map(|n| n * 2);
        assert_eq!(ready.data(), Some(&6));
    }

    #[tokio::test]
    async fn load_decodes_and_reports_failures() {
        let loader = loader();
        let slides: LoadState<Vec<Slide>> = loader.load("slides.json").await;
        assert_eq!(slides.into_data(), Some(vec![Slide { id: 1 }, Slide { id: 2 }]));

        let broken: LoadState<Vec<Slide>> = loader.load("broken.json").await;
        assert!(matches!(broken.error(), Some(LoadError::Decode(_))));

        let missing: LoadState<Vec<Slide>> = loader.load("missing.json").await;
        assert!(matches!(missing.error(), Some(LoadError::NotFound(_))));
    }

    #[tokio::test]
    async fn watch_starts_loading_then_settles() {
        let mut rx = loader().watch::<Vec<Slide>>("slides.json");
        assert!(rx.borrow_and_update().is_loading());

        rx.changed().await.expect("loader task dropped the sender early");
        assert_eq!(rx.borrow().data().map(Vec::len), Some(2));
    }
}
