//! Where serialized scenes come from.
//!
//! Readers are callback based: `fetch` returns immediately and the callback
//! runs once, possibly on another thread, with the raw bytes or the error.
//! [`load_scene`] wraps the same call into a future.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use stagehand_core::{Error, Result};

use crate::schema::{SerializedScene, parse_scene};

pub type FetchCallback = Box<dyn FnOnce(Result<Vec<u8>>) + Send + 'static>;

/// A source of serialized scene bytes.
pub trait SceneReader: Send + Sync {
    fn fetch(&self, on_done: FetchCallback);
}

/// Reads a scene file from disk. Completes synchronously.
#[derive(Debug, Clone)]
pub struct FileSceneReader {
    path: PathBuf,
}

impl FileSceneReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SceneReader for FileSceneReader {
    fn fetch(&self, on_done: FetchCallback) {
        on_done(std::fs::read(&self.path).map_err(Error::from));
    }
}

/// Fetches a scene over HTTP, bypassing caches.
///
/// Every request carries `Cache-Control: no-cache` and, when configured, a
/// `<param>=<unix millis>` query pair so intermediate caches never serve a
/// stale scene.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSceneReader {
    url: url::Url,
    cache_bust_param: Option<String>,
}

#[cfg(feature = "http")]
impl HttpSceneReader {
    pub fn new(url: &str, cache_bust_param: Option<&str>) -> Result<Self> {
        Ok(Self {
            url: url::Url::parse(url)?,
            cache_bust_param: cache_bust_param.map(str::to_owned),
        })
    }

    #[inline]
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// The URL of the next request, cache-busting pair included.
    #[must_use]
    pub fn request_url(&self) -> url::Url {
        let mut url = self.url.clone();
        if let Some(param) = &self.cache_bust_param {
            url.query_pairs_mut()
                .append_pair(param, &unix_millis().to_string());
        }
        url
    }
}

#[cfg(feature = "http")]
impl SceneReader for HttpSceneReader {
    fn fetch(&self, on_done: FetchCallback) {
        let url = self.request_url();
        log::info!("Fetching scene from {url}");

        let mut request = ehttp::Request::get(url.as_str());
        request.headers.insert("Cache-Control", "no-cache");

        ehttp::fetch(request, move |result| {
            let outcome = match result {
                Ok(response) if response.ok => Ok(response.bytes),
                Ok(response) => Err(Error::HttpResponse {
                    status: response.status,
                }),
                Err(message) => Err(Error::Transport(message)),
            };
            on_done(outcome);
        });
    }
}

#[cfg(feature = "http")]
fn unix_millis() -> u128 {
    web_time::SystemTime::now()
        .duration_since(web_time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// The scene readers the engine knows about, plus host-provided ones.
#[derive(Clone)]
pub enum SceneSource {
    File(Arc<FileSceneReader>),
    #[cfg(feature = "http")]
    Http(Arc<HttpSceneReader>),
    Custom(Arc<dyn SceneReader>),
}

impl SceneSource {
    /// Picks the reader from the shape of `source`: `http(s)://` URLs go over
    /// HTTP, anything else is a file path.
    pub fn from_source(source: &str, cache_bust_param: Option<&str>) -> Result<Self> {
        if source.starts_with("http://") || source.starts_with("https://") {
            #[cfg(feature = "http")]
            {
                Ok(Self::Http(Arc::new(HttpSceneReader::new(
                    source,
                    cache_bust_param,
                )?)))
            }
            #[cfg(not(feature = "http"))]
            {
                let _ = cache_bust_param;
                Err(Error::Transport(
                    "HTTP feature is not enabled. Enable it with `features = [\"http\"]`".into(),
                ))
            }
        } else {
            Ok(Self::File(Arc::new(FileSceneReader::new(source))))
        }
    }

    pub fn custom(reader: impl SceneReader + 'static) -> Self {
        Self::Custom(Arc::new(reader))
    }

    pub fn fetch(&self, on_done: FetchCallback) {
        match self {
            Self::File(reader) => reader.fetch(on_done),
            #[cfg(feature = "http")]
            Self::Http(reader) => reader.fetch(on_done),
            Self::Custom(reader) => reader.fetch(on_done),
        }
    }

    /// Fetches and parses, delivering the scene to `on_done`.
    pub fn fetch_scene(&self, on_done: impl FnOnce(Result<SerializedScene>) + Send + 'static) {
        self.fetch(Box::new(move |bytes| {
            on_done(bytes.and_then(|bytes| parse_scene(&bytes)));
        }));
    }
}

impl fmt::Debug for SceneSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(reader) => f.debug_tuple("File").field(&reader.path).finish(),
            #[cfg(feature = "http")]
            Self::Http(reader) => f.debug_tuple("Http").field(&reader.url.as_str()).finish(),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Fetches and parses a scene from `source`.
pub async fn load_scene(source: &SceneSource) -> Result<SerializedScene> {
    let (tx, rx) = flume::bounded(1);
    source.fetch_scene(move |result| {
        // The receiver only goes away if the future was dropped.
        let _ = tx.send(result);
    });
    rx.recv_async()
        .await
        .map_err(|_| Error::SceneUnavailable("fetch callback dropped".into()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticReader(&'static [u8]);

    impl SceneReader for StaticReader {
        fn fetch(&self, on_done: FetchCallback) {
            on_done(Ok(self.0.to_vec()));
        }
    }

    #[test]
    fn load_scene_parses_custom_source() {
        let source = SceneSource::custom(StaticReader(br#"{"o":[{"n":"Cube"}]}"#));
        let scene = pollster::block_on(load_scene(&source)).unwrap();
        assert_eq!(scene.objects[0].name, "Cube");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = SceneSource::from_source("definitely/not/here.json", None).unwrap();
        let result = pollster::block_on(load_scene(&source));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn parse_errors_surface_as_json() {
        let source = SceneSource::custom(StaticReader(b"not json"));
        let result = pollster::block_on(load_scene(&source));
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[cfg(feature = "http")]
    #[test]
    fn http_requests_are_cache_busted() {
        let reader = HttpSceneReader::new("http://localhost:8080/scene.json", Some("t")).unwrap();
        let url = reader.request_url();
        assert!(url.query_pairs().any(|(k, v)| k == "t" && !v.is_empty()));
        assert_eq!(url.path(), "/scene.json");
    }
}
