// SPDX-License-Identifier: MPL-2.0
//! Frame image fetching and caching.
//!
//! This is the image loading collaborator of the viewer: it turns resolved
//! [`FrameUrl`]s into Iced image handles and keeps them in a bounded LRU
//! cache keyed by URL.
//!
//! # Design
//!
//! - **Async loading**: every fetch runs in an Iced `Task`; results come back
//!   as messages and are stored with [`FrameCache::finish`]
//! - **Remote and local**: `http(s)` URLs are downloaded with `reqwest`,
//!   anything else is read from disk with `tokio::fs`
//! - **No retries**: a failed frame stays failed and is shown as a placeholder

use crate::application::port::FrameUrl;
use crate::domain::ui::FrameCacheCapacity;
use crate::error::FrameError;
use iced::widget::image;
use iced::Task;
use lru::LruCache;
use std::io;
use std::num::NonZeroUsize;

/// Raw bytes of a fetched frame, or the reason it is unavailable.
pub type FetchResult = Result<Vec<u8>, FrameError>;

/// Cache entry for one frame image.
#[derive(Debug, Clone)]
pub enum FrameImage {
    /// A fetch is running.
    Pending,
    /// The image is decoded lazily by the renderer.
    Ready(image::Handle),
    /// The image could not be fetched.
    Failed(FrameError),
}

impl FrameImage {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, FrameImage::Pending)
    }
}

pub struct FrameCache {
    entries: LruCache<FrameUrl, FrameImage>,
    client: Option<reqwest::Client>,
}

impl FrameCache {
    #[must_use]
    pub fn new(capacity: FrameCacheCapacity) -> Self {
        let capacity = NonZeroUsize::new(capacity.value()).unwrap_or(NonZeroUsize::MIN);
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("IcedTurntable/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| eprintln!("[WARN] HTTP client unavailable: {err}"))
            .ok();
        Self {
            entries: LruCache::new(capacity),
            client,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a frame without touching its recency.
    #[must_use]
    pub fn peek(&self, url: &FrameUrl) -> Option<&FrameImage> {
        self.entries.peek(url)
    }

    /// Starts fetching `url` unless it is cached or already being fetched.
    ///
    /// Returns `None` when no fetch is needed. A cached entry is promoted to
    /// most recently used.
    pub fn request<M: Send + 'static>(
        &mut self,
        url: FrameUrl,
        on_loaded: fn(FrameUrl, FetchResult) -> M,
    ) -> Option<Task<M>> {
        if self.entries.get(&url).is_some() {
            return None;
        }
        self.entries.put(url.clone(), FrameImage::Pending);

        let task = if url.is_remote() {
            let client = self.client.clone();
            let target = url.as_str().to_string();
            Task::perform(fetch_remote(client, target), move |result| on_loaded(url, result))
        } else {
            let path = url.as_str().to_string();
            Task::perform(read_local(path), move |result| on_loaded(url, result))
        };
        Some(task)
    }

    /// Requests every URL in order, skipping entries already known.
    ///
    /// Stops after filling the cache so early frames are not evicted by
    /// later ones.
    pub fn preload<M: Send + 'static>(
        &mut self,
        urls: impl IntoIterator<Item = FrameUrl>,
        on_loaded: fn(FrameUrl, FetchResult) -> M,
    ) -> Task<M> {
        let capacity = self.capacity();
        let tasks: Vec<Task<M>> = urls
            .into_iter()
            .take(capacity)
            .filter_map(|url| self.request(url, on_loaded))
            .collect();
        Task::batch(tasks)
    }

    /// Stores the outcome of a fetch started by [`FrameCache::request`].
    ///
    /// Results for URLs evicted in the meantime are still stored.
    pub fn finish(&mut self, url: FrameUrl, result: FetchResult) {
        let image = match result {
            Ok(bytes) => FrameImage::Ready(image::Handle::from_bytes(bytes)),
            Err(err) => {
                eprintln!("[WARN] Frame {url} unavailable: {err}");
                FrameImage::Failed(err)
            }
        };
        self.entries.put(url, image);
    }
}

async fn fetch_remote(client: Option<reqwest::Client>, url: String) -> FetchResult {
    let client =
        client.ok_or_else(|| FrameError::Network("HTTP client unavailable".to_string()))?;
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|err| FrameError::Network(err.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(FrameError::NotFound);
    }
    if !status.is_success() {
        return Err(FrameError::HttpStatus(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|err| FrameError::Network(err.to_string()))?;
    Ok(bytes.to_vec())
}

async fn read_local(path: String) -> FetchResult {
    tokio::fs::read(&path).await.map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => FrameError::NotFound,
        _ => FrameError::Io(err.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn loaded(url: FrameUrl, result: FetchResult) -> (FrameUrl, bool) {
        (url, result.is_ok())
    }

    fn cache() -> FrameCache {
        FrameCache::new(FrameCacheCapacity::new(8))
    }

    #[test]
    fn request_marks_entry_pending_once() {
        let mut cache = cache();
        let url = FrameUrl::new("frames/car/01.jpg");

        assert!(cache.request(url.clone(), loaded).is_some());
        assert!(cache.peek(&url).is_some_and(FrameImage::is_pending));
        assert!(cache.request(url, loaded).is_none());
    }

    #[test]
    fn finish_stores_ready_and_failed_frames() {
        let mut cache = cache();
        let good = FrameUrl::new("frames/car/01.jpg");
        let bad = FrameUrl::new("frames/car/02.jpg");

        cache.finish(good.clone(), Ok(vec![0x89, b'P', b'N', b'G']));
        cache.finish(bad.clone(), Err(FrameError::NotFound));

        assert!(matches!(cache.peek(&good), Some(FrameImage::Ready(_))));
        assert!(matches!(
            cache.peek(&bad),
            Some(FrameImage::Failed(FrameError::NotFound))
        ));
        // Failed frames are not fetched again
        assert!(cache.request(bad, loaded).is_none());
    }

    #[test]
    fn preload_stops_at_capacity() {
        let mut cache = cache();
        let urls = (1..=36).map(|i| FrameUrl::new(format!("frames/car/{i:02}.jpg")));

        let _task = cache.preload(urls, loaded);
        assert_eq!(cache.len(), 8);
        assert!(cache.peek(&FrameUrl::new("frames/car/01.jpg")).is_some());
        assert!(cache.peek(&FrameUrl::new("frames/car/09.jpg")).is_none());
    }

    #[test]
    fn least_recently_used_frame_is_evicted() {
        let mut cache = cache();
        for i in 1..=8 {
            cache.finish(FrameUrl::new(format!("f/{i}.jpg")), Err(FrameError::NotFound));
        }
        // Touch the oldest entry so the second one becomes the eviction candidate
        assert!(cache.request(FrameUrl::new("f/1.jpg"), loaded).is_none());
        cache.finish(FrameUrl::new("f/9.jpg"), Err(FrameError::NotFound));

        assert!(cache.peek(&FrameUrl::new("f/1.jpg")).is_some());
        assert!(cache.peek(&FrameUrl::new("f/2.jpg")).is_none());
    }

    #[tokio::test]
    async fn read_local_distinguishes_missing_files() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("01.jpg");
        std::fs::write(&path, b"frame").expect("failed to write frame");

        let bytes = read_local(path.display().to_string()).await;
        assert_eq!(bytes, Ok(b"frame".to_vec()));

        let missing = read_local(dir.path().join("02.jpg").display().to_string()).await;
        assert_eq!(missing, Err(FrameError::NotFound));
    }
}
