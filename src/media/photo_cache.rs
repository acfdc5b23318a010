// SPDX-License-Identifier: MPL-2.0
//! Cache of listing photo handles.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently inserted or touched photos are evicted first
//! - **Count-bounded**: Capacity is a number of photos, set from `[photos]` config
//! - **URI-keyed**: Entries are indexed by the photo reference string
//! - **Status tracking**: Photos being fetched and photos that failed are
//!   remembered, so a reference is requested at most once
//!
//! Views read the cache through `&self` only; reads never change recency.

use crate::domain::listing::ImageSource;
use crate::error::PhotoError;
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;

use crate::app::config::DEFAULT_PHOTO_CACHE_CAPACITY;

/// What the cache knows about one photo reference.
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoStatus {
    Ready(Handle),
    Loading,
    Failed(PhotoError),
    Unknown,
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhotoCacheStats {
    pub insertions: u64,
    pub evictions: u64,
    pub failures: u64,
}

pub struct PhotoCache {
    handles: LruCache<String, Handle>,
    pending: HashSet<String>,
    failed: HashMap<String, PhotoError>,
    stats: PhotoCacheStats,
}

impl std::fmt::Debug for PhotoCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoCache")
            .field("len", &self.handles.len())
            .field("capacity", &self.handles.cap())
            .field("pending", &self.pending.len())
            .field("failed", &self.failed.len())
            .finish()
    }
}

impl Default for PhotoCache {
    fn default() -> Self {
        Self::new(DEFAULT_PHOTO_CACHE_CAPACITY)
    }
}

impl PhotoCache {
    /// Creates a cache holding at most `capacity` photos (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            handles: LruCache::new(capacity),
            pending: HashSet::new(),
            failed: HashMap::new(),
            stats: PhotoCacheStats::default(),
        }
    }

    /// Returns the handle of a loaded photo.
    #[must_use]
    pub fn get(&self, source: &ImageSource) -> Option<Handle> {
        self.handles.peek(&source.uri).cloned()
    }

    #[must_use]
    pub fn status(&self, source: &ImageSource) -> PhotoStatus {
        if let Some(handle) = self.handles.peek(&source.uri) {
            PhotoStatus::Ready(handle.clone())
        } else if self.pending.contains(&source.uri) {
            PhotoStatus::Loading
        } else if let Some(err) = self.failed.get(&source.uri) {
            PhotoStatus::Failed(err.clone())
        } else {
            PhotoStatus::Unknown
        }
    }

    /// Marks a photo as being fetched.
    ///
    /// Returns `false` when the photo is already cached, pending or failed, in
    /// which case no fetch should be started.
    pub fn begin_load(&mut self, source: &ImageSource) -> bool {
        if self.handles.contains(&source.uri)
            || self.pending.contains(&source.uri)
            || self.failed.contains_key(&source.uri)
        {
            return false;
        }
        self.pending.insert(source.uri.clone());
        true
    }

    /// Stores the outcome of a fetch.
    pub fn finish_load(&mut self, uri: String, result: Result<Handle, PhotoError>) {
        self.pending.remove(&uri);
        match result {
            Ok(handle) => {
                self.failed.remove(&uri);
                if self.handles.push(uri.clone(), handle).is_some_and(|(evicted, _)| evicted != uri) {
                    self.stats.evictions += 1;
                }
                self.stats.insertions += 1;
            }
            Err(err) => {
                self.stats.failures += 1;
                self.failed.insert(uri, err);
            }
        }
    }

    /// Moves a photo to the most recently used position.
    pub fn touch(&mut self, source: &ImageSource) {
        let _ = self.handles.get(&source.uri);
    }

    /// Forgets a failure so the photo can be requested again.
    pub fn clear_failure(&mut self, source: &ImageSource) {
        self.failed.remove(&source.uri);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.handles.cap().get()
    }

    #[must_use]
    pub fn stats(&self) -> PhotoCacheStats {
        self.stats
    }
}
