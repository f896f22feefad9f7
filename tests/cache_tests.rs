// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the asset resolution cache

use async_trait::async_trait;
use picker::{AssetCache, Bitmap, FetchError, MediaHandle, MediaLibrary};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Library that counts fetches and can simulate slow or missing assets
struct TestLibrary {
    fetches: AtomicUsize,
    delay: Duration,
    missing: Vec<MediaHandle>,
}

impl TestLibrary {
    fn instant() -> Arc<Self> {
        Arc::new(Self {
            fetches: AtomicUsize::new(0),
            delay: Duration::ZERO,
            missing: Vec::new(),
        })
    }

    fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            fetches: AtomicUsize::new(0),
            delay,
            missing: Vec::new(),
        })
    }

    fn with_missing(missing: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            fetches: AtomicUsize::new(0),
            delay: Duration::ZERO,
            missing: missing.iter().map(|&name| name.into()).collect(),
        })
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaLibrary for TestLibrary {
    async fn fetch_bitmap(&self, handle: &MediaHandle) -> Result<Bitmap, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.missing.contains(handle) {
            return Err(FetchError::AssetMissing);
        }
        Ok(Bitmap::from_rgba8(vec![255; 4], 1, 1).unwrap())
    }
}

#[tokio::test]
async fn test_resolve_memoizes_repeated_handles() {
    let library = TestLibrary::instant();
    let cache = AssetCache::new(library.clone());

    let handles: Vec<MediaHandle> = vec!["h1".into(), "h2".into(), "h1".into()];
    let resolved = cache.resolve(&handles).await;

    // at most one external fetch per distinct handle
    assert_eq!(library.fetch_count(), 2);

    // output order matches input order, repeated handle shares the cached
    // instance
    assert_eq!(resolved.len(), 3);
    let b1 = resolved[0].as_ref().expect("h1 resolves");
    let b1_again = resolved[2].as_ref().expect("h1 resolves again");
    assert!(Bitmap::same_pixels(b1, b1_again));
}

#[tokio::test]
async fn test_second_session_hits_cache() {
    let library = TestLibrary::instant();
    let cache = AssetCache::new(library.clone());
    let handle: MediaHandle = "h1".into();

    cache.resolve_one(&handle).await.unwrap();
    cache.resolve_one(&handle).await.unwrap();

    assert_eq!(library.fetch_count(), 1);
}

#[tokio::test]
async fn test_invalidate_then_resolve_fetches_fresh() {
    let library = TestLibrary::instant();
    let cache = AssetCache::new(library.clone());
    let handle: MediaHandle = "h1".into();

    let before = cache.resolve_one(&handle).await.unwrap();
    cache.invalidate();
    let after = cache.resolve_one(&handle).await.unwrap();

    assert_eq!(library.fetch_count(), 2);
    assert!(!Bitmap::same_pixels(&before, &after));
}

#[tokio::test]
async fn test_failed_fetch_yields_none_without_negative_caching() {
    let library = TestLibrary::with_missing(&["gone"]);
    let cache = AssetCache::new(library.clone());

    let resolved = cache.resolve(&["gone".into()]).await;
    assert_eq!(resolved.len(), 1);
    assert!(resolved[0].is_none());

    // the failure was not cached; the next resolve retries
    cache.resolve_one(&"gone".into()).await;
    assert_eq!(library.fetch_count(), 2);
}

#[tokio::test]
async fn test_concurrent_resolves_share_one_inflight_fetch() {
    let library = TestLibrary::slow(Duration::from_millis(50));
    let cache = AssetCache::new(library.clone());
    let handle: MediaHandle = "h1".into();

    let (a, b) = tokio::join!(cache.resolve_one(&handle), cache.resolve_one(&handle));

    assert_eq!(library.fetch_count(), 1);
    assert!(Bitmap::same_pixels(&a.unwrap(), &b.unwrap()));
}
