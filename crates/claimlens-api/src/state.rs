//! Application state management

use claimlens_core::config::AppConfig;
use claimlens_extractor::ClaimExtractor;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Application state shared across handlers
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Server start time
    pub start_time: Instant,
    /// Request counter
    pub request_count: AtomicU64,
    /// The extraction pipeline; read-only after startup, shared freely
    pub extractor: ClaimExtractor,
}

impl AppState {
    /// Create new application state with config and a built pipeline
    pub fn new(config: AppConfig, extractor: ClaimExtractor) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
            extractor,
        }
    }

    /// Increment request counter
    pub fn increment_requests(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst)
    }

    /// Get total request count
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
