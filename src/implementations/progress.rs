use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::structures::Progress;

impl Progress {
    pub fn new(total_bytes: u64, total_files: u64) -> Self {
        Self {
            downloaded_bytes: Arc::new((AtomicU64::new(0), AtomicU64::new(total_bytes))),
            processed_files: Arc::new((AtomicU64::new(0), AtomicU64::new(total_files))),
            skipped_files: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn completed_bytes(&self) -> u64 {
        self.downloaded_bytes.0.load(Ordering::Relaxed)
    }

    pub fn total_bytes(&self) -> u64 {
        self.downloaded_bytes.1.load(Ordering::Relaxed)
    }

    pub fn processed_files(&self) -> u64 {
        self.processed_files.0.load(Ordering::Relaxed)
    }

    pub fn total_files(&self) -> u64 {
        self.processed_files.1.load(Ordering::Relaxed)
    }

    pub fn skipped_files(&self) -> u64 {
        self.skipped_files.load(Ordering::Relaxed)
    }

    /// Percentage of bytes written, an empty build counts as done
    pub fn percentage(&self) -> f64 {
        let total = self.total_bytes();
        if total == 0 {
            return 100.0;
        }
        self.completed_bytes() as f64 / total as f64 * 100.0
    }

    pub(crate) fn add_downloaded_bytes(&self, amount: u64) {
        self.downloaded_bytes.0.fetch_add(amount, Ordering::Relaxed);
    }

    pub(crate) fn increment_processed_files(&self) {
        self.processed_files.0.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn increment_skipped_files(&self) {
        self.skipped_files.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_counters() {
        let progress = Progress::new(300, 1);
        let clone = progress.clone();
        clone.add_downloaded_bytes(100);
        clone.increment_processed_files();
        assert_eq!(progress.completed_bytes(), 100);
        assert_eq!(progress.processed_files(), 1);
        assert_eq!(progress.total_files(), 1);
    }

    #[test]
    fn percentage_of_empty_build_is_complete() {
        assert_eq!(Progress::new(0, 0).percentage(), 100.0);
        let progress = Progress::new(400, 1);
        progress.add_downloaded_bytes(100);
        assert_eq!(progress.percentage(), 25.0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_increments_are_not_lost() {
        let progress = Progress::new(8 * 1000, 8);
        let handles : Vec<_> = (0..8).map(|_| {
            let progress = progress.clone();
            tokio::spawn(async move {
                for _ in 0..1000 {
                    progress.add_downloaded_bytes(1);
                }
            })
        }).collect();
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(progress.completed_bytes(), 8000);
    }
}
