use tokio::sync::watch::{channel, Receiver, Sender};

/// Progress observer for one transfer.
///
/// Two independent channels: a completion fraction and a cumulative byte
/// count. Each channel keeps its latest value, so a receiver obtained after
/// updates have started immediately observes the most recent one.
///
/// Percentage sentinels: `NAN` means the transfer has not started,
/// `INFINITY` means the total size is unknown, otherwise the value is
/// `bytes / total` in `[0, 1]`.
pub struct DownloadProgress {
    percentage_sender: Sender<f64>,
    bytes_downloaded_sender: Sender<u64>,
}

impl DownloadProgress {
    pub fn new() -> DownloadProgress {
        let (percentage_sender, _) = channel(f64::NAN);
        let (bytes_downloaded_sender, _) = channel(0u64);
        DownloadProgress {
            percentage_sender,
            bytes_downloaded_sender,
        }
    }

    pub fn percentage(&self) -> Receiver<f64> {
        self.percentage_sender.subscribe()
    }

    pub fn bytes_downloaded(&self) -> Receiver<u64> {
        self.bytes_downloaded_sender.subscribe()
    }

    /// Publishes a new completion fraction. Never blocks, succeeds with
    /// zero subscribers.
    pub fn report_percentage(&self, value: f64) {
        self.percentage_sender.send_replace(value);
    }

    /// Publishes a new cumulative byte count.
    pub fn report_bytes(&self, value: u64) {
        self.bytes_downloaded_sender.send_replace(value);
    }
}

impl Default for DownloadProgress {
    fn default() -> Self {
        DownloadProgress::new()
    }
}

#[cfg(test)]
mod test {
    use super::DownloadProgress;

    #[test]
    fn test_initial_values() {
        let progress = DownloadProgress::new();
        assert!(progress.percentage().borrow().is_nan());
        assert_eq!(*progress.bytes_downloaded().borrow(), 0);
    }

    #[test]
    fn test_replay_latest() {
        let progress = DownloadProgress::new();
        progress.report_percentage(0.5);
        progress.report_bytes(500);

        let percentage = progress.percentage();
        let bytes = progress.bytes_downloaded();
        assert_eq!(*percentage.borrow(), 0.5);
        assert_eq!(*bytes.borrow(), 500);
    }

    #[test]
    fn test_unknown_size_sentinel() {
        let progress = DownloadProgress::new();
        progress.report_percentage(f64::INFINITY);
        assert!(progress.percentage().borrow().is_infinite());
    }

    #[tokio::test]
    async fn test_live_updates_after_subscribe() {
        let progress = DownloadProgress::new();
        let mut bytes = progress.bytes_downloaded();
        progress.report_bytes(100);
        bytes.changed().await.unwrap();
        assert_eq!(*bytes.borrow(), 100);
    }

    #[test]
    fn test_report_without_subscribers() {
        let progress = DownloadProgress::new();
        progress.report_percentage(1.0);
        progress.report_bytes(1000);
        assert_eq!(*progress.percentage().borrow(), 1.0);
    }
}
