use std::time::Duration;
use tokio_util::sync::CancellationToken;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Per-transfer options. The timeout bounds the whole transfer from the
/// moment body reading begins; the cancellation token aborts it externally.
pub struct DownloadOptions {
    pub timeout: Duration,
    pub cancel_token: CancellationToken,
}

impl DownloadOptions {
    pub fn new() -> DownloadOptions {
        DownloadOptions {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn set_timeout(mut self, timeout: Duration) -> DownloadOptions {
        self.timeout = timeout;
        self
    }

    pub fn set_cancel_token(mut self, cancel_token: CancellationToken) -> DownloadOptions {
        self.cancel_token = cancel_token;
        self
    }
}

impl Default for DownloadOptions {
    fn default() -> Self {
        DownloadOptions::new()
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;
    use super::DownloadOptions;

    #[test]
    fn test_defaults() {
        let options = DownloadOptions::new();
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert!(!options.cancel_token.is_cancelled());
    }

    #[test]
    fn test_set_timeout() {
        let options = DownloadOptions::new().set_timeout(Duration::from_secs(5));
        assert_eq!(options.timeout, Duration::from_secs(5));
    }
}
