use std::fmt::{Display, Formatter};

#[derive(Debug, Clone)]
pub enum DownloadError {
    /// Connection failure, mid-body read failure, or a non-success status.
    Request(String),
    /// The configured timeout elapsed before the transfer finished.
    Timeout,
    /// The destination sink rejected or failed a write.
    Write(String),
    /// The cancellation token fired before the transfer finished.
    Cancelled,
    OpenOrCreateFile,
    FileSeek,
    FileFlush,
}

pub type Result<T> = core::result::Result<T, DownloadError>;

impl Display for DownloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadError::Request(message) => {
                write!(f, "Request {}", message)
            }
            DownloadError::Timeout => { write!(f, "Timeout") }
            DownloadError::Write(message) => {
                write!(f, "Write {}", message)
            }
            DownloadError::Cancelled => { write!(f, "Cancelled") }
            DownloadError::OpenOrCreateFile => { write!(f, "OpenOrCreateFile") }
            DownloadError::FileSeek => { write!(f, "FileSeek") }
            DownloadError::FileFlush => { write!(f, "FileFlush") }
        }
    }
}

impl std::error::Error for DownloadError {}
