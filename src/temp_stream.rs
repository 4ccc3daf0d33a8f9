use std::io;
use std::io::SeekFrom;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncSeek, AsyncWrite, AsyncSeekExt, AsyncWriteExt, ReadBuf};
use crate::error::DownloadError;

/// A temporary backing store holding one fully downloaded payload.
///
/// Backed by an unnamed temporary file, so the payload disappears from disk
/// as soon as the stream is dropped. Returned by
/// [`open_as_stream`](crate::downloader::HttpDownloader::open_as_stream)
/// positioned at the start.
pub struct TempStream {
    file: File,
}

impl TempStream {
    pub(crate) fn create() -> crate::error::Result<TempStream> {
        match tempfile::tempfile() {
            Ok(file) => {
                Ok(TempStream {
                    file: File::from_std(file),
                })
            }
            Err(_e) => {
                Err(DownloadError::OpenOrCreateFile)
            }
        }
    }

    /// Flushes buffered writes and moves the cursor back to the start.
    pub(crate) async fn rewind(&mut self) -> crate::error::Result<()> {
        if let Err(_e) = self.file.flush().await {
            return Err(DownloadError::FileFlush);
        }
        if let Err(_e) = self.file.seek(SeekFrom::Start(0)).await {
            return Err(DownloadError::FileSeek);
        }

        Ok(())
    }
}

impl AsyncRead for TempStream {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.file).poll_read(cx, buf)
    }
}

impl AsyncWrite for TempStream {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.file).poll_write(cx, buf)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.file).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.file).poll_shutdown(cx)
    }
}

impl AsyncSeek for TempStream {
    fn start_seek(mut self: Pin<&mut Self>, position: SeekFrom) -> io::Result<()> {
        Pin::new(&mut self.file).start_seek(position)
    }

    fn poll_complete(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<u64>> {
        Pin::new(&mut self.file).poll_complete(cx)
    }
}
