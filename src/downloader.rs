use std::path::Path;
use futures::StreamExt;
use reqwest::{Client, Response};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::channel;
use tokio::time::timeout;
use tracing::{debug, warn};
use crate::download_options::DownloadOptions;
use crate::error::DownloadError;
use crate::progress::DownloadProgress;
use crate::remote_file::RemoteFileInfo;
use crate::stream;
use crate::temp_stream::TempStream;

/// Streaming HTTP downloader over a shared [`Client`].
///
/// Payload bytes flow from the response body straight into the destination
/// sink; nothing buffers the whole payload in memory. Writes happen in
/// arrival order with at most one write in flight, while the read side may
/// run one chunk ahead.
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    pub fn new(client: Client) -> HttpDownloader {
        HttpDownloader {
            client,
        }
    }

    /// Downloads `url` into the file at `path`, creating or truncating it.
    /// The file handle is dropped on every exit path.
    pub async fn download_to_path(
        &self,
        url: &str,
        path: impl AsRef<Path>,
        progress: Option<&DownloadProgress>,
        options: &DownloadOptions,
    ) -> crate::error::Result<()> {
        let mut file = stream::create(path.as_ref()).await?;
        self.download_to_stream(url, &mut file, progress, options).await?;
        if let Err(_e) = file.flush().await {
            return Err(DownloadError::FileFlush);
        }

        Ok(())
    }

    /// Downloads `url` into `destination`. Resolves once the response body
    /// is exhausted and the last chunk's write has completed.
    pub async fn download_to_stream<W>(
        &self,
        url: &str,
        destination: &mut W,
        progress: Option<&DownloadProgress>,
        options: &DownloadOptions,
    ) -> crate::error::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        if url.is_empty() {
            return Err(DownloadError::Request("empty url".to_string()));
        }

        let result = self.client.get(url).send().await;
        let response = match result {
            Ok(response) => {
                match response.error_for_status() {
                    Ok(response) => response,
                    Err(e) => {
                        return Err(DownloadError::Request(e.to_string()));
                    }
                }
            }
            Err(e) => {
                return Err(DownloadError::Request(e.to_string()));
            }
        };

        let remote_file_info = RemoteFileInfo::new(response.headers());
        let total_length = remote_file_info.total_length;
        debug!(url, total_length, "response headers received");

        if let Some(progress) = progress {
            match total_length {
                Some(_) => progress.report_percentage(0f64),
                None => progress.report_percentage(f64::INFINITY),
            }
        }

        // The timeout covers body consumption and writing, not connection
        // setup. Dropping the pump cancels the in-flight read and write and
        // releases the response.
        let pump = pump_chunks(response, destination, progress, total_length);
        let result = tokio::select! {
            _ = options.cancel_token.cancelled() => {
                warn!(url, "download cancelled");
                Err(DownloadError::Cancelled)
            }
            result = timeout(options.timeout, pump) => {
                match result {
                    Ok(result) => result,
                    Err(_elapsed) => {
                        warn!(url, timeout_seconds = options.timeout.as_secs(), "download timed out");
                        Err(DownloadError::Timeout)
                    }
                }
            }
        };
        result?;

        // An empty payload with a declared length of zero sees no chunks,
        // so the final 1.0 is pushed here.
        if let (Some(progress), Some(0)) = (progress, total_length) {
            progress.report_percentage(1f64);
        }

        debug!(url, "download complete");
        Ok(())
    }

    /// Downloads `url` into a self-deleting temporary file and returns it
    /// positioned at the start.
    pub async fn open_as_stream(
        &self,
        url: &str,
        progress: Option<&DownloadProgress>,
        options: &DownloadOptions,
    ) -> crate::error::Result<TempStream> {
        let mut temp_stream = TempStream::create()?;
        self.download_to_stream(url, &mut temp_stream, progress, options).await?;
        temp_stream.rewind().await?;

        Ok(temp_stream)
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        HttpDownloader::new(Client::new())
    }
}

/// Pumps body chunks into the destination. The reader pushes progress for a
/// chunk before handing it to the writer; the capacity-1 channel lets the
/// reader fetch the next chunk while the previous one is being written, but
/// never lets two writes overlap.
async fn pump_chunks<W>(
    response: Response,
    destination: &mut W,
    progress: Option<&DownloadProgress>,
    total_length: Option<u64>,
) -> crate::error::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let (sender, mut receiver) = channel::<Vec<u8>>(1);

    let read = async move {
        let mut body = response.bytes_stream();
        let mut bytes_downloaded = 0u64;
        while let Some(chunk) = body.next().await {
            match chunk {
                Ok(bytes) => {
                    bytes_downloaded += bytes.len() as u64;
                    if let Some(progress) = progress {
                        if let Some(total_length) = total_length {
                            if total_length > 0 {
                                progress.report_percentage(bytes_downloaded as f64 / total_length as f64);
                            }
                        }
                        progress.report_bytes(bytes_downloaded);
                    }
                    // A closed channel means the writer bailed out; its
                    // error is the one to surface.
                    if sender.send(bytes.to_vec()).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    return Err(DownloadError::Request(e.to_string()));
                }
            }
        }
        Ok(())
    };

    let write = async move {
        while let Some(buffer) = receiver.recv().await {
            if let Err(e) = destination.write_all(&buffer).await {
                return Err(DownloadError::Write(e.to_string()));
            }
        }
        Ok(())
    };

    tokio::try_join!(read, write)?;
    Ok(())
}
