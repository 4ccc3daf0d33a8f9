//! Basic file download example.
//!
//! Downloads a file to disk while printing progress updates.
//!
//! Usage: cargo run --example download_file

use std::time::Duration;
use http_downloader::download_options::DownloadOptions;
use http_downloader::downloader::HttpDownloader;
use http_downloader::progress::DownloadProgress;

#[tokio::main]
async fn main() {
    let downloader = HttpDownloader::default();
    let options = DownloadOptions::new().set_timeout(Duration::from_secs(30));
    let progress = DownloadProgress::new();

    let mut percentage = progress.percentage();
    let mut bytes = progress.bytes_downloaded();
    let monitor = tokio::spawn(async move {
        while percentage.changed().await.is_ok() {
            let fraction = *percentage.borrow();
            let downloaded = *bytes.borrow_and_update();
            if fraction.is_infinite() {
                println!("Downloading: {} bytes (total size unknown)", downloaded);
            } else {
                println!("Downloading: {:.1}% ({} bytes)", fraction * 100.0, downloaded);
            }
        }
    });

    let result = downloader
        .download_to_path(
            "https://httpbin.org/bytes/102400",
            "./downloads/test_file.bin",
            Some(&progress),
            &options,
        )
        .await;

    drop(progress);
    let _ = monitor.await;

    match result {
        Ok(()) => println!("Download complete!"),
        Err(e) => eprintln!("Download failed: {}", e),
    }
}
