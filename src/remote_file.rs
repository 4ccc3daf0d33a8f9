use reqwest::header::HeaderMap;

/// What the response headers declare about the payload.
pub struct RemoteFileInfo {
    /// Declared content length, if the server sent a parseable one.
    pub total_length: Option<u64>,
}

impl RemoteFileInfo {
    pub fn new(head_map: &HeaderMap) -> Self {
        let mut total_length = None;
        if let Some(content_length) = head_map.get("content-length") {
            if let Ok(content_length_str) = content_length.to_str() {
                if let Ok(length) = content_length_str.parse() {
                    total_length = Some(length);
                }
            }
        }

        Self {
            total_length,
        }
    }
}
