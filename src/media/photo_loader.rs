// SPDX-License-Identifier: MPL-2.0
//! Turns listing photo references into image handles.
//!
//! References are either `http(s)://` URLs, `file://` URLs or plain file
//! paths. Payloads are size-limited, time-limited and checked to be a known
//! image format before they reach the renderer.

use crate::domain::listing::ImageSource;
use crate::error::PhotoError;
use iced::widget::image::Handle;
use std::path::PathBuf;
use std::time::Duration;

use crate::app::config::{DEFAULT_PHOTO_MAX_BYTES, DEFAULT_PHOTO_TIMEOUT_SECS};

const USER_AGENT: &str = concat!("IcedRentals/", env!("CARGO_PKG_VERSION"));

/// Limits applied to every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchLimits {
    pub max_bytes: usize,
    pub timeout: Duration,
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_PHOTO_MAX_BYTES,
            timeout: Duration::from_secs(DEFAULT_PHOTO_TIMEOUT_SECS),
        }
    }
}

/// Where a reference points to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    Remote(String),
    Local(PathBuf),
}

fn locate(source: &ImageSource) -> Result<Location, PhotoError> {
    let uri = source.uri.trim();
    if uri.is_empty() {
        return Err(PhotoError::UnsupportedSource(source.uri.clone()));
    }

    if uri.starts_with("http://") || uri.starts_with("https://") {
        Ok(Location::Remote(uri.to_string()))
    } else if let Some(path) = uri.strip_prefix("file://") {
        Ok(Location::Local(PathBuf::from(path)))
    } else if uri.contains("://") || uri.starts_with("data:") {
        Err(PhotoError::UnsupportedSource(source.uri.clone()))
    } else {
        Ok(Location::Local(PathBuf::from(uri)))
    }
}

/// Loads one photo.
pub async fn load(source: ImageSource, limits: FetchLimits) -> Result<Handle, PhotoError> {
    let bytes = match locate(&source)? {
        Location::Remote(url) => fetch_remote(&url, limits).await?,
        Location::Local(path) => {
            tokio::time::timeout(limits.timeout, read_local(path, limits.max_bytes))
                .await
                .map_err(|_| PhotoError::TimedOut)??
        }
    };

    image_rs::guess_format(&bytes).map_err(|_| PhotoError::NotAnImage)?;
    Ok(Handle::from_bytes(bytes))
}

async fn read_local(path: PathBuf, max_bytes: usize) -> Result<Vec<u8>, PhotoError> {
    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| PhotoError::Transfer(format!("{}: {e}", path.display())))?;

    if usize::try_from(metadata.len()).map_or(true, |len| len > max_bytes) {
        return Err(PhotoError::TooLarge { limit: max_bytes });
    }

    tokio::fs::read(&path)
        .await
        .map_err(|e| PhotoError::Transfer(format!("{}: {e}", path.display())))
}

async fn fetch_remote(url: &str, limits: FetchLimits) -> Result<Vec<u8>, PhotoError> {
    use futures_util::StreamExt;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .timeout(limits.timeout)
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(PhotoError::HttpStatus(response.status().as_u16()));
    }

    if let Some(length) = response.content_length() {
        if usize::try_from(length).map_or(true, |len| len > limits.max_bytes) {
            return Err(PhotoError::TooLarge {
                limit: limits.max_bytes,
            });
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len() + chunk.len() > limits.max_bytes {
            return Err(PhotoError::TooLarge {
                limit: limits.max_bytes,
            });
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes() -> Vec<u8> {
        let image = image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([200, 10, 10, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn locate_classifies_references() {
        assert_eq!(
            locate(&ImageSource::new("https://example.com/a.jpg")),
            Ok(Location::Remote("https://example.com/a.jpg".to_string()))
        );
        assert_eq!(
            locate(&ImageSource::new("file:///tmp/a.jpg")),
            Ok(Location::Local(PathBuf::from("/tmp/a.jpg")))
        );
        assert_eq!(
            locate(&ImageSource::new("photos/a.jpg")),
            Ok(Location::Local(PathBuf::from("photos/a.jpg")))
        );
    }

    #[test]
    fn locate_rejects_empty_and_foreign_schemes() {
        assert!(matches!(
            locate(&ImageSource::new("   ")),
            Err(PhotoError::UnsupportedSource(_))
        ));
        assert!(matches!(
            locate(&ImageSource::new("ftp://host/a.jpg")),
            Err(PhotoError::UnsupportedSource(_))
        ));
        assert!(matches!(
            locate(&ImageSource::new("data:image/png;base64,AAAA")),
            Err(PhotoError::UnsupportedSource(_))
        ));
    }

    #[tokio::test]
    async fn loads_local_png() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("photo.png");
        std::fs::write(&path, png_bytes()).expect("write png");

        let result = load(
            ImageSource::new(path.to_string_lossy().as_ref()),
            FetchLimits::default(),
        )
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejects_non_image_payload() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "just some text").expect("write text");

        let result = load(
            ImageSource::new(path.to_string_lossy().as_ref()),
            FetchLimits::default(),
        )
        .await;

        assert_eq!(result.err(), Some(PhotoError::NotAnImage));
    }

    #[tokio::test]
    async fn rejects_payload_over_limit() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("photo.png");
        std::fs::write(&path, png_bytes()).expect("write png");

        let limits = FetchLimits {
            max_bytes: 8,
            ..FetchLimits::default()
        };
        let result = load(ImageSource::new(path.to_string_lossy().as_ref()), limits).await;

        assert_eq!(result.err(), Some(PhotoError::TooLarge { limit: 8 }));
    }

    #[tokio::test]
    async fn missing_file_is_a_transfer_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("absent.png");

        let result = load(
            ImageSource::new(path.to_string_lossy().as_ref()),
            FetchLimits::default(),
        )
        .await;

        assert!(matches!(result, Err(PhotoError::Transfer(_))));
    }
}
