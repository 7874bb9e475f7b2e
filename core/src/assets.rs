//! Best-effort local image lookup
//!
//! Pages reference images by file name. A file that is missing, unreadable
//! or not an image is expected: the page shows a notice naming the file
//! instead, and rendering carries on.

use crate::error::AssetError;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Bytes needed to recognize every supported format
const SNIFF_LEN: usize = 12;

/// Recognized image container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
    Bmp,
}

impl ImageFormat {
    /// Identify a format from the leading bytes of a file
    pub fn sniff(header: &[u8]) -> Option<Self> {
        match header {
            [0x89, b'P', b'N', b'G', ..] => Some(Self::Png),
            [0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
            [b'G', b'I', b'F', b'8', ..] => Some(Self::Gif),
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some(Self::Webp),
            [b'B', b'M', ..] => Some(Self::Bmp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Gif => "GIF",
            Self::Webp => "WebP",
            Self::Bmp => "BMP",
        }
    }
}

/// A successfully opened image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub path: PathBuf,
    pub file_name: String,
    pub format: ImageFormat,
    pub byte_len: u64,
}

/// Outcome of an image lookup, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    /// The image was found
    Loaded { asset: ImageAsset, caption: String },
    /// The image could not be read; `notice` names the expected file
    Missing { file_name: String, notice: String },
}

impl ImageSlot {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ImageSlot::Loaded { .. })
    }
}

/// Notice shown in place of a missing card image
pub fn missing_image_notice(file_name: &str) -> String {
    format!("To show an image here, save '{file_name}' in the project folder.")
}

/// Notice shown in place of a missing profile photo
pub fn missing_photo_notice(file_name: &str) -> String {
    format!("To add a profile photo, save '{file_name}' in the project folder.")
}

/// Resolves image file names against an asset directory
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    /// Create a resolver rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a file name resolves to; absolute names are kept as-is
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        let candidate = Path::new(file_name);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.root.join(candidate)
        }
    }

    /// Open an image and check that it looks like one
    pub fn load(&self, file_name: &str) -> Result<ImageAsset, AssetError> {
        let path = self.resolve(file_name);
        let unavailable = |reason: String| AssetError {
            path: path.clone(),
            file_name: file_name.to_string(),
            reason,
        };

        let mut file = File::open(&path).map_err(|e| unavailable(e.to_string()))?;
        let byte_len = file
            .metadata()
            .map_err(|e| unavailable(e.to_string()))?
            .len();

        let mut header = [0u8; SNIFF_LEN];
        let mut filled = 0;
        while filled < SNIFF_LEN {
            match file.read(&mut header[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(unavailable(e.to_string())),
            }
        }

        let format = ImageFormat::sniff(&header[..filled])
            .ok_or_else(|| unavailable("not a recognized image format".to_string()))?;

        Ok(ImageAsset {
            path,
            file_name: file_name.to_string(),
            format,
            byte_len,
        })
    }

    /// Look up an image, turning failure into a display notice.
    ///
    /// Never fails: an unavailable file becomes [`ImageSlot::Missing`].
    pub fn slot(
        &self,
        file_name: &str,
        caption: &str,
        notice: impl FnOnce(&str) -> String,
    ) -> ImageSlot {
        match self.load(file_name) {
            Ok(asset) => ImageSlot::Loaded {
                asset,
                caption: caption.to_string(),
            },
            Err(err) => {
                debug!(file = %file_name, error = %err, "image unavailable, showing notice");
                ImageSlot::Missing {
                    file_name: file_name.to_string(),
                    notice: notice(file_name),
                }
            }
        }
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

    #[test]
    fn test_missing_file_becomes_notice() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = AssetResolver::new(dir.path());
        let slot = resolver.slot("algorithm.jpg", "Algorithms", missing_image_notice);
        match slot {
            ImageSlot::Missing { file_name, notice } => {
                assert_eq!(file_name, "algorithm.jpg");
                assert!(notice.contains("'algorithm.jpg'"));
            }
            other => panic!("expected missing slot, got {:?}", other),
        }
    }

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = File::create(dir.path().join("me.png")).unwrap();
        file.write_all(PNG_HEADER).unwrap();

        let resolver = AssetResolver::new(dir.path());
        let asset = resolver.load("me.png").expect("png should load");
        assert_eq!(asset.format, ImageFormat::Png);
        assert_eq!(asset.byte_len, PNG_HEADER.len() as u64);
        assert!(resolver.slot("me.png", "Me", missing_photo_notice).is_loaded());
    }

    #[test]
    fn test_non_image_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.jpg"), b"plain text").unwrap();

        let resolver = AssetResolver::new(dir.path());
        let err = resolver.load("notes.jpg").unwrap_err();
        assert_eq!(err.file_name, "notes.jpg");
        assert!(err.reason.contains("not a recognized image format"));
    }

    #[test]
    fn test_empty_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("empty.png"), b"").unwrap();
        assert!(AssetResolver::new(dir.path()).load("empty.png").is_err());
    }

    #[test]
    fn test_sniff_formats() {
        assert_eq!(ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(b"GIF89a"), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::sniff(b"RIFF\0\0\0\0WEBP"), Some(ImageFormat::Webp));
        assert_eq!(ImageFormat::sniff(b"BM"), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::sniff(b"RIFF\0\0\0\0WAVE"), None);
        assert_eq!(ImageFormat::sniff(b""), None);
    }

    #[test]
    fn test_absolute_names_bypass_root() {
        let resolver = AssetResolver::new("/srv/assets");
        let absolute = std::env::temp_dir().join("x.png");
        assert_eq!(resolver.resolve(absolute.to_str().unwrap()), absolute);
        assert_eq!(
            resolver.resolve("x.png"),
            PathBuf::from("/srv/assets").join("x.png")
        );
    }
}
