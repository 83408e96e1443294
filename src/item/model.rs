//! Item domain types.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Condition of a submitted item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// New, unused item.
    Baru,
    /// Second-hand item.
    Bekas,
}

impl Condition {
    /// String form as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Baru => "baru",
            Condition::Bekas => "bekas",
        }
    }
}

impl FromStr for Condition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baru" => Ok(Condition::Baru),
            "bekas" => Ok(Condition::Bekas),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a submitted item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Elektronik,
    Fashion,
    Makanan,
    Lainnya,
}

impl Category {
    /// String form as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Elektronik => "elektronik",
            Category::Fashion => "fashion",
            Category::Makanan => "makanan",
            Category::Lainnya => "lainnya",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "elektronik" => Ok(Category::Elektronik),
            "fashion" => Ok(Category::Fashion),
            "makanan" => Ok(Category::Makanan),
            "lainnya" => Ok(Category::Lainnya),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted image formats, keyed by declared MIME type.
///
/// Only values of this type reach filename generation, so a stored file's
/// extension is always one of `jpg`, `png`, `gif`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Jpeg,
    Png,
    Gif,
}

impl ImageType {
    /// Parse a declared content type against the allow-list.
    pub fn from_mime(content_type: &str) -> Option<Self> {
        match content_type {
            "image/jpeg" => Some(ImageType::Jpeg),
            "image/png" => Some(ImageType::Png),
            "image/gif" => Some(ImageType::Gif),
            _ => None,
        }
    }

    /// File extension for this image type.
    pub fn ext(&self) -> &'static str {
        match self {
            ImageType::Jpeg => "jpg",
            ImageType::Png => "png",
            ImageType::Gif => "gif",
        }
    }
}

/// Raw item submission as collected from the multipart form.
///
/// All fields are untyped strings plus the raw image payload; [`crate::item::validate`]
/// turns a draft into an [`ItemSubmission`] or rejects it whole.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    /// Item name.
    pub nama: String,
    /// Price, as submitted text.
    pub harga: String,
    /// Free-text description.
    pub deskripsi: String,
    /// Condition, as submitted text.
    pub kondisi: String,
    /// Category, as submitted text.
    pub kategori: String,
    /// Declared content type of the uploaded image.
    pub content_type: String,
    /// Raw image bytes.
    pub image: Vec<u8>,
}

/// A fully validated item submission.
///
/// Either every field satisfied its constraint and the submission is accepted,
/// or the draft was rejected; there is no partially valid state.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSubmission {
    pub nama: String,
    pub harga: f64,
    pub deskripsi: String,
    pub kondisi: Condition,
    pub kategori: Category,
    pub image_type: ImageType,
    pub image: Vec<u8>,
}
