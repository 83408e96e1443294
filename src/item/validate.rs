//! Validation of submitted item drafts.
//!
//! Validation runs before any side effect, so a rejected submission never
//! leaves a file behind. Checks run in a fixed order (nama, kondisi, kategori,
//! harga, content type, size) and the first failure is the one reported.

use thiserror::Error;

use super::model::{Category, Condition, ImageType, ItemDraft, ItemSubmission};

/// Default maximum accepted image size in bytes. The boundary is inclusive:
/// an image of exactly this size is accepted.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Rejection reason for an invalid submission.
///
/// Display strings are the wire-level messages returned to the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nama wajib diisi")]
    EmptyName,
    #[error("Kondisi tidak valid")]
    InvalidCondition,
    #[error("Kategori tidak valid")]
    InvalidCategory,
    #[error("Harga tidak valid")]
    InvalidPrice,
    #[error("Harga tidak boleh negatif")]
    NegativePrice,
    #[error("Tipe file tidak valid. Hanya JPG/PNG/GIF")]
    InvalidFileType,
    #[error("Ukuran file maksimal {max_mb}MB")]
    FileTooLarge { max_mb: u64 },
}

/// Validate a draft, consuming it into a typed submission.
///
/// `max_image_bytes` is the inclusive size ceiling. Returns the first failing
/// check; a successful result means every field satisfied its constraint.
pub fn validate(
    draft: ItemDraft,
    max_image_bytes: usize,
) -> Result<ItemSubmission, ValidationError> {
    if draft.nama.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let kondisi: Condition = draft
        .kondisi
        .parse()
        .map_err(|_| ValidationError::InvalidCondition)?;

    let kategori: Category = draft
        .kategori
        .parse()
        .map_err(|_| ValidationError::InvalidCategory)?;

    let harga: f64 = draft
        .harga
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidPrice)?;
    if !harga.is_finite() {
        return Err(ValidationError::InvalidPrice);
    }
    if harga < 0.0 {
        return Err(ValidationError::NegativePrice);
    }

    let image_type =
        ImageType::from_mime(&draft.content_type).ok_or(ValidationError::InvalidFileType)?;

    if draft.image.len() > max_image_bytes {
        return Err(ValidationError::FileTooLarge {
            max_mb: (max_image_bytes / (1024 * 1024)) as u64,
        });
    }

    Ok(ItemSubmission {
        nama: draft.nama,
        harga,
        deskripsi: draft.deskripsi,
        kondisi,
        kategori,
        image_type,
        image: draft.image,
    })
}
