//! Item domain: submitted marketplace items and their validation.

pub mod model;
pub mod validate;

pub use model::{Category, Condition, ImageType, ItemDraft, ItemSubmission};
pub use validate::{validate, ValidationError, MAX_IMAGE_BYTES};
