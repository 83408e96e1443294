//! Image storage for lapak.
//!
//! Accepted images live in a single flat directory, the upload root, which is
//! also the directory the static file route serves. Filenames are generated
//! (`img_<8 hex chars>.<ext>`) and are the only index; the process keeps no
//! registry of stored images.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::item::ImageType;
use crate::{LapakError, Result};

/// Length of the random hex portion of a generated filename.
const NAME_HEX_LEN: usize = 8;

/// Storage service for uploaded images.
#[derive(Debug, Clone)]
pub struct ImageStore {
    /// Upload root directory.
    base_path: PathBuf,
}

impl ImageStore {
    /// Create a new ImageStore rooted at the given path.
    ///
    /// The upload root is created if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;

        Ok(Self { base_path })
    }

    /// Get the upload root of this store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Generate a fresh stored filename for an image of the given type.
    ///
    /// Format: `img_` + 8 lowercase hex characters + `.` + extension. The hex
    /// portion comes from a v4 UUID, which makes collisions negligible for
    /// practical use without being a hard guarantee.
    pub fn generate_name(kind: ImageType) -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("img_{}.{}", &hex[..NAME_HEX_LEN], kind.ext())
    }

    /// Save image content under a newly generated name.
    ///
    /// The content is written to a dot-prefixed temporary file in the upload
    /// root and renamed into place, so a partially written file is never
    /// visible under its final name.
    ///
    /// Returns the stored filename.
    pub fn save(&self, content: &[u8], kind: ImageType) -> Result<String> {
        let stored_name = Self::generate_name(kind);
        let final_path = self.path_for(&stored_name);
        let tmp_path = self.base_path.join(format!(".{stored_name}.tmp"));

        fs::write(&tmp_path, content)?;
        if let Err(e) = fs::rename(&tmp_path, &final_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        Ok(stored_name)
    }

    /// Load image content from storage.
    pub fn load(&self, stored_name: &str) -> Result<Vec<u8>> {
        let file_path = self.path_for(stored_name);

        match fs::read(&file_path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(LapakError::NotFound(format!("image {stored_name}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check if an image exists in storage.
    pub fn exists(&self, stored_name: &str) -> bool {
        self.path_for(stored_name).exists()
    }

    /// Number of visible files in the upload root.
    ///
    /// Dotfiles (in-flight temporary writes) are not counted.
    pub fn count(&self) -> Result<usize> {
        let mut n = 0;
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            if !entry.file_name().to_string_lossy().starts_with('.') {
                n += 1;
            }
        }
        Ok(n)
    }

    /// Get the full path for a stored name.
    pub fn path_for(&self, stored_name: &str) -> PathBuf {
        self.base_path.join(stored_name)
    }
}
