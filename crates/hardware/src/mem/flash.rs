//! Read-only flash image backend.
//!
//! Models the boot flash the core fetches firmware from: a byte buffer
//! mapped at address 0. Reads inside the loaded image return its bytes;
//! reads beyond it return 0 (erased flash), never a fault — so a core
//! running off flash only stalls if a different backend is substituted.

use std::fs;
use std::path::Path;

use crate::common::error::SimError;
use crate::mem::MemoryPort;

/// Read-only flash memory serving a raw firmware image from address 0.
#[derive(Clone, Debug, Default)]
pub struct Flash {
    data: Vec<u8>,
}

impl Flash {
    /// Creates an empty flash with capacity reserved for `size_bytes`.
    ///
    /// The size is a hint, not a limit: loading a larger image simply grows
    /// the buffer, matching the original flash model.
    pub fn new(size_bytes: usize) -> Self {
        Self {
            data: Vec::with_capacity(size_bytes),
        }
    }

    /// Creates a flash pre-loaded with the given image bytes.
    pub fn with_image(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Loads a firmware image from a file, replacing any previous contents.
    ///
    /// The file is treated as an opaque blob of little-endian instruction
    /// words; no container format is parsed.
    pub fn load_image_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SimError> {
        let path = path.as_ref();
        self.data = fs::read(path).map_err(|source| SimError::FirmwareLoad {
            path: path.display().to_string(),
            source,
        })?;
        Ok(())
    }

    /// Size of the loaded image in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no image has been loaded.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl MemoryPort for Flash {
    fn read8(&self, address: u32) -> Option<u8> {
        Some(self.data.get(address as usize).map_or(0, |byte| *byte))
    }
}
