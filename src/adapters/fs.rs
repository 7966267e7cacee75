use crate::domain::ports::DocumentStore;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Reads input documents from the local filesystem. Paths are resolved
/// relative to `base_path` unless absolute.
#[derive(Debug, Clone)]
pub struct LocalDocuments {
    base_path: String,
}

impl LocalDocuments {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl DocumentStore for LocalDocuments {
    async fn read_document(&self, path: &str) -> Result<Vec<u8>> {
        let requested = Path::new(path);
        let full_path = if requested.is_absolute() {
            requested.to_path_buf()
        } else {
            Path::new(&self.base_path).join(requested)
        };
        let data = fs::read(full_path)?;
        Ok(data)
    }
}
