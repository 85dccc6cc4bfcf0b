use crate::core::Storage;
use crate::utils::error::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

// Path separators and control characters never reach the file system.
static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/\\\x00-\x1f\x7f]").unwrap());

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn sanitize_filename(name: &str) -> String {
        let cleaned = UNSAFE_FILENAME_CHARS.replace_all(name, "_");
        match cleaned.as_ref() {
            "" | "." | ".." => "_".to_string(),
            other => other.to_string(),
        }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let base = Path::new(&self.base_path);
        fs::create_dir_all(base)?;

        let full_path = base.join(Self::sanitize_filename(path));
        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}
