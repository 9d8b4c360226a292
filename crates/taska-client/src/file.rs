//! File selected in the creation form
//!
//! Only the name and size are shown; nothing is uploaded.

use std::path::Path;

const BYTES_PER_MB: f64 = 1_048_576.0;

/// A file picked by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
    pub content_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        let name = name.into();
        let content_type = mime_guess::from_path(&name)
            .first_or_octet_stream()
            .to_string();
        Self {
            name,
            size_bytes,
            content_type,
        }
    }

    /// Read the name and size of a file on disk
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a file", path.display()),
            ));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, metadata.len()))
    }

    /// Size in megabytes rounded to one decimal, halves away from zero
    pub fn size_mb(&self) -> f64 {
        (self.size_bytes as f64 * 10.0 / BYTES_PER_MB).round() / 10.0
    }

    pub fn display(&self) -> FileDisplay {
        let size_mb = self.size_mb();
        FileDisplay {
            name: self.name.clone(),
            size_mb,
            label: format!("{:.1} Мб", size_mb),
        }
    }
}

/// What the form shows for the selected file
#[derive(Debug, Clone, PartialEq)]
pub struct FileDisplay {
    pub name: String,
    pub size_mb: f64,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_rounded_to_one_decimal() {
        assert_eq!(SelectedFile::new("a.pdf", 0).size_mb(), 0.0);
        assert_eq!(SelectedFile::new("a.pdf", 1_048_576).size_mb(), 1.0);
        assert_eq!(SelectedFile::new("a.pdf", 2_500_000).size_mb(), 2.4);
        // 0.05 MB rounds up
        assert_eq!(SelectedFile::new("a.pdf", 52_429).size_mb(), 0.1);
        assert_eq!(SelectedFile::new("a.pdf", 52_428).size_mb(), 0.0);
    }

    #[test]
    fn test_display_label() {
        let display = SelectedFile::new("brief.pdf", 3_145_728).display();
        assert_eq!(display.name, "brief.pdf");
        assert_eq!(display.size_mb, 3.0);
        assert_eq!(display.label, "3.0 Мб");
    }

    #[test]
    fn test_content_type_is_guessed() {
        assert_eq!(SelectedFile::new("brief.pdf", 1).content_type, "application/pdf");
        assert_eq!(
            SelectedFile::new("brief", 1).content_type,
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn test_from_path_reads_metadata() {
        let path = std::env::temp_dir().join("taska-client-brief.txt");
        tokio::fs::write(&path, vec![b'x'; 2048]).await.unwrap();

        let file = SelectedFile::from_path(&path).await.unwrap();
        assert_eq!(file.name, "taska-client-brief.txt");
        assert_eq!(file.size_bytes, 2048);
        assert_eq!(file.content_type, "text/plain");

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_from_path_rejects_directories() {
        let err = SelectedFile::from_path(std::env::temp_dir()).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
