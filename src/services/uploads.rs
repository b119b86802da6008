//! Asset picture storage

use std::path::PathBuf;

use rand::Rng;

use crate::{
    config::UploadsConfig,
    error::{AppError, AppResult},
};

const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Strip path components and anything outside [A-Za-z0-9._-]
fn sanitize_filename(name: &str) -> String {
    let basename = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);
    basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[derive(Clone)]
pub struct UploadsService {
    directory: PathBuf,
}

impl UploadsService {
    pub fn new(config: &UploadsConfig) -> Self {
        Self {
            directory: PathBuf::from(&config.directory),
        }
    }

    /// Store an uploaded picture under a random hex prefix,
    /// returning the stored filename
    pub async fn store_picture(&self, original_name: &str, data: &[u8]) -> AppResult<String> {
        let sanitized = sanitize_filename(original_name);
        if !has_allowed_extension(&sanitized) {
            return Err(AppError::Validation(
                "Images only (jpg, jpeg, png)".to_string(),
            ));
        }

        let prefix: u64 = rand::thread_rng().gen();
        let filename = format!("{:016x}_{}", prefix, sanitized);

        tokio::fs::create_dir_all(&self.directory).await?;
        tokio::fs::write(self.directory.join(&filename), data).await?;

        Ok(filename)
    }

    /// Remove a stored picture. Best-effort: failures are logged and
    /// never propagated, record deletion must not be blocked by file I/O.
    pub async fn remove_picture(&self, filename: &str) {
        let path = self.directory.join(sanitize_filename(filename));
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!("Failed to remove picture {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UploadsConfig;

    #[test]
    fn sanitize_strips_paths_and_odd_characters() {
        assert_eq!(sanitize_filename("photo.jpg"), "photo.jpg");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\temp\\shot.png"), "shot.png");
        assert_eq!(sanitize_filename("my photo (1).jpeg"), "my_photo__1_.jpeg");
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(has_allowed_extension("a.jpg"));
        assert!(has_allowed_extension("a.JPEG"));
        assert!(has_allowed_extension("a.Png"));
        assert!(!has_allowed_extension("a.gif"));
        assert!(!has_allowed_extension("a.jpg.exe"));
        assert!(!has_allowed_extension("noextension"));
    }

    #[tokio::test]
    async fn store_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadsService::new(&UploadsConfig {
            directory: dir.path().to_string_lossy().into_owned(),
        });
        let err = service.store_picture("malware.exe", b"MZ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn store_and_remove_picture() {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadsService::new(&UploadsConfig {
            directory: dir.path().to_string_lossy().into_owned(),
        });
        let stored = service.store_picture("photo.jpg", b"fake-jpeg").await.unwrap();
        assert!(stored.ends_with("_photo.jpg"));
        assert!(dir.path().join(&stored).exists());

        service.remove_picture(&stored).await;
        assert!(!dir.path().join(&stored).exists());

        // Removing again must not fail
        service.remove_picture(&stored).await;
    }
}
