use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = MergeError::Read {
            path: "/etc/starship/preset.toml".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read"));
        assert!(msg.contains("preset.toml"));
    }

    #[test]
    fn write_error_names_the_path() {
        let err = MergeError::Write {
            path: "/home/user/.config/starship.toml".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to write"));
        assert!(msg.contains("starship.toml"));
    }
}
