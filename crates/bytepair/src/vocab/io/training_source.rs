//! # Training Source IO

use std::path::Path;

use crate::errors::BPResult;

/// Load the raw bytes of a training source file.
///
/// A missing file is not an error: a warning is logged and an empty buffer
/// is returned (training on it then fails with
/// [`crate::errors::BytePairError::EmptySequence`]).
///
/// # Arguments
/// * `path` - the path to the source file.
///
/// # Returns
/// The file contents; or [`crate::errors::BytePairError::Io`] for other
/// read failures.
pub fn load_training_bytes_path<P: AsRef<Path>>(path: P) -> BPResult<Vec<u8>> {
    let path = path.as_ref();
    if !path.exists() {
        log::warn!("{} does not exist; using an empty training source", path.display());
        return Ok(Vec::new());
    }

    let bytes = std::fs::read(path)?;
    log::info!("Loaded {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_training_bytes() {
        tempdir::TempDir::new("training_source_test")
            .and_then(|dir| {
                let path = dir.path().join("corpus.txt");
                std::fs::write(&path, "to be or not to be")?;

                assert_eq!(
                    load_training_bytes_path(&path).unwrap(),
                    b"to be or not to be".to_vec()
                );

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir::TempDir::new("training_source_test").unwrap();
        let path = dir.path().join("missing.txt");

        assert!(load_training_bytes_path(&path).unwrap().is_empty());
    }
}
