//! Test infrastructure for storage tests.
//!
//! RAII-based cleanup: the temporary data directory disappears when the
//! environment is dropped, even if a test panics.

use anyhow::Result;
use tempfile::TempDir;

use super::connection::CsvConnection;

/// A CSV connection rooted in a temporary directory that is removed when the
/// environment is dropped.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path, for manual inspection if needed.
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
            // Environment dropped here
        }
        assert!(!base_path.exists());
        Ok(())
    }
}
