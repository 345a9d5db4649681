use std::path::PathBuf;
use thiserror::Error;

/// Where the engine loads its high score from and saves it back to.
///
/// Stores are collaborators, not rule-keepers: the engine reads once at
/// startup, writes whenever the high score rises, and shrugs off failures
/// in either direction, falling back to the value it holds in memory.
pub trait HighScoreStore {
    /// Load the stored high score.  A store that has never been written to
    /// reports 0, not an error.
    fn load(&self) -> Result<u32, LoadError>;

    /// Persist a new high score.
    fn save(&mut self, score: u32) -> Result<(), SaveError>;
}

/// High score kept as a JSON number in a file on disk
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> HighScoreFile {
        HighScoreFile { path: path.into() }
    }

    /// Return the default high score file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("highscore.json"))
    }
}

impl HighScoreStore for HighScoreFile {
    fn load(&self) -> Result<u32, LoadError> {
        let src = match fs_err::read(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice(&src).map_err(LoadError::deserialize)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(&score).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(&self.path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

/// A store that never touches disk, for hosts that opt out of persistence
/// and for tests
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MemoryStore(u32);

impl MemoryStore {
    pub fn new(score: u32) -> MemoryStore {
        MemoryStore(score)
    }

    /// The last score saved (or the seed value, if none was)
    pub fn get(self) -> u32 {
        self.0
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, LoadError> {
        Ok(self.0)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        self.0 = score;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    /// Wrap an I/O failure, for store implementations outside this crate
    pub fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high score to disk")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    /// Wrap an I/O failure, for store implementations outside this crate
    pub fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high score")]
    Deserialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_loads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreFile::new(dir.path().join("highscore.json"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HighScoreFile::new(dir.path().join("highscore.json"));
        store.save(42).unwrap();
        assert_eq!(store.load().unwrap(), 42);
        store.save(99).unwrap();
        assert_eq!(store.load().unwrap(), 99);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("gridsnake").join("highscore.json");
        let mut store = HighScoreFile::new(&path);
        store.save(7).unwrap();
        let content = fs_err::read_to_string(&path).unwrap();
        assert_eq!(content, "7\n");
    }

    #[test]
    fn unparseable_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        fs_err::write(&path, "not a score").unwrap();
        let store = HighScoreFile::new(&path);
        assert!(store.load().is_err());
    }

    #[test]
    fn memory_store() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load().unwrap(), 0);
        store.save(5).unwrap();
        assert_eq!(store.load().unwrap(), 5);
        assert_eq!(store.get(), 5);
    }
}
