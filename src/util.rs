/// Filesystem helpers shared by the provisioner.
pub mod fs {
    use std::fs;
    use std::io;
    use std::path::Path;

    /// What `ensure_dir` found on disk.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum DirState {
        Created,
        Existed,
    }

    /// Report what `ensure_dir` would do without touching the filesystem.
    ///
    /// An existing entry that is not a directory is reported as an error
    /// instead of being treated as present.
    pub fn inspect_dir(path: &Path) -> io::Result<DirState> {
        if path.is_dir() {
            return Ok(DirState::Existed);
        }
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} exists and is not a directory", path.display()),
            ));
        }
        Ok(DirState::Created)
    }

    /// Ensure a directory exists, creating it recursively if needed.
    pub fn ensure_dir(path: &Path) -> io::Result<DirState> {
        let state = inspect_dir(path)?;
        if state == DirState::Created {
            fs::create_dir_all(path)?;
        }
        Ok(state)
    }

}
