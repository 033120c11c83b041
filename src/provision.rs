use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::util::fs::{DirState, ensure_dir, inspect_dir};

/// Location of the image directory relative to the executable.
pub const IMAGES_DIR: &str = "data/images";
pub const PLACEHOLDER_NAME: &str = "test.txt";
pub const PLACEHOLDER_CONTENTS: &str = "Questo è un file di test";

pub const STARTUP_MESSAGE: &str = "Creazione directory per immagini completata";
pub const PLACEHOLDER_MESSAGE: &str = "File di test creato";

impl DirState {
    /// Status line printed after `ensure_directory`.
    pub fn message(&self, path: &Utf8Path) -> String {
        match self {
            DirState::Created => format!("Cartella creata: {}", path),
            DirState::Existed => format!("Cartella già esistente: {}", path),
        }
    }
}

/// Owns the resolved target directory for a single run.
#[derive(Debug, Clone)]
pub struct Provisioner {
    target: Utf8PathBuf,
}

impl Provisioner {
    /// Anchor the image directory under `base`.
    pub fn new(base: &Utf8Path) -> Self {
        Self {
            target: base.join(IMAGES_DIR),
        }
    }

    /// Anchor the image directory next to the running executable.
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe().context("locating current executable")?;
        let exe = Utf8PathBuf::from_path_buf(exe)
            .map_err(|path| anyhow!("executable path is not valid UTF-8: {}", path.display()))?;
        let base = exe
            .parent()
            .ok_or_else(|| anyhow!("executable {} has no parent directory", exe))?;
        debug!(exe = %exe, "resolved executable location");
        Ok(Self::new(base))
    }

    pub fn target(&self) -> &Utf8Path {
        &self.target
    }

    pub fn placeholder_path(&self) -> Utf8PathBuf {
        self.target.join(PLACEHOLDER_NAME)
    }

    /// Read-only counterpart of `ensure_directory`, used by dry runs.
    pub fn plan_directory(&self) -> Result<DirState> {
        inspect_dir(self.target.as_std_path())
            .with_context(|| format!("creating directory {}", self.target))
    }

    pub fn ensure_directory(&self) -> Result<DirState> {
        let state = ensure_dir(self.target.as_std_path())
            .with_context(|| format!("creating directory {}", self.target))?;
        match state {
            DirState::Created => info!(path = %self.target, "created directory"),
            DirState::Existed => debug!(path = %self.target, "directory already present"),
        }
        Ok(state)
    }

    /// Overwrites any previous placeholder content.
    pub fn write_placeholder_file(&self) -> Result<Utf8PathBuf> {
        let path = self.placeholder_path();
        fs::write(&path, PLACEHOLDER_CONTENTS).with_context(|| format!("writing {}", path))?;
        info!(path = %path, bytes = PLACEHOLDER_CONTENTS.len(), "wrote placeholder");
        Ok(path)
    }
}
