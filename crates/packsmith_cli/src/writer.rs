//! Project writer - the only filesystem edge of the scaffolder.
//!
//! Takes the rendered manifest and puts it on disk. Refuses a non-empty
//! target unless `--force`; filesystem errors pass through with context.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use packsmith_templates::Manifest;

pub struct ProjectWriter {
    root: PathBuf,
    force: bool,
}

impl ProjectWriter {
    pub fn new(root: PathBuf, force: bool) -> Self {
        Self { root, force }
    }

    pub fn write(&self, manifest: &Manifest) -> Result<()> {
        if self.root.exists() && !self.force && !is_empty_dir(&self.root)? {
            bail!(
                "Target directory {} is not empty. Use --force to write anyway.",
                self.root.display()
            );
        }

        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create {}", self.root.display()))?;
        for dir in &manifest.directories {
            let path = self.root.join(dir);
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
        }
        for file in &manifest.files {
            let path = self.root.join(&file.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, &file.contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            debug!(path = %file.path, "wrote file");
        }

        info!(
            "Wrote {} files to {}",
            manifest.files.len(),
            self.root.display()
        );
        Ok(())
    }
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    if !path.is_dir() {
        bail!("Target {} exists and is not a directory", path.display());
    }
    let mut entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(entries.next().is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use packsmith_templates::RenderedFile;

    fn sample_manifest() -> Manifest {
        Manifest {
            directories: vec!["src".to_string()],
            files: vec![
                RenderedFile {
                    path: "package.json".to_string(),
                    contents: "{}\n".to_string(),
                },
                RenderedFile {
                    path: "src/index.js".to_string(),
                    contents: "export {};\n".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_writes_manifest_to_fresh_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("pkg");
        ProjectWriter::new(root.clone(), false)
            .write(&sample_manifest())
            .unwrap();
        assert!(root.join("package.json").is_file());
        assert!(root.join("src/index.js").is_file());
    }

    #[test]
    fn test_refuses_non_empty_target() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("existing.txt"), "hi").unwrap();
        let err = ProjectWriter::new(tmp.path().to_path_buf(), false)
            .write(&sample_manifest())
            .unwrap_err();
        assert!(err.to_string().contains("not empty"));
    }

    #[test]
    fn test_force_writes_into_non_empty_target() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("existing.txt"), "hi").unwrap();
        ProjectWriter::new(tmp.path().to_path_buf(), true)
            .write(&sample_manifest())
            .unwrap();
        assert!(tmp.path().join("package.json").is_file());
        assert!(tmp.path().join("existing.txt").is_file());
    }

    #[test]
    fn test_empty_existing_directory_is_fine() {
        let tmp = tempfile::tempdir().unwrap();
        ProjectWriter::new(tmp.path().to_path_buf(), false)
            .write(&sample_manifest())
            .unwrap();
        assert!(tmp.path().join("package.json").is_file());
    }
}
