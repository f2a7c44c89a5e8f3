use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{Brand, Founder};
use crate::error::{CatalogError, Result};

/// Namespaces for attached image files. The same subdirectory layout is used
/// on both sides: under the seed assets root for candidate files and under
/// the media root for attached copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    BrandLogo,
    BrandHero,
    FounderPhoto,
}

impl AssetKind {
    pub fn dir(&self) -> &'static str {
        match self {
            AssetKind::BrandLogo => "brands/logos",
            AssetKind::BrandHero => "brands/hero",
            AssetKind::FounderPhoto => "founders",
        }
    }
}

/// File storage for image assets owned by catalog records. Attached files
/// live at `<root>/<kind dir>/<filename>`; records store the root-relative
/// path.
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a stored asset.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Copies `source` into the store under the namespace for `kind` and
    /// returns the root-relative path to record.
    pub fn attach(&self, kind: AssetKind, source: &Path) -> Result<String> {
        let file_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                CatalogError::Validation(format!(
                    "asset source '{}' has no usable file name",
                    source.display()
                ))
            })?;

        let relative = format!("{}/{}", kind.dir(), file_name);
        let dest = self.root.join(&relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &dest)?;
        debug!(asset = %relative, "attached media file");
        Ok(relative)
    }

    /// Removes a stored asset. Missing files are fine; the record may never
    /// have had its attachment resolved.
    pub fn remove(&self, relative: &str) -> Result<()> {
        match fs::remove_file(self.root.join(relative)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes every asset owned by a brand.
    pub fn release_brand(&self, brand: &Brand) -> Result<()> {
        if let Some(logo) = &brand.logo {
            self.remove(logo)?;
        }
        if let Some(hero) = &brand.hero_image {
            self.remove(hero)?;
        }
        Ok(())
    }

    /// Removes the photo owned by a founder.
    pub fn release_founder(&self, founder: &Founder) -> Result<()> {
        if let Some(photo) = &founder.photo {
            self.remove(photo)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn attach_copies_into_namespace() {
        let assets = tempdir().unwrap();
        let media = tempdir().unwrap();
        let source = assets.path().join("lumina.png");
        fs::write(&source, b"png bytes").unwrap();

        let store = MediaStore::new(media.path());
        let relative = store.attach(AssetKind::BrandLogo, &source).unwrap();

        assert_eq!(relative, "brands/logos/lumina.png");
        assert_eq!(fs::read(store.path(&relative)).unwrap(), b"png bytes");
    }

    #[test]
    fn remove_tolerates_missing_file() {
        let media = tempdir().unwrap();
        let store = MediaStore::new(media.path());
        store.remove("founders/nobody.jpg").unwrap();
    }

    #[test]
    fn remove_deletes_stored_file() {
        let assets = tempdir().unwrap();
        let media = tempdir().unwrap();
        let source = assets.path().join("alex.jpg");
        fs::write(&source, b"jpg").unwrap();

        let store = MediaStore::new(media.path());
        let relative = store.attach(AssetKind::FounderPhoto, &source).unwrap();
        assert!(store.path(&relative).is_file());

        store.remove(&relative).unwrap();
        assert!(!store.path(&relative).exists());
    }
}
