//! Copies texture and sound files next to the generated defs

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::generator::{thing_tex_path, worn_tex_path};
use crate::model::{Apparel, Category, Collection, Record, RecordStore};
use crate::ui::Ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Texture,
    WornTexture,
    Sound,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Texture => write!(f, "texture"),
            AssetKind::WornTexture => write!(f, "worn texture"),
            AssetKind::Sound => write!(f, "sound"),
        }
    }
}

/// An asset that could not be copied. Generation carries on without it.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetFailure {
    pub def_name: String,
    pub kind: AssetKind,
    pub source: PathBuf,
    pub reason: String,
}

impl fmt::Display for AssetFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:?}: {}",
            self.def_name, self.kind, self.source, self.reason
        )
    }
}

fn texture_file(mod_dir: &Path, tex_path: &str) -> PathBuf {
    mod_dir.join("Textures").join(format!("{}.png", tex_path))
}

/// Destination of a texture: `Textures/Things/<defName>.png`
pub fn texture_destination(mod_dir: &Path, def_name: &str) -> PathBuf {
    texture_file(mod_dir, &thing_tex_path(def_name))
}

/// Destination of the on-pawn apparel texture: `Textures/Things/Apparel/<defName>.png`
pub fn worn_texture_destination(mod_dir: &Path, def_name: &str) -> PathBuf {
    texture_file(mod_dir, &worn_tex_path(def_name))
}

/// Destination of a sound: `Sounds/<defName>.<ext>`, keeping the source extension
pub fn sound_destination(mod_dir: &Path, def_name: &str, source: &Path) -> PathBuf {
    let file_name = match source.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}", def_name, ext),
        None => def_name.to_string(),
    };
    mod_dir.join("Sounds").join(file_name)
}

/// Collects copied files and failures over one mod
pub struct AssetCopier<'a> {
    mod_dir: &'a Path,
    pub copied: Vec<PathBuf>,
    pub failures: Vec<AssetFailure>,
}

impl<'a> AssetCopier<'a> {
    pub fn new(mod_dir: &'a Path) -> Self {
        Self {
            mod_dir,
            copied: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Copy the assets of every record in the given categories
    pub fn copy_store(&mut self, store: &RecordStore, categories: &[Category], ui: &mut impl Ui) {
        for &category in categories {
            match category {
                Category::Item => self.copy_records(store.items(), ui),
                Category::Weapon => self.copy_records(store.weapons(), ui),
                Category::Building => self.copy_records(store.buildings(), ui),
                Category::Apparel => {
                    self.copy_records(store.apparel(), ui);
                    self.copy_worn_textures(store.apparel(), ui);
                }
                Category::Drug => self.copy_records(store.drugs(), ui),
                Category::Workbench => self.copy_records(store.workbenches(), ui),
                Category::Research | Category::Recipe => {}
            }
        }
    }

    fn copy_records<T: Record>(&mut self, records: &Collection<T>, ui: &mut impl Ui) {
        for record in records {
            if let Some(texture) = record.texture() {
                let dest = texture_destination(self.mod_dir, record.def_name());
                self.copy(record.def_name(), AssetKind::Texture, texture, dest, ui);
            }
            if let Some(sound) = record.sound() {
                let dest = sound_destination(self.mod_dir, record.def_name(), sound);
                self.copy(record.def_name(), AssetKind::Sound, sound, dest, ui);
            }
        }
    }

    /// Apparel textures also go where `wornGraphicPath` points. Missing
    /// sources were already reported by `copy_records`.
    fn copy_worn_textures(&mut self, apparel: &Collection<Apparel>, ui: &mut impl Ui) {
        for record in apparel {
            if let Some(texture) = record.texture().filter(|t| t.is_file()) {
                let dest = worn_texture_destination(self.mod_dir, record.def_name());
                self.copy(record.def_name(), AssetKind::WornTexture, texture, dest, ui);
            }
        }
    }

    fn copy(
        &mut self,
        def_name: &str,
        kind: AssetKind,
        source: &Path,
        dest: PathBuf,
        ui: &mut impl Ui,
    ) {
        match copy_file(source, &dest) {
            Ok(()) => {
                ui.log(format!("Copied {} for {}", kind, def_name));
                self.copied.push(dest);
            }
            Err(reason) => {
                let failure = AssetFailure {
                    def_name: def_name.to_string(),
                    kind,
                    source: source.to_path_buf(),
                    reason,
                };
                ui.warn(failure.to_string());
                self.failures.push(failure);
            }
        }
    }
}

fn copy_file(source: &Path, dest: &Path) -> std::result::Result<(), String> {
    if !source.is_file() {
        return Err("file not found".to_string());
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    fs::copy(source, dest).map(|_| ()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destinations() {
        let root = Path::new("/mods/Berry");
        assert_eq!(
            texture_destination(root, "Berry"),
            Path::new("/mods/Berry/Textures/Things/Berry.png")
        );
        assert_eq!(
            worn_texture_destination(root, "Duster"),
            Path::new("/mods/Berry/Textures/Things/Apparel/Duster.png")
        );
        assert_eq!(
            sound_destination(root, "Berry", Path::new("/tmp/crunch.ogg")),
            Path::new("/mods/Berry/Sounds/Berry.ogg")
        );
        assert_eq!(
            sound_destination(root, "Berry", Path::new("/tmp/crunch")),
            Path::new("/mods/Berry/Sounds/Berry")
        );
    }
}
