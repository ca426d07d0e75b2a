use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

use super::assets::{AssetCopier, AssetFailure};
use super::skeleton::{create_mod_dirs, write_placeholders};
use crate::generator::{generate_about, generate_language_data, Generator, ResearchMode};
use crate::model::{Category, ALL_CATEGORIES};
use crate::project::ModProject;
use crate::ui::{Phase, Ui};
use crate::xml::{to_xml_string, Element};

pub const ABOUT_FILE: &str = "About/About.xml";
pub const DEFS_DIR: &str = "Defs";
pub const PATCH_FILE: &str = "Patches/ResearchUnlocks.xml";
pub const LANGUAGE_FILE: &str = "Languages/English/Keyed/ModLanguage.xml";

/// How a mod folder gets written
#[derive(Debug, Clone)]
pub struct WriteOptions {
    pub research_mode: ResearchMode,
    /// Categories to write, in catalog order
    pub categories: Vec<Category>,
    /// Replace an existing mod folder
    pub overwrite: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            research_mode: ResearchMode::Inline,
            categories: ALL_CATEGORIES.iter().map(|c| c.category).collect(),
            overwrite: false,
        }
    }
}

/// What a successful run produced
#[derive(Debug, Default)]
pub struct WriteSummary {
    pub mod_dir: PathBuf,
    /// Generated XML files, in write order
    pub files: Vec<PathBuf>,
    /// Records written across all category files
    pub records: usize,
    /// Placeholder files for the preview image and selected components
    pub placeholders: Vec<PathBuf>,
    pub assets: Vec<PathBuf>,
    pub asset_failures: Vec<AssetFailure>,
}

/// Serialize a document to `path`, creating parent directories
pub fn write_document(path: &Path, root: &Element) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    let xml = to_xml_string(root).with_context(|| format!("Failed to render: {:?}", path))?;
    fs::write(path, xml).with_context(|| format!("Failed to write: {:?}", path))
}

/// The mod name becomes one folder under the output root; anything that
/// could resolve elsewhere is refused
pub fn mod_folder_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Mod name is required");
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(name),
        _ => bail!("Mod name '{}' must be a plain folder name", name),
    }
}

fn prepare_mod_dir(mod_dir: &Path, overwrite: bool) -> Result<()> {
    if mod_dir.exists() {
        if !overwrite {
            bail!(
                "Mod folder {:?} already exists (use --force to replace it)",
                mod_dir
            );
        }
        fs::remove_dir_all(mod_dir)
            .with_context(|| format!("Failed to remove existing mod folder: {:?}", mod_dir))?;
    }
    fs::create_dir_all(mod_dir)
        .with_context(|| format!("Failed to create mod folder: {:?}", mod_dir))
}

/// Write the complete mod folder `<output_root>/<mod name>/`.
///
/// A category that fails to generate stops the run; files written before it
/// stay on disk. Asset copy failures are collected in the summary instead.
pub fn write_mod(
    project: &ModProject,
    output_root: &Path,
    options: &WriteOptions,
    ui: &mut impl Ui,
) -> Result<WriteSummary> {
    let mod_dir = output_root.join(mod_folder_name(&project.info.name)?);
    prepare_mod_dir(&mod_dir, options.overwrite)?;
    create_mod_dirs(&mod_dir)?;
    let mut summary = WriteSummary {
        mod_dir: mod_dir.clone(),
        ..Default::default()
    };

    ui.set_phase(Phase::Generating);
    ui.set_info(format!("Writing {:?}", mod_dir));

    let about = mod_dir.join(ABOUT_FILE);
    write_document(&about, &generate_about(&project.info))?;
    ui.wrote(ABOUT_FILE, None);
    summary.files.push(about);

    let store = &project.store;
    let generator = Generator::new(store, options.research_mode);

    if project.components.include_defs {
        let pending: Vec<Category> = options
            .categories
            .iter()
            .copied()
            .filter(|c| store.len(*c) > 0)
            .collect();

        for (i, &category) in pending.iter().enumerate() {
            let file_name = category.file_name();
            ui.set_progress(i as u64, pending.len() as u64, file_name);

            let defs = generator
                .generate(category)
                .with_context(|| format!("Failed to generate {}", file_name))?;
            let path = mod_dir.join(DEFS_DIR).join(file_name);
            write_document(&path, &defs)?;

            ui.wrote(&format!("{}/{}", DEFS_DIR, file_name), Some(defs.children.len()));
            summary.records += store.len(category);
            summary.files.push(path);
        }
        ui.set_progress(pending.len() as u64, pending.len() as u64, "Defs");
        ui.clear_progress();
    }

    if let Some(patch) = generator.patches() {
        let path = mod_dir.join(PATCH_FILE);
        write_document(&path, &patch)?;
        ui.wrote(PATCH_FILE, Some(patch.children.len()));
        summary.files.push(path);
    }

    if project.components.include_languages {
        let path = mod_dir.join(LANGUAGE_FILE);
        write_document(&path, &generate_language_data(store))?;
        ui.wrote(LANGUAGE_FILE, None);
        summary.files.push(path);
    }

    for (name, path) in write_placeholders(&mod_dir, &project.components)? {
        ui.wrote(name, None);
        summary.placeholders.push(path);
    }

    ui.set_phase(Phase::CopyingAssets);
    let mut copier = AssetCopier::new(&mod_dir);
    copier.copy_store(store, &options.categories, ui);
    summary.assets = copier.copied;
    summary.asset_failures = copier.failures;

    Ok(summary)
}
