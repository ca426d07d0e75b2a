//! Project file: mod info, component switches and every record, as JSON
//!
//! Loading pushes each record through [`RecordStore::insert`], so a project
//! file can never smuggle in a record the store would reject.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::generator::{ModInfo, ResearchMode};
use crate::model::{
    Apparel, Building, Drug, Item, Recipe, RecordStore, Research, Stored, Weapon, Workbench,
};

fn default_true() -> bool {
    true
}

/// Which optional parts of the mod get written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSettings {
    #[serde(default = "default_true")]
    pub include_defs: bool,
    /// Research unlocks go to a patch file instead of inline prerequisites
    #[serde(default)]
    pub include_patches: bool,
    #[serde(default)]
    pub include_assemblies: bool,
    #[serde(default)]
    pub include_textures: bool,
    #[serde(default)]
    pub include_sounds: bool,
    #[serde(default)]
    pub include_languages: bool,
}

impl Default for ComponentSettings {
    fn default() -> Self {
        Self {
            include_defs: true,
            include_patches: false,
            include_assemblies: false,
            include_textures: false,
            include_sounds: false,
            include_languages: false,
        }
    }
}

impl ComponentSettings {
    /// Research mode requested by the project itself
    pub fn research_mode(&self) -> Option<ResearchMode> {
        self.include_patches.then_some(ResearchMode::Patches)
    }
}

/// A mod being authored
#[derive(Debug, Clone, Default)]
pub struct ModProject {
    pub info: ModInfo,
    pub components: ComponentSettings,
    pub store: RecordStore,
}

/// On-disk layout of a project file
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProjectFile {
    #[serde(default)]
    mod_info: ModInfo,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    weapons: Vec<Weapon>,
    #[serde(default)]
    buildings: Vec<Building>,
    #[serde(default, alias = "apparel")]
    cosmetics: Vec<Apparel>,
    #[serde(default)]
    drugs: Vec<Drug>,
    #[serde(default)]
    workbenches: Vec<Workbench>,
    #[serde(default)]
    research: Vec<Research>,
    #[serde(default)]
    recipes: Vec<Recipe>,
    #[serde(default)]
    settings: ComponentSettings,
}

fn insert_all<T: Stored>(store: &mut RecordStore, records: Vec<T>) -> Result<()> {
    for (i, record) in records.into_iter().enumerate() {
        let def_name = record.def_name().to_string();
        store.insert(record).with_context(|| {
            format!("Invalid {} #{} ('{}')", T::CATEGORY, i + 1, def_name)
        })?;
    }
    Ok(())
}

fn cloned<T: Stored + Clone>(store: &RecordStore) -> Vec<T> {
    store.collection::<T>().iter().cloned().collect()
}

impl ModProject {
    pub fn new(info: ModInfo) -> Self {
        Self {
            info,
            ..Default::default()
        }
    }

    /// Parse a project from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ProjectFile =
            serde_json::from_str(json).context("Failed to parse project file")?;

        // Research last but one: its unlocks must already be in the store
        let mut store = RecordStore::new();
        insert_all(&mut store, file.items)?;
        insert_all(&mut store, file.weapons)?;
        insert_all(&mut store, file.buildings)?;
        insert_all(&mut store, file.cosmetics)?;
        insert_all(&mut store, file.drugs)?;
        insert_all(&mut store, file.workbenches)?;
        insert_all(&mut store, file.research)?;
        insert_all(&mut store, file.recipes)?;

        Ok(Self {
            info: file.mod_info,
            components: file.settings,
            store,
        })
    }

    /// Render the project as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        let file = ProjectFile {
            mod_info: self.info.clone(),
            items: cloned(&self.store),
            weapons: cloned(&self.store),
            buildings: cloned(&self.store),
            cosmetics: cloned(&self.store),
            drugs: cloned(&self.store),
            workbenches: cloned(&self.store),
            research: cloned(&self.store),
            recipes: cloned(&self.store),
            settings: self.components.clone(),
        };
        serde_json::to_string_pretty(&file).context("Failed to serialize project")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file: {:?}", path))?;
        Self::from_json(&json).with_context(|| format!("Failed to load project: {:?}", path))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        fs::write(path, self.to_json()? + "\n")
            .with_context(|| format!("Failed to write project file: {:?}", path))
    }
}
