//! Def tree builders
//!
//! Every category turns its records into a `Defs` document, one top-level def
//! per record in store order. Builders are pure: they read the record, the
//! research index and nothing else.

mod about;
mod apparel;
mod building;
mod common;
pub mod derived;
mod drug;
pub mod error;
mod item;
mod language;
pub mod lists;
mod recipe;
mod research;
pub mod resolver;
mod weapon;
mod workbench;

pub use about::{generate_about, ModInfo};
pub use common::{thing_tex_path, worn_tex_path};
pub use error::GenerationError;
pub use language::generate_language_data;
pub use resolver::{build_patch_document, ResearchIndex, ResearchMode, Unlock};

use crate::model::{Category, Collection, RecordStore, Stored};
use crate::xml::Element;
use error::Result;

/// Shared inputs of every builder
pub struct BuildContext<'a> {
    pub index: &'a ResearchIndex,
    pub mode: ResearchMode,
}

impl<'a> BuildContext<'a> {
    pub fn new(index: &'a ResearchIndex, mode: ResearchMode) -> Self {
        Self { index, mode }
    }

    /// Research to embed in a def, `None` when unlocks go to the patch file
    pub fn inline_prerequisite(&self, category: Category, def_name: &str) -> Option<&'a str> {
        match self.mode {
            ResearchMode::Inline => self.index.prerequisite(category, def_name),
            ResearchMode::Patches => None,
        }
    }

    /// Whether any research unlocks this def, regardless of mode
    pub fn is_unlocked_by_research(&self, category: Category, def_name: &str) -> bool {
        self.index.prerequisite(category, def_name).is_some()
    }
}

/// Records that can be turned into defs
pub trait DefBuilder: Stored {
    /// The record's own def
    fn build_def(&self, ctx: &BuildContext) -> Result<Element>;

    /// Companion defs written after all primary defs of the file
    fn build_extra_defs(&self, _ctx: &BuildContext) -> Result<Vec<Element>> {
        Ok(Vec::new())
    }
}

/// Build the `Defs` document for one collection
pub fn build_defs<T: DefBuilder>(records: &Collection<T>, ctx: &BuildContext) -> Result<Element> {
    let mut root = Element::new("Defs");
    let mut extras = Vec::new();

    for record in records {
        root.push(record.build_def(ctx)?);
        extras.extend(record.build_extra_defs(ctx)?);
    }
    for extra in extras {
        root.push(extra);
    }

    Ok(root)
}

/// Build the `Defs` document for a category of the store
pub fn generate_category(
    category: Category,
    store: &RecordStore,
    ctx: &BuildContext,
) -> Result<Element> {
    match category {
        Category::Item => build_defs(store.items(), ctx),
        Category::Weapon => build_defs(store.weapons(), ctx),
        Category::Building => build_defs(store.buildings(), ctx),
        Category::Apparel => build_defs(store.apparel(), ctx),
        Category::Drug => build_defs(store.drugs(), ctx),
        Category::Workbench => build_defs(store.workbenches(), ctx),
        Category::Research => build_defs(store.research(), ctx),
        Category::Recipe => build_defs(store.recipes(), ctx),
    }
}

/// Generation pass over a store: owns the research index for its lifetime
pub struct Generator<'a> {
    store: &'a RecordStore,
    index: ResearchIndex,
    mode: ResearchMode,
}

impl<'a> Generator<'a> {
    pub fn new(store: &'a RecordStore, mode: ResearchMode) -> Self {
        Self {
            store,
            index: ResearchIndex::build(store.research()),
            mode,
        }
    }

    pub fn mode(&self) -> ResearchMode {
        self.mode
    }

    pub fn index(&self) -> &ResearchIndex {
        &self.index
    }

    /// `Defs` document for a category
    pub fn generate(&self, category: Category) -> Result<Element> {
        let ctx = BuildContext::new(&self.index, self.mode);
        generate_category(category, self.store, &ctx)
    }

    /// Patch document, only in patch mode and only when something is unlocked
    pub fn patches(&self) -> Option<Element> {
        match self.mode {
            ResearchMode::Patches if !self.index.is_empty() => {
                Some(build_patch_document(&self.index))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{fields, Item, Research};

    fn store() -> RecordStore {
        let mut store = RecordStore::new();
        for (name, label) in [("Berry", "berry"), ("Widget", "widget"), ("Apple", "apple")] {
            store
                .insert(Item::from_form(&fields([("defName", name), ("label", label)])).unwrap())
                .unwrap();
        }
        store
            .insert(Research {
                def_name: "Gadgetry".into(),
                label: "gadgetry".into(),
                base_cost: 800,
                tech_level: "Industrial".into(),
                unlocked_items: vec!["Widget - widget".into()],
                ..Default::default()
            })
            .unwrap();
        store
    }

    #[test]
    fn test_defs_follow_store_order() {
        let store = store();
        let defs = Generator::new(&store, ResearchMode::Inline)
            .generate(Category::Item)
            .unwrap();

        assert_eq!(defs.name, "Defs");
        let names: Vec<&str> = defs
            .children
            .iter()
            .map(|def| def.find("defName").unwrap().text())
            .collect();
        assert_eq!(names, ["Berry", "Widget", "Apple"]);
    }

    #[test]
    fn test_empty_category_is_empty_defs() {
        let store = store();
        let defs = Generator::new(&store, ResearchMode::Inline)
            .generate(Category::Weapon)
            .unwrap();
        assert_eq!(defs.name, "Defs");
        assert!(defs.children.is_empty());
    }

    #[test]
    fn test_patches_only_in_patch_mode() {
        let store = store();
        assert!(Generator::new(&store, ResearchMode::Inline).patches().is_none());

        let patch = Generator::new(&store, ResearchMode::Patches).patches().unwrap();
        assert_eq!(patch.name, "Patch");
        assert_eq!(patch.children.len(), 1);
        assert_eq!(
            patch.children[0].find("xpath").unwrap().text(),
            "Defs/ThingDef[defName='Widget']"
        );
    }

    #[test]
    fn test_no_patches_without_unlocks() {
        let store = RecordStore::new();
        assert!(Generator::new(&store, ResearchMode::Patches).patches().is_none());
    }
}
