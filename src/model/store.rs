//! In-memory record store: one ordered collection per category

use indexmap::IndexMap;

use super::category::{Category, UNLOCKABLE};
use super::error::{Result, ValidationError};
use super::records::*;

/// Ordered records of a single category keyed by defName
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: IndexMap<String, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, def_name: &str) -> bool {
        self.records.contains_key(def_name)
    }

    pub fn get(&self, def_name: &str) -> Option<&T> {
        self.records.get(def_name)
    }

    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.records.get_index(index).map(|(_, r)| r)
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    /// Picker entries for research unlock selection
    pub fn display_entries(&self) -> Vec<String> {
        self.iter().map(Record::display_entry).collect()
    }

    fn insert(&mut self, record: T) -> Result<()> {
        if self.records.contains_key(record.def_name()) {
            return Err(ValidationError::DuplicateDefName {
                category: T::CATEGORY,
                def_name: record.def_name().to_string(),
            });
        }
        self.records.insert(record.def_name().to_string(), record);
        Ok(())
    }

    fn remove_index(&mut self, index: usize) -> Result<T> {
        self.records
            .shift_remove_index(index)
            .map(|(_, r)| r)
            .ok_or(ValidationError::IndexOutOfRange {
                category: T::CATEGORY,
                index,
            })
    }
}

impl<'a, T: Record> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = indexmap::map::Values<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

/// Records that live in a [`RecordStore`]
pub trait Stored: Record + Sized {
    fn collection(store: &RecordStore) -> &Collection<Self>;
    fn collection_mut(store: &mut RecordStore) -> &mut Collection<Self>;

    /// Checks against other records already in the store
    fn check_references(&self, _store: &RecordStore) -> Result<()> {
        Ok(())
    }
}

macro_rules! stored {
    ($ty:ty, $field:ident) => {
        impl Stored for $ty {
            fn collection(store: &RecordStore) -> &Collection<Self> {
                &store.$field
            }

            fn collection_mut(store: &mut RecordStore) -> &mut Collection<Self> {
                &mut store.$field
            }
        }
    };
}

stored!(Item, items);
stored!(Weapon, weapons);
stored!(Building, buildings);
stored!(Apparel, apparel);
stored!(Drug, drugs);
stored!(Workbench, workbenches);
stored!(Recipe, recipes);

impl Stored for Research {
    fn collection(store: &RecordStore) -> &Collection<Self> {
        &store.research
    }

    fn collection_mut(store: &mut RecordStore) -> &mut Collection<Self> {
        &mut store.research
    }

    fn check_references(&self, store: &RecordStore) -> Result<()> {
        for &category in UNLOCKABLE {
            for entry in self.unlocked(category) {
                if !store.contains(category, entry_def_name(entry)) {
                    return Err(ValidationError::UnknownUnlock {
                        research: self.def_name.clone(),
                        category,
                        entry: entry.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// All records of a mod project
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    items: Collection<Item>,
    weapons: Collection<Weapon>,
    buildings: Collection<Building>,
    apparel: Collection<Apparel>,
    drugs: Collection<Drug>,
    workbenches: Collection<Workbench>,
    research: Collection<Research>,
    recipes: Collection<Recipe>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a record. The store is untouched on error.
    pub fn insert<T: Stored>(&mut self, record: T) -> Result<()> {
        record.validate()?;
        record.check_references(self)?;
        T::collection_mut(self).insert(record)
    }

    /// Remove the record at `index` of its category
    pub fn remove<T: Stored>(&mut self, index: usize) -> Result<T> {
        T::collection_mut(self).remove_index(index)
    }

    pub fn collection<T: Stored>(&self) -> &Collection<T> {
        T::collection(self)
    }

    pub fn items(&self) -> &Collection<Item> {
        &self.items
    }

    pub fn weapons(&self) -> &Collection<Weapon> {
        &self.weapons
    }

    pub fn buildings(&self) -> &Collection<Building> {
        &self.buildings
    }

    pub fn apparel(&self) -> &Collection<Apparel> {
        &self.apparel
    }

    pub fn drugs(&self) -> &Collection<Drug> {
        &self.drugs
    }

    pub fn workbenches(&self) -> &Collection<Workbench> {
        &self.workbenches
    }

    pub fn research(&self) -> &Collection<Research> {
        &self.research
    }

    pub fn recipes(&self) -> &Collection<Recipe> {
        &self.recipes
    }

    /// Number of records in a category
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Item => self.items.len(),
            Category::Weapon => self.weapons.len(),
            Category::Building => self.buildings.len(),
            Category::Apparel => self.apparel.len(),
            Category::Drug => self.drugs.len(),
            Category::Workbench => self.workbenches.len(),
            Category::Research => self.research.len(),
            Category::Recipe => self.recipes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn total(&self) -> usize {
        super::category::ALL_CATEGORIES
            .iter()
            .map(|c| self.len(c.category))
            .sum()
    }

    pub fn contains(&self, category: Category, def_name: &str) -> bool {
        match category {
            Category::Item => self.items.contains(def_name),
            Category::Weapon => self.weapons.contains(def_name),
            Category::Building => self.buildings.contains(def_name),
            Category::Apparel => self.apparel.contains(def_name),
            Category::Drug => self.drugs.contains(def_name),
            Category::Workbench => self.workbenches.contains(def_name),
            Category::Research => self.research.contains(def_name),
            Category::Recipe => self.recipes.contains(def_name),
        }
    }

    /// Entries a research project may list as unlocked in `category`
    pub fn unlock_choices(&self, category: Category) -> Vec<String> {
        match category {
            Category::Item => self.items.display_entries(),
            Category::Weapon => self.weapons.display_entries(),
            Category::Building => self.buildings.display_entries(),
            Category::Apparel => self.apparel.display_entries(),
            Category::Drug => self.drugs.display_entries(),
            Category::Workbench => self.workbenches.display_entries(),
            Category::Research | Category::Recipe => Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
