//! Static catalog of every content category the generator knows about

use std::fmt;

/// Content category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Item,
    Weapon,
    Building,
    Apparel,
    Drug,
    Workbench,
    Research,
    Recipe,
}

impl Category {
    /// Catalog entry for this category
    pub fn spec(self) -> &'static CategorySpec {
        match self {
            Category::Item => &ITEMS,
            Category::Weapon => &WEAPONS,
            Category::Building => &BUILDINGS,
            Category::Apparel => &APPAREL,
            Category::Drug => &DRUGS,
            Category::Workbench => &WORKBENCHES,
            Category::Research => &RESEARCH,
            Category::Recipe => &RECIPES,
        }
    }

    pub fn key(self) -> &'static str {
        self.spec().key
    }

    pub fn file_name(self) -> &'static str {
        self.spec().file_name
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec().display_name)
    }
}

/// Category definition
#[derive(Debug, Clone)]
pub struct CategorySpec {
    pub category: Category,
    /// Name used in messages
    pub display_name: &'static str,
    /// Key accepted on the command line and used in the project file
    pub key: &'static str,
    /// File written under `Defs/`
    pub file_name: &'static str,
    /// Element name of each top-level def
    pub def_element: &'static str,
    /// Template the def inherits from, if any
    pub parent_name: Option<&'static str>,
    /// Whether research projects can unlock defs of this category
    pub unlockable: bool,
}

pub static ITEMS: CategorySpec = CategorySpec {
    category: Category::Item,
    display_name: "Item",
    key: "items",
    file_name: "Items.xml",
    def_element: "ThingDef",
    parent_name: None,
    unlockable: true,
};

pub static WEAPONS: CategorySpec = CategorySpec {
    category: Category::Weapon,
    display_name: "Weapon",
    key: "weapons",
    file_name: "Weapons.xml",
    def_element: "ThingDef",
    parent_name: Some("BaseWeapon"),
    unlockable: true,
};

pub static BUILDINGS: CategorySpec = CategorySpec {
    category: Category::Building,
    display_name: "Building",
    key: "buildings",
    file_name: "Buildings.xml",
    def_element: "ThingDef",
    parent_name: Some("BuildingBase"),
    unlockable: true,
};

pub static APPAREL: CategorySpec = CategorySpec {
    category: Category::Apparel,
    display_name: "Apparel",
    key: "apparel",
    file_name: "Apparel.xml",
    def_element: "ThingDef",
    parent_name: Some("ApparelBase"),
    unlockable: true,
};

pub static DRUGS: CategorySpec = CategorySpec {
    category: Category::Drug,
    display_name: "Drug",
    key: "drugs",
    file_name: "Drugs.xml",
    def_element: "ThingDef",
    parent_name: Some("DrugBase"),
    unlockable: true,
};

pub static WORKBENCHES: CategorySpec = CategorySpec {
    category: Category::Workbench,
    display_name: "Workbench",
    key: "workbenches",
    file_name: "Workbenches.xml",
    def_element: "ThingDef",
    parent_name: Some("BenchBase"),
    unlockable: true,
};

pub static RESEARCH: CategorySpec = CategorySpec {
    category: Category::Research,
    display_name: "Research",
    key: "research",
    file_name: "Research.xml",
    def_element: "ResearchProjectDef",
    parent_name: None,
    unlockable: false,
};

pub static RECIPES: CategorySpec = CategorySpec {
    category: Category::Recipe,
    display_name: "Recipe",
    key: "recipes",
    file_name: "Recipes.xml",
    def_element: "RecipeDef",
    parent_name: None,
    unlockable: false,
};

/// All categories in generation order
pub static ALL_CATEGORIES: &[&CategorySpec] = &[
    &ITEMS,
    &WEAPONS,
    &BUILDINGS,
    &APPAREL,
    &DRUGS,
    &WORKBENCHES,
    &RESEARCH,
    &RECIPES,
];

/// Categories a research project can unlock, in the order its lists are stored
pub static UNLOCKABLE: &[Category] = &[
    Category::Item,
    Category::Weapon,
    Category::Building,
    Category::Apparel,
    Category::Drug,
    Category::Workbench,
];

/// Look up a category by its key. `cosmetics` is accepted for apparel.
pub fn get_category(key: &str) -> Option<&'static CategorySpec> {
    let key = key.trim().to_ascii_lowercase();
    let key = match key.as_str() {
        "cosmetics" => "apparel",
        other => other,
    };
    ALL_CATEGORIES.iter().copied().find(|c| c.key == key)
}

/// All category keys in generation order
pub fn category_keys() -> Vec<&'static str> {
    ALL_CATEGORIES.iter().map(|c| c.key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_category() {
        assert_eq!(get_category("items").unwrap().category, Category::Item);
        assert_eq!(get_category(" Recipes ").unwrap().category, Category::Recipe);
        assert_eq!(get_category("cosmetics").unwrap().file_name, "Apparel.xml");
        assert!(get_category("pawns").is_none());
    }

    #[test]
    fn test_catalog_matches_enum() {
        for spec in ALL_CATEGORIES {
            assert_eq!(spec.category.spec().key, spec.key);
        }
        let unlockable: Vec<_> = ALL_CATEGORIES
            .iter()
            .filter(|c| c.unlockable)
            .map(|c| c.category)
            .collect();
        assert_eq!(unlockable, UNLOCKABLE);
    }
}
