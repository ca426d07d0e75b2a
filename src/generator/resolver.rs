//! Research unlock resolution
//!
//! Research projects list the defs they unlock as picker entries
//! (`"defName - label"`). The index maps every unlocked target back to the
//! research that owns it so builders can embed the prerequisite inline, or the
//! unlocks can be emitted as a separate patch document.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::model::{entry_def_name, Category, Collection, Record, Research, UNLOCKABLE};
use crate::xml::Element;

/// How research unlocks reach the unlocked defs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResearchMode {
    /// `researchPrerequisites` written into each unlocked def
    #[default]
    Inline,
    /// One `PatchOperationAdd` per unlock in `Patches/ResearchUnlocks.xml`
    Patches,
}

impl fmt::Display for ResearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResearchMode::Inline => write!(f, "inline"),
            ResearchMode::Patches => write!(f, "patches"),
        }
    }
}

/// A single research -> target relationship
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unlock {
    pub category: Category,
    pub target: String,
    pub research: String,
}

/// Lookup from unlocked def to the research that unlocks it
#[derive(Debug, Default)]
pub struct ResearchIndex {
    owners: HashMap<(Category, String), String>,
    /// Every unlock in research order, duplicates included
    unlocks: Vec<Unlock>,
}

impl ResearchIndex {
    pub fn build(research: &Collection<Research>) -> Self {
        let mut index = Self::default();

        for project in research {
            for &category in UNLOCKABLE {
                for entry in project.unlocked(category) {
                    let target = entry_def_name(entry);
                    if target.is_empty() {
                        continue;
                    }
                    // First research in insertion order wins
                    index
                        .owners
                        .entry((category, target.to_string()))
                        .or_insert_with(|| project.def_name().to_string());
                    index.unlocks.push(Unlock {
                        category,
                        target: target.to_string(),
                        research: project.def_name().to_string(),
                    });
                }
            }
        }

        index
    }

    /// Research that unlocks `def_name` in `category`
    pub fn prerequisite(&self, category: Category, def_name: &str) -> Option<&str> {
        self.owners
            .get(&(category, def_name.to_string()))
            .map(String::as_str)
    }

    pub fn unlocks(&self) -> &[Unlock] {
        &self.unlocks
    }

    pub fn is_empty(&self) -> bool {
        self.unlocks.is_empty()
    }
}

/// Build the `Patch` document adding each unlock's research prerequisite
pub fn build_patch_document(index: &ResearchIndex) -> Element {
    let mut root = Element::new("Patch");
    for unlock in index.unlocks() {
        root.push(patch_operation(&unlock.target, &unlock.research));
    }
    root
}

fn patch_operation(target: &str, research: &str) -> Element {
    let mut operation = Element::new("Operation").with_attr("Class", "PatchOperationAdd");
    operation.text_child("xpath", format!("Defs/ThingDef[defName='{}']", target));
    operation
        .child("value")
        .list("researchPrerequisites", [research]);
    operation
}
