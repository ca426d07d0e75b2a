//! Mod identity document (`About/About.xml`)

use serde::{Deserialize, Serialize};

use crate::xml::Element;

pub const DEFAULT_MOD_NAME: &str = "My Rimworld Mod";
pub const DEFAULT_AUTHOR: &str = "Unknown Author";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_DESCRIPTION: &str = "A mod created with Rimworld Mod Maker.";

fn default_supported_versions() -> Vec<String> {
    vec!["1.4".to_string(), "1.5".to_string()]
}

/// Mod identity fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_supported_versions", alias = "supportedVersions")]
    pub supported_versions: Vec<String>,
}

impl Default for ModInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            author: String::new(),
            version: String::new(),
            description: String::new(),
            supported_versions: default_supported_versions(),
        }
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    match value.trim() {
        "" => default,
        trimmed => trimmed,
    }
}

impl ModInfo {
    pub fn name(&self) -> &str {
        or_default(&self.name, DEFAULT_MOD_NAME)
    }

    pub fn author(&self) -> &str {
        or_default(&self.author, DEFAULT_AUTHOR)
    }

    pub fn version(&self) -> &str {
        or_default(&self.version, DEFAULT_VERSION)
    }

    pub fn description(&self) -> &str {
        or_default(&self.description, DEFAULT_DESCRIPTION)
    }

    /// `<author>.<name>` lowercased with spaces removed
    pub fn package_id(&self) -> String {
        format!("{}.{}", squash(self.author()), squash(self.name()))
    }
}

fn squash(value: &str) -> String {
    value.to_lowercase().replace(' ', "")
}

/// Build the `ModMetaData` document
pub fn generate_about(info: &ModInfo) -> Element {
    let mut root = Element::new("ModMetaData");
    root.text_child("name", info.name());
    root.text_child("author", info.author());
    root.text_child("packageId", info.package_id());
    root.text_child("modVersion", info.version());
    let versions = if info.supported_versions.is_empty() {
        default_supported_versions()
    } else {
        info.supported_versions.clone()
    };
    root.list("supportedVersions", versions);
    root.text_child("description", info.description());
    root
}
