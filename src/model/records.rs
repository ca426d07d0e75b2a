//! Typed content records, one struct per category

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::category::Category;
use super::error::{Result, ValidationError};

/// Longest defName the engine tolerates
pub const MAX_DEF_NAME_LEN: usize = 50;

/// Shared behaviour of every stored record
pub trait Record {
    const CATEGORY: Category;

    fn def_name(&self) -> &str;
    fn label(&self) -> &str;
    fn description(&self) -> &str;

    /// Texture file chosen for this record
    fn texture(&self) -> Option<&Path> {
        None
    }

    /// Sound file chosen for this record
    fn sound(&self) -> Option<&Path> {
        None
    }

    /// Field checks beyond the ones every record shares
    fn validate_fields(&self) -> Result<()> {
        Ok(())
    }

    /// Full validation run before the record enters the store
    fn validate(&self) -> Result<()> {
        validate_def_name(self.def_name())?;
        if self.label().trim().is_empty() {
            return Err(ValidationError::MissingField("label"));
        }
        self.validate_fields()
    }

    /// Entry shown in research unlock pickers
    fn display_entry(&self) -> String {
        format!("{} - {}", self.def_name(), self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponType {
    Melee,
    Ranged,
}

impl std::str::FromStr for WeaponType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Melee" => Ok(WeaponType::Melee),
            "Ranged" => Ok(WeaponType::Ranged),
            other => Err(ValidationError::UnknownVariant {
                field: "weaponType",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    Blunt,
    Cut,
    Bullet,
    Bomb,
    Flame,
}

impl std::str::FromStr for DamageType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Blunt" => Ok(DamageType::Blunt),
            "Cut" => Ok(DamageType::Cut),
            "Bullet" => Ok(DamageType::Bullet),
            "Bomb" => Ok(DamageType::Bomb),
            "Flame" => Ok(DamageType::Flame),
            other => Err(ValidationError::UnknownVariant {
                field: "damageType",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub def_name: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub market_value: f64,
    pub mass: f64,
    pub stack_limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub def_name: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub weapon_type: WeaponType,
    pub damage: u32,
    pub damage_type: DamageType,
    pub market_value: f64,
    pub mass: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub def_name: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Footprint written as `W,H`
    pub size: String,
    pub hit_points: u32,
    pub work_to_build: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apparel {
    pub def_name: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub apparel_type: String,
    /// Comma separated body part groups
    pub body_parts: String,
    pub layer: String,
    #[serde(default)]
    pub armor_sharp: f64,
    #[serde(default)]
    pub armor_blunt: f64,
    #[serde(default)]
    pub armor_heat: f64,
    pub market_value: f64,
    pub mass: f64,
    pub work_to_make: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drug {
    pub def_name: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub addiction_chance: f64,
    pub tolerance_gain: f64,
    /// Hours the high lasts
    #[serde(alias = "duration")]
    pub high_duration: f64,
    pub market_value: f64,
    pub mass: f64,
    pub stack_limit: u32,
    #[serde(default)]
    pub mood_effect: i32,
    #[serde(default)]
    pub pain_effect: f64,
    #[serde(default)]
    pub consciousness_effect: f64,
    #[serde(default)]
    pub moving_effect: f64,
    #[serde(default)]
    pub nutrition: f64,
    #[serde(default)]
    pub joy: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<PathBuf>,
}

fn default_steel_cost() -> u32 {
    50
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workbench {
    pub def_name: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub workbench_type: String,
    /// Footprint written as `W,H`
    pub size: String,
    pub hit_points: u32,
    pub work_to_build: u32,
    pub speed_factor: f64,
    #[serde(default)]
    pub power_consumption: u32,
    /// `None` means no skill requirement
    pub required_skill: String,
    #[serde(default)]
    pub required_skill_level: u32,
    #[serde(default = "default_steel_cost")]
    pub steel_cost: u32,
    #[serde(default)]
    pub component_cost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Research {
    pub def_name: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub base_cost: u32,
    pub tech_level: String,
    #[serde(default)]
    pub unlocked_items: Vec<String>,
    #[serde(default)]
    pub unlocked_weapons: Vec<String>,
    #[serde(default)]
    pub unlocked_buildings: Vec<String>,
    #[serde(default, alias = "unlockedApparel")]
    pub unlocked_cosmetics: Vec<String>,
    #[serde(default)]
    pub unlocked_drugs: Vec<String>,
    #[serde(default)]
    pub unlocked_workbenches: Vec<String>,
}

impl Research {
    /// Picker entries unlocked in the given category
    pub fn unlocked(&self, category: Category) -> &[String] {
        match category {
            Category::Item => &self.unlocked_items,
            Category::Weapon => &self.unlocked_weapons,
            Category::Building => &self.unlocked_buildings,
            Category::Apparel => &self.unlocked_cosmetics,
            Category::Drug => &self.unlocked_drugs,
            Category::Workbench => &self.unlocked_workbenches,
            Category::Research | Category::Recipe => &[],
        }
    }

    pub fn unlocked_mut(&mut self, category: Category) -> Option<&mut Vec<String>> {
        match category {
            Category::Item => Some(&mut self.unlocked_items),
            Category::Weapon => Some(&mut self.unlocked_weapons),
            Category::Building => Some(&mut self.unlocked_buildings),
            Category::Apparel => Some(&mut self.unlocked_cosmetics),
            Category::Drug => Some(&mut self.unlocked_drugs),
            Category::Workbench => Some(&mut self.unlocked_workbenches),
            Category::Research | Category::Recipe => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub def_name: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub work_amount: u32,
    /// defName of the produced thing
    pub product: String,
    pub product_count: u32,
    /// `DefName:Count[,DefName:Count...]`
    pub ingredients: String,
}

macro_rules! record_common {
    ($category:expr) => {
        const CATEGORY: Category = $category;

        fn def_name(&self) -> &str {
            &self.def_name
        }

        fn label(&self) -> &str {
            &self.label
        }

        fn description(&self) -> &str {
            &self.description
        }
    };
}

macro_rules! record_assets {
    () => {
        fn texture(&self) -> Option<&Path> {
            self.texture.as_deref()
        }

        fn sound(&self) -> Option<&Path> {
            self.sound.as_deref()
        }
    };
}

impl Record for Item {
    record_common!(Category::Item);
    record_assets!();

    fn validate_fields(&self) -> Result<()> {
        check_finite("marketValue", self.market_value)?;
        check_finite("mass", self.mass)
    }
}

impl Record for Weapon {
    record_common!(Category::Weapon);
    record_assets!();

    fn validate_fields(&self) -> Result<()> {
        check_finite("marketValue", self.market_value)?;
        check_finite("mass", self.mass)
    }
}

impl Record for Building {
    record_common!(Category::Building);
    record_assets!();

    fn validate_fields(&self) -> Result<()> {
        check_size("size", &self.size)
    }
}

impl Record for Apparel {
    record_common!(Category::Apparel);
    record_assets!();

    fn validate_fields(&self) -> Result<()> {
        check_finite("marketValue", self.market_value)?;
        check_finite("mass", self.mass)?;
        check_non_negative("armorSharp", self.armor_sharp)?;
        check_non_negative("armorBlunt", self.armor_blunt)?;
        check_non_negative("armorHeat", self.armor_heat)
    }
}

impl Record for Drug {
    record_common!(Category::Drug);
    record_assets!();

    fn validate_fields(&self) -> Result<()> {
        for (field, value) in [
            ("addictionChance", self.addiction_chance),
            ("toleranceGain", self.tolerance_gain),
            ("highDuration", self.high_duration),
            ("marketValue", self.market_value),
            ("mass", self.mass),
            ("painEffect", self.pain_effect),
            ("consciousnessEffect", self.consciousness_effect),
            ("movingEffect", self.moving_effect),
        ] {
            check_finite(field, value)?;
        }
        check_non_negative("nutrition", self.nutrition)?;
        check_finite("joy", self.joy)
    }
}

impl Record for Workbench {
    record_common!(Category::Workbench);
    record_assets!();

    fn validate_fields(&self) -> Result<()> {
        check_size("size", &self.size)?;
        check_finite("speedFactor", self.speed_factor)
    }
}

impl Record for Research {
    record_common!(Category::Research);
}

impl Record for Recipe {
    record_common!(Category::Recipe);

    fn validate_fields(&self) -> Result<()> {
        // The product name becomes an element name in the generated def
        match self.product.trim() {
            "" => Err(ValidationError::MissingField("product")),
            product => validate_def_name(product),
        }
    }
}

/// Check a defName is usable as an engine identifier
pub fn validate_def_name(def_name: &str) -> Result<()> {
    if def_name.is_empty() {
        return Err(ValidationError::MissingField("defName"));
    }
    if def_name.len() > MAX_DEF_NAME_LEN {
        return Err(ValidationError::InvalidDefName {
            def_name: def_name.to_string(),
            reason: format!("longer than {} characters", MAX_DEF_NAME_LEN),
        });
    }
    // Element names cannot start with a digit
    if def_name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidDefName {
            def_name: def_name.to_string(),
            reason: "starts with a digit".to_string(),
        });
    }
    if let Some(bad) = def_name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(ValidationError::InvalidDefName {
            def_name: def_name.to_string(),
            reason: format!("contains '{}'", bad),
        });
    }
    Ok(())
}

/// defName part of a `"defName - label"` picker entry
pub fn entry_def_name(entry: &str) -> &str {
    entry.split(" - ").next().unwrap_or(entry).trim()
}

/// Parse a `W,H` footprint
pub fn parse_size(size: &str) -> Option<(u32, u32)> {
    let (w, h) = size.split_once(',')?;
    let w = w.trim().parse().ok()?;
    let h = h.trim().parse().ok()?;
    Some((w, h))
}

fn check_size(field: &'static str, value: &str) -> Result<()> {
    parse_size(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::InvalidSize {
            field,
            value: value.to_string(),
        })
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidNumber {
            field,
            expected: "number",
            value: value.to_string(),
        })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(())
}
