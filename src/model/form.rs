//! Parsing of raw form submissions into typed records
//!
//! A form is an ordered map of field name to the text the user typed. Empty
//! numeric fields fall back to the defaults the editor pre-fills.

use indexmap::IndexMap;
use std::path::PathBuf;
use std::str::FromStr;

use super::error::{Result, ValidationError};
use super::records::*;

/// One raw form submission
pub type FieldMap = IndexMap<String, String>;

/// Build a [`FieldMap`] from literal pairs
pub fn fields<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> FieldMap {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn text(form: &FieldMap, key: &str) -> String {
    form.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
}

fn text_or(form: &FieldMap, key: &str, default: &str) -> String {
    let value = text(form, key);
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

fn required(form: &FieldMap, key: &'static str) -> Result<String> {
    let value = text(form, key);
    if value.is_empty() {
        return Err(ValidationError::MissingField(key));
    }
    Ok(value)
}

fn path(form: &FieldMap, key: &str) -> Option<PathBuf> {
    let value = text(form, key);
    (!value.is_empty()).then(|| PathBuf::from(value))
}

fn number<T: FromStr>(
    form: &FieldMap,
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T> {
    let value = text(form, key);
    if value.is_empty() {
        return Ok(default);
    }
    value.parse().map_err(|_| ValidationError::InvalidNumber {
        field: key,
        expected,
        value,
    })
}

fn float(form: &FieldMap, key: &'static str, default: f64) -> Result<f64> {
    let value = number(form, key, default, "number")?;
    if !value.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: key,
            expected: "number",
            value: text(form, key),
        });
    }
    Ok(value)
}

fn int(form: &FieldMap, key: &'static str, default: u32) -> Result<u32> {
    let value: i64 = number(form, key, default as i64, "integer")?;
    if value < 0 {
        return Err(ValidationError::Negative { field: key });
    }
    u32::try_from(value).map_err(|_| ValidationError::InvalidNumber {
        field: key,
        expected: "integer",
        value: value.to_string(),
    })
}

/// Picker entries arrive one per line
fn entries(form: &FieldMap, key: &str) -> Vec<String> {
    text(form, key)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

impl Item {
    pub fn from_form(form: &FieldMap) -> Result<Self> {
        Ok(Self {
            def_name: required(form, "defName")?,
            label: required(form, "label")?,
            description: text(form, "description"),
            category: text_or(form, "category", "ResourcesRaw"),
            market_value: float(form, "marketValue", 10.0)?,
            mass: float(form, "mass", 0.1)?,
            stack_limit: int(form, "stackLimit", 75)?,
            texture: path(form, "texture"),
            sound: path(form, "sound"),
        })
    }
}

impl Weapon {
    pub fn from_form(form: &FieldMap) -> Result<Self> {
        Ok(Self {
            def_name: required(form, "defName")?,
            label: required(form, "label")?,
            description: text(form, "description"),
            weapon_type: text_or(form, "weaponType", "Melee").parse()?,
            damage: int(form, "damage", 10)?,
            damage_type: text_or(form, "damageType", "Cut").parse()?,
            market_value: float(form, "marketValue", 100.0)?,
            mass: float(form, "mass", 1.5)?,
            texture: path(form, "texture"),
            sound: path(form, "sound"),
        })
    }
}

impl Building {
    pub fn from_form(form: &FieldMap) -> Result<Self> {
        Ok(Self {
            def_name: required(form, "defName")?,
            label: required(form, "label")?,
            description: text(form, "description"),
            size: text_or(form, "size", "1,1"),
            hit_points: int(form, "hitPoints", 100)?,
            work_to_build: int(form, "workToBuild", 500)?,
            texture: path(form, "texture"),
            sound: path(form, "sound"),
        })
    }
}

impl Apparel {
    pub fn from_form(form: &FieldMap) -> Result<Self> {
        Ok(Self {
            def_name: required(form, "defName")?,
            label: required(form, "label")?,
            description: text(form, "description"),
            apparel_type: text_or(form, "apparelType", "Shirt"),
            body_parts: text_or(form, "bodyParts", "Torso"),
            layer: text_or(form, "layer", "Middle"),
            armor_sharp: float(form, "armorSharp", 0.0)?,
            armor_blunt: float(form, "armorBlunt", 0.0)?,
            armor_heat: float(form, "armorHeat", 0.0)?,
            market_value: float(form, "marketValue", 50.0)?,
            mass: float(form, "mass", 0.5)?,
            work_to_make: int(form, "workToMake", 1000)?,
            texture: path(form, "texture"),
            sound: path(form, "sound"),
        })
    }
}

impl Drug {
    pub fn from_form(form: &FieldMap) -> Result<Self> {
        Ok(Self {
            def_name: required(form, "defName")?,
            label: required(form, "label")?,
            description: text(form, "description"),
            category: text_or(form, "category", "Medical"),
            addiction_chance: float(form, "addictionChance", 0.0)?,
            tolerance_gain: float(form, "toleranceGain", 0.0)?,
            high_duration: float(form, "highDuration", 8.0)?,
            market_value: float(form, "marketValue", 25.0)?,
            mass: float(form, "mass", 0.05)?,
            stack_limit: int(form, "stackLimit", 150)?,
            mood_effect: number(form, "moodEffect", 0, "integer")?,
            pain_effect: float(form, "painEffect", 0.0)?,
            consciousness_effect: float(form, "consciousnessEffect", 0.0)?,
            moving_effect: float(form, "movingEffect", 0.0)?,
            nutrition: float(form, "nutrition", 0.0)?,
            joy: float(form, "joy", 0.0)?,
            texture: path(form, "texture"),
            sound: path(form, "sound"),
        })
    }
}

impl Workbench {
    pub fn from_form(form: &FieldMap) -> Result<Self> {
        Ok(Self {
            def_name: required(form, "defName")?,
            label: required(form, "label")?,
            description: text(form, "description"),
            workbench_type: text_or(form, "workbenchType", "Crafting"),
            size: text_or(form, "size", "3,1"),
            hit_points: int(form, "hitPoints", 180)?,
            work_to_build: int(form, "workToBuild", 3000)?,
            speed_factor: float(form, "speedFactor", 1.0)?,
            power_consumption: int(form, "powerConsumption", 0)?,
            required_skill: text_or(form, "requiredSkill", "Crafting"),
            required_skill_level: int(form, "requiredSkillLevel", 0)?,
            steel_cost: int(form, "steelCost", 50)?,
            component_cost: int(form, "componentCost", 0)?,
            texture: path(form, "texture"),
            sound: path(form, "sound"),
        })
    }
}

impl Research {
    pub fn from_form(form: &FieldMap) -> Result<Self> {
        Ok(Self {
            def_name: required(form, "defName")?,
            label: required(form, "label")?,
            description: text(form, "description"),
            base_cost: int(form, "baseCost", 500)?,
            tech_level: text_or(form, "techLevel", "Industrial"),
            unlocked_items: entries(form, "unlockedItems"),
            unlocked_weapons: entries(form, "unlockedWeapons"),
            unlocked_buildings: entries(form, "unlockedBuildings"),
            unlocked_cosmetics: entries(form, "unlockedCosmetics"),
            unlocked_drugs: entries(form, "unlockedDrugs"),
            unlocked_workbenches: entries(form, "unlockedWorkbenches"),
        })
    }
}

impl Recipe {
    pub fn from_form(form: &FieldMap) -> Result<Self> {
        Ok(Self {
            def_name: required(form, "defName")?,
            label: required(form, "label")?,
            description: text(form, "description"),
            work_amount: int(form, "workAmount", 100)?,
            product: text(form, "product"),
            product_count: int(form, "productCount", 1)?,
            ingredients: text_or(form, "ingredients", "Steel:5"),
        })
    }
}
