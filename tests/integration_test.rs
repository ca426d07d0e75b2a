//! End-to-end tests that write complete mod folders into temp directories.
//!
//! Run with:
//! ```sh
//! cargo test --test integration_test
//! ```

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use rimworld_mod_gen::project::ModProject;
use rimworld_mod_gen::ui::SilentUi;
use rimworld_mod_gen::writer::skeleton::{
    ASSEMBLIES_README, EXAMPLE_PATCH, MOD_DIRS, PREVIEW_README, SOUNDS_README, TEXTURES_README,
};
use rimworld_mod_gen::writer::{write_mod, WriteOptions, WriteSummary, PATCH_FILE};
use rimworld_mod_gen::{Category, ResearchMode};

// =============================================================================
// Shared Sample Project
// =============================================================================

/// A project touching every category, reused by all tests
static SAMPLE_PROJECT: Lazy<Value> = Lazy::new(|| {
    json!({
        "mod_info": {
            "name": "Frontier Kit",
            "author": "Jane Doe",
            "version": "0.3.0",
            "description": "Tools for the rim."
        },
        "items": [
            { "defName": "Berry", "label": "berry", "description": "A sweet berry.",
              "category": "Foods", "marketValue": 3.5, "mass": 0.05, "stackLimit": 75 }
        ],
        "weapons": [
            { "defName": "Cleaver", "label": "cleaver", "weaponType": "Melee",
              "damage": 14, "damageType": "Cut", "marketValue": 120.0, "mass": 1.2 }
        ],
        "buildings": [
            { "defName": "Shed", "label": "shed", "size": "2,2",
              "hitPoints": 200, "workToBuild": 1500 }
        ],
        "cosmetics": [
            { "defName": "Duster", "label": "duster", "apparelType": "Outerwear",
              "bodyParts": "Torso,Arms", "layer": "Shell", "armorSharp": 0.2,
              "marketValue": 80.0, "mass": 1.5, "workToMake": 5000 }
        ],
        "drugs": [
            { "defName": "Calm", "label": "calm", "category": "Social",
              "addictionChance": 0.05, "toleranceGain": 0.1, "highDuration": 12.0,
              "marketValue": 20.0, "mass": 0.01, "stackLimit": 50, "moodEffect": 5 }
        ],
        "workbenches": [
            { "defName": "KitBench", "label": "kit bench", "workbenchType": "Crafting",
              "size": "3,1", "hitPoints": 180, "workToBuild": 2000, "speedFactor": 1.0,
              "requiredSkill": "Crafting", "requiredSkillLevel": 4 }
        ],
        "research": [
            { "defName": "FrontierTools", "label": "frontier tools", "baseCost": 600,
              "techLevel": "Industrial", "unlockedWeapons": ["Cleaver - cleaver"],
              "unlockedWorkbenches": ["KitBench - kit bench"] }
        ],
        "recipes": [
            { "defName": "MakeCleaver", "label": "make cleaver", "workAmount": 900,
              "product": "Cleaver", "productCount": 1, "ingredients": "Steel:40" }
        ],
        "settings": { "include_defs": true, "include_languages": true }
    })
});

fn load(project: &Value) -> ModProject {
    ModProject::from_json(&project.to_string()).expect("sample project should load")
}

fn write(project: &ModProject, root: &Path, options: &WriteOptions) -> WriteSummary {
    let mut ui = SilentUi::new();
    write_mod(project, root, options, &mut ui).expect("write_mod should succeed")
}

fn read(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {:?}: {}", path, e))
}

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_full_mod_layout() {
    let out = TempDir::new().unwrap();
    let project = load(&SAMPLE_PROJECT);
    let mut ui = SilentUi::new();
    let summary = write_mod(&project, out.path(), &WriteOptions::default(), &mut ui).unwrap();

    let mod_dir = out.path().join("Frontier Kit");
    assert_eq!(summary.mod_dir, mod_dir);
    assert_eq!(ui.files[..3], ["About/About.xml", "Defs/Items.xml", "Defs/Weapons.xml"]);
    for file in [
        "About/About.xml",
        "Defs/Items.xml",
        "Defs/Weapons.xml",
        "Defs/Buildings.xml",
        "Defs/Apparel.xml",
        "Defs/Drugs.xml",
        "Defs/Workbenches.xml",
        "Defs/Research.xml",
        "Defs/Recipes.xml",
        "Languages/English/Keyed/ModLanguage.xml",
    ] {
        assert!(mod_dir.join(file).is_file(), "missing {}", file);
    }
    assert!(!mod_dir.join(PATCH_FILE).exists());
    assert_eq!(summary.records, 8);
    assert_eq!(summary.files.len(), 10);
}

#[test]
fn test_about_file() {
    let out = TempDir::new().unwrap();
    let project = load(&SAMPLE_PROJECT);
    write(&project, out.path(), &WriteOptions::default());

    let about = read(out.path().join("Frontier Kit/About/About.xml"));
    assert!(about.starts_with("<?xml"));
    assert!(about.contains("<name>Frontier Kit</name>"));
    assert!(about.contains("<packageId>janedoe.frontierkit</packageId>"));
    assert!(about.contains("<modVersion>0.3.0</modVersion>"));
}

#[test]
fn test_berry_item_def() {
    let out = TempDir::new().unwrap();
    let project = load(&SAMPLE_PROJECT);
    write(&project, out.path(), &WriteOptions::default());

    let items = read(out.path().join("Frontier Kit/Defs/Items.xml"));
    assert!(items.contains("<defName>Berry</defName>"));
    assert!(items.contains("<stackLimit>75</stackLimit>"));
    assert!(items.contains("<MarketValue>3.5</MarketValue>"));
    assert!(items.contains("<texPath>Things/Berry</texPath>"));
}

#[test]
fn test_only_filter_limits_defs() {
    let out = TempDir::new().unwrap();
    let project = load(&SAMPLE_PROJECT);
    let options = WriteOptions {
        categories: vec![Category::Item, Category::Recipe],
        ..Default::default()
    };
    let summary = write(&project, out.path(), &options);

    let defs = out.path().join("Frontier Kit/Defs");
    assert!(defs.join("Items.xml").is_file());
    assert!(defs.join("Recipes.xml").is_file());
    assert!(!defs.join("Weapons.xml").exists());
    assert_eq!(summary.records, 2);
}

#[test]
fn test_empty_categories_are_not_written() {
    let out = TempDir::new().unwrap();
    let mut sample = SAMPLE_PROJECT.clone();
    sample["drugs"] = json!([]);
    let project = load(&sample);
    write(&project, out.path(), &WriteOptions::default());

    assert!(!out.path().join("Frontier Kit/Defs/Drugs.xml").exists());
}

// =============================================================================
// Research Mode Tests
// =============================================================================

#[test]
fn test_inline_research_prerequisites() {
    let out = TempDir::new().unwrap();
    let project = load(&SAMPLE_PROJECT);
    write(&project, out.path(), &WriteOptions::default());

    let weapons = read(out.path().join("Frontier Kit/Defs/Weapons.xml"));
    assert!(weapons.contains("<li>FrontierTools</li>"));
    let benches = read(out.path().join("Frontier Kit/Defs/Workbenches.xml"));
    assert!(benches.contains("<li>FrontierTools</li>"));
    assert!(!benches.contains("BasicFabrication"));
}

#[test]
fn test_patch_mode_writes_patch_file() {
    let out = TempDir::new().unwrap();
    let project = load(&SAMPLE_PROJECT);
    let options = WriteOptions {
        research_mode: ResearchMode::Patches,
        ..Default::default()
    };
    write(&project, out.path(), &options);

    let mod_dir = out.path().join("Frontier Kit");
    let patch = read(mod_dir.join(PATCH_FILE));
    assert!(patch.contains("<Patch>"));
    assert!(patch.contains("Defs/ThingDef[defName='Cleaver']"));
    assert!(patch.contains("Defs/ThingDef[defName='KitBench']"));

    let weapons = read(mod_dir.join("Defs/Weapons.xml"));
    assert!(!weapons.contains("researchPrerequisites"));
}

#[test]
fn test_project_setting_selects_patch_mode() {
    let mut sample = SAMPLE_PROJECT.clone();
    sample["settings"]["include_patches"] = json!(true);
    let project = load(&sample);
    assert_eq!(
        project.components.research_mode(),
        Some(ResearchMode::Patches)
    );
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_generation_error_keeps_earlier_files() {
    let out = TempDir::new().unwrap();
    let mut sample = SAMPLE_PROJECT.clone();
    sample["drugs"][0]["highDuration"] = json!(0.0);
    let project = load(&sample);

    let mut ui = SilentUi::new();
    let err = write_mod(&project, out.path(), &WriteOptions::default(), &mut ui).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Drugs.xml"), "{}", message);
    assert!(message.contains("Calm"), "{}", message);

    let defs = out.path().join("Frontier Kit/Defs");
    assert!(defs.join("Items.xml").is_file());
    assert!(defs.join("Apparel.xml").is_file());
    assert!(!defs.join("Drugs.xml").exists());
    assert!(!defs.join("Workbenches.xml").exists());
}

#[test]
fn test_existing_mod_folder_is_refused() {
    let out = TempDir::new().unwrap();
    let project = load(&SAMPLE_PROJECT);
    write(&project, out.path(), &WriteOptions::default());

    let mut ui = SilentUi::new();
    let err = write_mod(&project, out.path(), &WriteOptions::default(), &mut ui).unwrap_err();
    assert!(err.to_string().contains("already exists"));

    let options = WriteOptions {
        overwrite: true,
        ..Default::default()
    };
    write(&project, out.path(), &options);
}

#[test]
fn test_missing_mod_name_is_rejected() {
    let out = TempDir::new().unwrap();
    let mut sample = SAMPLE_PROJECT.clone();
    sample["mod_info"]["name"] = json!("  ");
    let project = load(&sample);

    let mut ui = SilentUi::new();
    assert!(write_mod(&project, out.path(), &WriteOptions::default(), &mut ui).is_err());
}

#[test]
fn test_mod_name_cannot_escape_output_root() {
    let out = TempDir::new().unwrap();
    let keep = out.path().join("unrelated_user_file.txt");
    fs::write(&keep, "keep me").unwrap();
    let output_root = out.path().join("mods");
    fs::create_dir_all(&output_root).unwrap();

    let options = WriteOptions {
        overwrite: true,
        ..Default::default()
    };
    for name in [".", "..", "a/../..", "/"] {
        let mut sample = SAMPLE_PROJECT.clone();
        sample["mod_info"]["name"] = json!(name);
        let project = load(&sample);

        let mut ui = SilentUi::new();
        let err = write_mod(&project, &output_root, &options, &mut ui).unwrap_err();
        assert!(err.to_string().contains("plain folder name"), "{}: {}", name, err);
    }
    assert_eq!(read(&keep), "keep me");
    assert!(output_root.is_dir());
}

#[test]
fn test_def_name_with_leading_digit_is_rejected() {
    let mut sample = SAMPLE_PROJECT.clone();
    sample["items"][0]["defName"] = json!("9Lives");
    let err = ModProject::from_json(&sample.to_string()).unwrap_err();
    assert!(format!("{:#}", err).contains("9Lives"));

    let mut sample = SAMPLE_PROJECT.clone();
    sample["recipes"][0]["product"] = json!("9Lives");
    assert!(ModProject::from_json(&sample.to_string()).is_err());
}

// =============================================================================
// Skeleton Tests
// =============================================================================

#[test]
fn test_skeleton_folders_and_preview_readme() {
    let out = TempDir::new().unwrap();
    let project = load(&SAMPLE_PROJECT);
    let summary = write(&project, out.path(), &WriteOptions::default());

    let mod_dir = out.path().join("Frontier Kit");
    for folder in MOD_DIRS {
        assert!(mod_dir.join(folder).is_dir(), "missing {}", folder);
    }
    assert!(mod_dir.join(PREVIEW_README).is_file());
    assert_eq!(summary.placeholders, vec![mod_dir.join(PREVIEW_README)]);
    assert!(!mod_dir.join(ASSEMBLIES_README).exists());
    assert!(!mod_dir.join(EXAMPLE_PATCH).exists());
}

#[test]
fn test_component_placeholders() {
    let out = TempDir::new().unwrap();
    let mut sample = SAMPLE_PROJECT.clone();
    sample["settings"] = json!({
        "include_defs": true,
        "include_patches": true,
        "include_assemblies": true,
        "include_textures": true,
        "include_sounds": true
    });
    let project = load(&sample);
    let summary = write(&project, out.path(), &WriteOptions::default());

    let mod_dir = out.path().join("Frontier Kit");
    for file in [
        PREVIEW_README,
        EXAMPLE_PATCH,
        ASSEMBLIES_README,
        TEXTURES_README,
        SOUNDS_README,
    ] {
        assert!(mod_dir.join(file).is_file(), "missing {}", file);
    }
    assert_eq!(summary.placeholders.len(), 5);
    assert!(mod_dir.join("Textures/UI").is_dir());
    assert!(read(mod_dir.join(EXAMPLE_PATCH)).contains("<Patch>"));
    assert!(!mod_dir.join("Languages/English/Keyed/ModLanguage.xml").exists());
}

// =============================================================================
// Asset Tests
// =============================================================================

#[test]
fn test_apparel_texture_copied_to_worn_path() {
    let out = TempDir::new().unwrap();
    let assets = TempDir::new().unwrap();
    let texture = assets.path().join("duster.png");
    fs::write(&texture, b"png").unwrap();

    let mut sample = SAMPLE_PROJECT.clone();
    sample["cosmetics"][0]["texture"] = json!(texture);
    let project = load(&sample);
    let summary = write(&project, out.path(), &WriteOptions::default());

    let mod_dir = out.path().join("Frontier Kit");
    let apparel = read(mod_dir.join("Defs/Apparel.xml"));
    assert!(apparel.contains("<wornGraphicPath>Things/Apparel/Duster</wornGraphicPath>"));
    assert_eq!(read(mod_dir.join("Textures/Things/Duster.png")), "png");
    assert_eq!(read(mod_dir.join("Textures/Things/Apparel/Duster.png")), "png");
    assert_eq!(summary.assets.len(), 2);
    assert!(summary.asset_failures.is_empty());
}

#[test]
fn test_assets_copied_and_failures_reported() {
    let out = TempDir::new().unwrap();
    let assets = TempDir::new().unwrap();
    let texture = assets.path().join("berry_art.png");
    fs::write(&texture, b"png").unwrap();

    let mut sample = SAMPLE_PROJECT.clone();
    sample["items"][0]["texture"] = json!(texture);
    sample["weapons"][0]["sound"] = json!(assets.path().join("missing.ogg"));
    let project = load(&sample);

    let mut ui = SilentUi::new();
    let summary = write_mod(&project, out.path(), &WriteOptions::default(), &mut ui).unwrap();

    let copied = out.path().join("Frontier Kit/Textures/Things/Berry.png");
    assert_eq!(read(&copied), "png");
    assert_eq!(summary.assets, vec![copied]);

    assert_eq!(summary.asset_failures.len(), 1);
    assert_eq!(summary.asset_failures[0].def_name, "Cleaver");
    assert_eq!(ui.warnings.len(), 1);
    assert!(out.path().join("Frontier Kit/Defs/Weapons.xml").is_file());
}

// =============================================================================
// Output Tests
// =============================================================================

#[test]
fn test_language_file_lists_descriptions() {
    let out = TempDir::new().unwrap();
    let project = load(&SAMPLE_PROJECT);
    write(&project, out.path(), &WriteOptions::default());

    let language = read(out.path().join("Frontier Kit/Languages/English/Keyed/ModLanguage.xml"));
    assert!(language.contains("<LanguageData>"));
    assert!(language.contains("<Berry.description>A sweet berry.</Berry.description>"));
    assert!(!language.contains("Cleaver.description"));
}

#[test]
fn test_output_is_deterministic() {
    let project = load(&SAMPLE_PROJECT);
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let a = write(&project, first.path(), &WriteOptions::default());
    let b = write(&project, second.path(), &WriteOptions::default());

    assert_eq!(a.files.len(), b.files.len());
    for (left, right) in a.files.iter().zip(&b.files) {
        assert_eq!(read(left), read(right), "{:?} differs", left.file_name());
    }
}

#[test]
fn test_project_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects/frontier.json");
    let project = load(&SAMPLE_PROJECT);
    project.save(&path).unwrap();

    let reloaded = ModProject::load(&path).unwrap();
    assert_eq!(reloaded.info, project.info);
    assert_eq!(reloaded.store.total(), project.store.total());
    assert!(reloaded.components.include_languages);
}
