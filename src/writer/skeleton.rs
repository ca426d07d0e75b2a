//! Folder skeleton and placeholder files of a fresh mod

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::project::ComponentSettings;

/// Folders every mod gets, whether or not anything is written into them
pub const MOD_DIRS: &[&str] = &[
    "About",
    "Defs",
    "Textures/Things",
    "Sounds",
    "Patches",
    "Assemblies",
    "Languages/English/Keyed",
];

pub const PREVIEW_README: &str = "About/README_Preview.txt";
pub const EXAMPLE_PATCH: &str = "Patches/ExamplePatch.xml";
pub const ASSEMBLIES_README: &str = "Assemblies/README.txt";
pub const TEXTURES_README: &str = "Textures/README.txt";
pub const SOUNDS_README: &str = "Sounds/README.txt";

const TEXTURE_DIRS: &[&str] = &[
    "Textures/Things/Item",
    "Textures/Things/Building",
    "Textures/Things/Pawn",
    "Textures/UI",
];

const PREVIEW_TEXT: &str = "\
To add a preview image for your mod:
1. Create or find a 512x512 pixel PNG image
2. Name it 'Preview.png'
3. Replace this file with your preview image
4. Delete this README_Preview.txt file
";

// Commented out so the game loads it as a no-op
const EXAMPLE_PATCH_TEXT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Patch>
  <!-- Example patch - Remove or modify as needed -->
  <!--
  <Operation Class="PatchOperationAdd">
    <xpath>/Defs</xpath>
    <value>
      <ThingDef ParentName="ResourceBase">
        <defName>PatchedResource</defName>
        <label>patched resource</label>
        <description>A resource added via patch.</description>
      </ThingDef>
    </value>
  </Operation>
  -->
</Patch>
"#;

const ASSEMBLIES_TEXT: &str = "\
# Assemblies Folder

This folder contains compiled .NET assemblies (DLL files) for your mod.

To add C# code to your mod:
1. Create a new C# project targeting .NET Framework 4.7.2 or .NET Standard 2.0
2. Reference the RimWorld and UnityEngine assemblies
3. Compile your code and place the resulting DLL files in this folder

Example references needed:
- RimWorld.exe (from RimWorld installation)
- Assembly-CSharp.dll (from RimWorld_Data/Managed/)
- UnityEngine.CoreModule.dll (from RimWorld_Data/Managed/)
";

const TEXTURES_TEXT: &str = "\
# Textures Folder

Place your mod's texture files (.png) in this folder structure:

Things/Item/ - Item textures
Things/Building/ - Building textures
Things/Pawn/ - Pawn-related textures
UI/ - User interface textures

Texture requirements:
- Use PNG format
- Power-of-2 dimensions recommended (64x64, 128x128, 256x256, etc.)
- Keep file sizes reasonable for performance
";

const SOUNDS_TEXT: &str = "\
# Sounds Folder

Place your mod's sound files in this folder.

Supported formats:
- .wav (recommended)
- .ogg
- .mp3

Organization suggestions:
- Create subfolders for different sound categories
- Use descriptive filenames
- Keep file sizes reasonable
";

fn create_dirs(mod_dir: &Path, dirs: &[&str]) -> Result<()> {
    for dir in dirs {
        let path = mod_dir.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {:?}", path))?;
    }
    Ok(())
}

/// Create the standard folders
pub fn create_mod_dirs(mod_dir: &Path) -> Result<()> {
    create_dirs(mod_dir, MOD_DIRS)
}

/// Placeholder files for the preview image and every selected component.
/// Returns the relative name and full path of each file written.
pub fn write_placeholders(
    mod_dir: &Path,
    components: &ComponentSettings,
) -> Result<Vec<(&'static str, PathBuf)>> {
    let mut files = vec![(PREVIEW_README, PREVIEW_TEXT)];
    if components.include_patches {
        files.push((EXAMPLE_PATCH, EXAMPLE_PATCH_TEXT));
    }
    if components.include_assemblies {
        files.push((ASSEMBLIES_README, ASSEMBLIES_TEXT));
    }
    if components.include_textures {
        create_dirs(mod_dir, TEXTURE_DIRS)?;
        files.push((TEXTURES_README, TEXTURES_TEXT));
    }
    if components.include_sounds {
        files.push((SOUNDS_README, SOUNDS_TEXT));
    }

    let mut written = Vec::with_capacity(files.len());
    for (name, text) in files {
        let path = mod_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        fs::write(&path, text).with_context(|| format!("Failed to write: {:?}", path))?;
        written.push((name, path));
    }
    Ok(written)
}
