use super::common::*;
use super::error::Result;
use super::{BuildContext, DefBuilder};
use crate::model::{DamageType, Weapon, WeaponType};
use crate::xml::Element;

impl DefBuilder for Weapon {
    fn build_def(&self, ctx: &BuildContext) -> Result<Element> {
        let mut def = def_root(self);
        def.text_child("thingClass", "ThingWithComps");
        def.text_child("category", "Item");
        def.text_child("techLevel", "Industrial");

        graphic_data(&mut def, &thing_tex_path(&self.def_name), "Graphic_Single");
        sound_interact(&mut def, self, "Interact_BeatFire");

        let stats = def.child("statBases");
        stat(stats, "MarketValue", self.market_value);
        stat(stats, "Mass", self.mass);

        match self.weapon_type {
            WeaponType::Melee => {
                stats.text_child("MeleeWeapon_DamageMultiplier", "1.0");
                stats.text_child("MeleeWeapon_CooldownMultiplier", "1.0");
                def.push(self.melee_tools());
            }
            WeaponType::Ranged => {
                def.push(ranged_verbs());
            }
        }

        def.text_child("equipmentType", "Primary");
        def.list(
            "thingCategories",
            [match self.weapon_type {
                WeaponType::Melee => "WeaponsMelee",
                WeaponType::Ranged => "WeaponsRanged",
            }],
        );
        research_prerequisites(&mut def, self, ctx);
        Ok(def)
    }
}

impl Weapon {
    fn melee_tools(&self) -> Element {
        // Cut stays Cut, every other damage type strikes blunt
        let capacity = match self.damage_type {
            DamageType::Cut => "Cut",
            _ => "Blunt",
        };

        let mut tools = Element::new("tools");
        let tool = tools.child("li");
        tool.text_child("label", format!("{} blade", self.label));
        tool.list("capacities", [capacity]);
        tool.text_child("power", self.damage);
        tool.text_child("cooldownTime", "2.0");
        tools
    }
}

fn ranged_verbs() -> Element {
    let mut verbs = Element::new("verbs");
    let verb = verbs.child("li");
    verb.text_child("verbClass", "Verb_Shoot");
    verb.text_child("hasStandardCommand", true);
    verb.text_child("defaultProjectile", "Bullet_Rifle");
    verb.text_child("warmupTime", "1.0");
    verb.text_child("range", 25);
    verb.text_child("soundCast", "Shot_AssaultRifle");
    verbs
}
