use super::common::*;
use super::derived::{format_float, severity_per_day};
use super::error::Result;
use super::{BuildContext, DefBuilder};
use crate::model::{Drug, Record};
use crate::xml::Element;

/// Drug categories the engine knows
const DRUG_CATEGORIES: &[&str] = &["Medical", "Social", "Hard", "None", "Any"];

impl Drug {
    /// defName of the hediff the drug applies
    pub fn effect_def_name(&self) -> String {
        format!("{}_Effect", self.def_name)
    }

    /// Unknown categories are written as `Hard`
    fn drug_category(&self) -> &str {
        if DRUG_CATEGORIES.contains(&self.category.as_str()) {
            &self.category
        } else {
            "Hard"
        }
    }

    fn ingestible(&self) -> Element {
        let mut ingestible = Element::new("ingestible");
        ingestible.text_child("foodType", "Processed");
        ingestible.text_child("joyKind", "Chemical");
        ingestible.text_child("joy", format_float(self.joy));
        ingestible.text_child("baseIngestTicks", 240);
        ingestible.text_child("chairSearchRadius", 4);
        ingestible.text_child("nurseable", true);
        ingestible.text_child("drugCategory", self.drug_category());
        ingestible.text_child("addictiveness", format_float(self.addiction_chance));
        ingestible.text_child("minToleranceToAddict", "0.1");
        ingestible.text_child("toleranceChemical", &self.def_name);

        let doers = ingestible.child("outcomeDoers");
        let give = doers
            .child("li")
            .set_attr("Class", "IngestionOutcomeDoer_GiveHediff");
        give.text_child("hediffDef", self.effect_def_name());
        give.text_child("severity", "1.0");
        give.text_child("toleranceChemical", &self.def_name);
        give.text_child("divideByBodySize", true);

        let tolerance = doers
            .child("li")
            .set_attr("Class", "IngestionOutcomeDoer_OffsetTolerance");
        tolerance.text_child("toleranceChemical", &self.def_name);
        tolerance.text_child("offset", format_float(self.tolerance_gain));

        ingestible
    }

    fn effect_stage(&self) -> Element {
        let mut stage = Element::new("li");
        if self.pain_effect != 0.0 {
            stage
                .child("statOffsets")
                .text_child("PainShockThreshold", format_float(self.pain_effect));
        }

        let offsets: Vec<_> = [
            ("Consciousness", self.consciousness_effect),
            ("Moving", self.moving_effect),
        ]
        .into_iter()
        .filter(|(_, offset)| *offset != 0.0)
        .collect();
        if !offsets.is_empty() {
            let cap_mods = stage.child("capMods");
            for (capacity, offset) in offsets {
                let cap_mod = cap_mods.child("li");
                cap_mod.text_child("capacity", capacity);
                cap_mod.text_child("offset", format_float(offset));
            }
        }

        if self.mood_effect != 0 {
            stage.text_child("moodOffset", self.mood_effect);
        }
        stage
    }
}

impl DefBuilder for Drug {
    fn build_def(&self, ctx: &BuildContext) -> Result<Element> {
        let mut def = def_root(self);
        def.text_child("techLevel", "Industrial");
        graphic_data(&mut def, &thing_tex_path(&self.def_name), "Graphic_StackCount");
        def.text_child("socialProperness", "Rude");
        def.text_child("useHitPoints", true);
        def.text_child("stackLimit", self.stack_limit);
        sound_interact(&mut def, self, "Standard_Drop");

        let stats = def.child("statBases");
        stats.text_child("MaxHitPoints", 50);
        stat(stats, "MarketValue", self.market_value);
        stat(stats, "Mass", self.mass);
        stats.text_child("Flammability", "1.0");
        stats.text_child("DeteriorationRate", "6.0");
        if self.nutrition > 0.0 {
            stat(stats, "Nutrition", self.nutrition);
        }

        def.list("thingCategories", ["Drugs"]);
        def.push(self.ingestible());
        def.list("tradeTags", ["ExoticMisc"]);
        research_prerequisites(&mut def, self, ctx);
        Ok(def)
    }

    fn build_extra_defs(&self, _ctx: &BuildContext) -> Result<Vec<Element>> {
        let severity = severity_per_day(Self::CATEGORY, &self.def_name, self.high_duration)?;

        let mut hediff = Element::new("HediffDef");
        hediff.text_child("defName", self.effect_def_name());
        hediff.text_child("label", format!("{} effect", self.label));
        hediff.text_child("labelNoun", format!("{} effect", self.label));
        hediff.text_child("description", format!("Active effects of {}.", self.label));
        hediff.text_child("hediffClass", "HediffWithComps");
        hediff.text_child("defaultLabelColor", "(1,0,0.5)");
        hediff.text_child("scenarioCanAdd", true);
        hediff.text_child("maxSeverity", "1.0");
        hediff.text_child("isBad", false);
        hediff
            .child("comps")
            .child("li")
            .set_attr("Class", "HediffComp_SeverityPerDay")
            .text_child("severityPerDay", format_float(severity));
        hediff.child("stages").push(self.effect_stage());

        Ok(vec![hediff])
    }
}
