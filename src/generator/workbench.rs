use super::common::*;
use super::derived::{format_float, size_vector};
use super::error::Result;
use super::{BuildContext, DefBuilder, ResearchMode};
use crate::model::{Record, Workbench};
use crate::xml::Element;

/// Prerequisite of workbenches no research project unlocks
pub const DEFAULT_WORKBENCH_RESEARCH: &str = "BasicFabrication";

/// Skill value meaning the bench has no skill requirement
const NO_SKILL: &str = "None";

impl DefBuilder for Workbench {
    fn build_def(&self, ctx: &BuildContext) -> Result<Element> {
        let size = size_vector(Self::CATEGORY, &self.def_name, &self.size)?;

        let mut def = def_root(self);
        def.text_child("techLevel", "Industrial");
        graphic_data(&mut def, &thing_tex_path(&self.def_name), "Graphic_Multi")
            .text_child("drawSize", &size);
        sound_interact(&mut def, self, "Standard_Drop");

        let costs = def.child("costList");
        costs.text_child("Steel", self.steel_cost);
        if self.component_cost > 0 {
            costs.text_child("ComponentIndustrial", self.component_cost);
        }

        def.text_child("altitudeLayer", "Building");
        def.text_child("passability", "PassThroughOnly");
        def.text_child("pathCost", 50);
        def.text_child("blockWind", true);
        def.text_child("fillPercent", "0.5");
        def.text_child("useHitPoints", true);
        def.text_child("size", &size);

        let stats = def.child("statBases");
        stats.text_child("MaxHitPoints", self.hit_points);
        stats.text_child("WorkToBuild", self.work_to_build);
        stats.text_child("Flammability", "1.0");
        stats.text_child("WorkTableWorkSpeedFactor", format_float(self.speed_factor));
        stats.text_child("WorkTableEfficiencyFactor", "1.0");

        def.list("thingCategories", ["BuildingsProduction"]);
        let building = def.child("building");
        building.text_child("isEdifice", true);
        building.list("buildingTags", [&self.workbench_type]);

        def.text_child("designationCategory", "Production");
        def.text_child("hasInteractionCell", true);
        def.text_child("interactionCellOffset", "(0,0,-1)");
        def.list("inspectorTabs", ["ITab_Bills"]);

        if self.required_skill != NO_SKILL {
            let requirement = def.child("skillRequirements").child("li");
            requirement.text_child("skill", &self.required_skill);
            requirement.text_child("minLevel", self.required_skill_level);
        }

        if self.power_consumption > 0 {
            let power = def
                .child("comps")
                .child("li")
                .set_attr("Class", "CompProperties_Power");
            power.text_child("compClass", "CompPowerTrader");
            power.text_child("basePowerConsumption", self.power_consumption);
            power.text_child("shortCircuitInRain", true);
        }

        self.prerequisites(&mut def, ctx);
        def.text_child("constructionSkillPrerequisite", 4);
        Ok(def)
    }
}

impl Workbench {
    /// The unlocking research inline, or the default prerequisite when nothing
    /// unlocks the bench. In patch mode an unlocked bench gets its prerequisite
    /// from the patch file only.
    fn prerequisites(&self, def: &mut Element, ctx: &BuildContext) {
        if !ctx.is_unlocked_by_research(Self::CATEGORY, &self.def_name) {
            def.list("researchPrerequisites", [DEFAULT_WORKBENCH_RESEARCH]);
            return;
        }
        if ctx.mode == ResearchMode::Inline {
            research_prerequisites(def, self, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ResearchIndex;
    use crate::model::{fields, RecordStore, Research};

    fn bench(extra: &[(&str, &str)]) -> Workbench {
        let mut pairs = vec![("defName", "Forge"), ("label", "forge")];
        pairs.extend_from_slice(extra);
        Workbench::from_form(&fields(pairs)).unwrap()
    }

    fn build(bench: &Workbench, index: &ResearchIndex, mode: ResearchMode) -> Element {
        bench.build_def(&BuildContext::new(index, mode)).unwrap()
    }

    #[test]
    fn test_conditional_cost_and_power() {
        let index = ResearchIndex::default();
        let plain = build(&bench(&[]), &index, ResearchMode::Inline);
        assert_eq!(plain.attr("ParentName"), Some("BenchBase"));
        assert_eq!(plain.find_path("costList/Steel").unwrap().text(), "50");
        assert!(plain.find_path("costList/ComponentIndustrial").is_none());
        assert!(plain.find("comps").is_none());
        assert_eq!(plain.find("size").unwrap().text(), "(3,1)");
        assert_eq!(plain.find_path("graphicData/drawSize").unwrap().text(), "(3,1)");

        let powered = build(
            &bench(&[("componentCost", "2"), ("powerConsumption", "250")]),
            &index,
            ResearchMode::Inline,
        );
        assert_eq!(powered.find_path("costList/ComponentIndustrial").unwrap().text(), "2");
        let comp = powered.find_path("comps/li").unwrap();
        assert_eq!(comp.attr("Class"), Some("CompProperties_Power"));
        assert_eq!(comp.find("basePowerConsumption").unwrap().text(), "250");
    }

    #[test]
    fn test_skill_requirement_skipped_for_none() {
        let index = ResearchIndex::default();
        let skilled = build(
            &bench(&[("requiredSkill", "Crafting"), ("requiredSkillLevel", "6")]),
            &index,
            ResearchMode::Inline,
        );
        assert_eq!(skilled.find_path("skillRequirements/li/minLevel").unwrap().text(), "6");

        let unskilled = build(&bench(&[("requiredSkill", "None")]), &index, ResearchMode::Inline);
        assert!(unskilled.find("skillRequirements").is_none());
    }

    #[test]
    fn test_research_prerequisite_fallback() {
        let forge = bench(&[]);
        let mut store = RecordStore::new();
        store.insert(forge.clone()).unwrap();

        let index = ResearchIndex::build(store.research());
        let def = build(&forge, &index, ResearchMode::Inline);
        assert_eq!(
            def.find_path("researchPrerequisites/li").unwrap().text(),
            DEFAULT_WORKBENCH_RESEARCH
        );

        store
            .insert(Research {
                def_name: "Smithing".into(),
                label: "smithing".into(),
                base_cost: 800,
                tech_level: "Medieval".into(),
                unlocked_workbenches: vec!["Forge - forge".into()],
                ..Default::default()
            })
            .unwrap();
        let index = ResearchIndex::build(store.research());
        let def = build(&forge, &index, ResearchMode::Inline);
        assert_eq!(def.find_path("researchPrerequisites/li").unwrap().text(), "Smithing");

        let def = build(&forge, &index, ResearchMode::Patches);
        assert!(def.find("researchPrerequisites").is_none());
    }
}
