use super::common::*;
use super::derived::size_vector;
use super::error::Result;
use super::{BuildContext, DefBuilder};
use crate::model::{Building, Record};
use crate::xml::Element;

impl DefBuilder for Building {
    fn build_def(&self, ctx: &BuildContext) -> Result<Element> {
        let size = size_vector(Self::CATEGORY, &self.def_name, &self.size)?;

        let mut def = def_root(self);
        def.text_child("thingClass", "Building");
        def.text_child("category", "Building");
        graphic_data(&mut def, &thing_tex_path(&self.def_name), "Graphic_Single");
        def.text_child("size", size);
        def.text_child("altitudeLayer", "Building");
        def.text_child("passability", "PassThroughOnly");
        def.text_child("blockWind", true);
        def.text_child("fillPercent", "0.5");
        def.text_child("rotatable", false);
        def.text_child("selectable", true);
        def.text_child("drawerType", "MapMeshAndRealTime");
        def.text_child("terrainAffordanceNeeded", "Light");
        sound_interact(&mut def, self, "Standard_Drop");

        let stats = def.child("statBases");
        stats.text_child("MaxHitPoints", self.hit_points);
        stats.text_child("WorkToBuild", self.work_to_build);
        stats.text_child("Flammability", "1.0");

        def.child("building").text_child("isInert", true);
        def.child("costList").text_child("Steel", 25);
        research_prerequisites(&mut def, self, ctx);
        Ok(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GenerationError, ResearchIndex, ResearchMode};
    use crate::model::{fields, Category};

    fn wall() -> Building {
        Building::from_form(&fields([
            ("defName", "Wall"),
            ("label", "wall"),
            ("size", "2,1"),
            ("hitPoints", "300"),
        ]))
        .unwrap()
    }

    #[test]
    fn test_building_def() {
        let index = ResearchIndex::default();
        let def = wall()
            .build_def(&BuildContext::new(&index, ResearchMode::Inline))
            .unwrap();
        assert_eq!(def.attr("ParentName"), Some("BuildingBase"));
        assert_eq!(def.find("size").unwrap().text(), "(2,1)");
        assert_eq!(def.find_path("statBases/MaxHitPoints").unwrap().text(), "300");
        assert_eq!(def.find_path("costList/Steel").unwrap().text(), "25");
        assert!(def.find("researchPrerequisites").is_none());
    }

    #[test]
    fn test_bad_size_is_generation_error() {
        let mut building = wall();
        building.size = "two,1".into();
        let index = ResearchIndex::default();
        let err = building
            .build_def(&BuildContext::new(&index, ResearchMode::Inline))
            .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidNumber { field: "size", .. }));
        assert_eq!(err.category(), Category::Building);
    }
}
