use super::common::*;
use super::error::Result;
use super::lists::split_list;
use super::{BuildContext, DefBuilder};
use crate::model::Apparel;
use crate::xml::Element;

impl DefBuilder for Apparel {
    fn build_def(&self, ctx: &BuildContext) -> Result<Element> {
        let mut def = def_root(self);
        def.text_child("techLevel", "Industrial");
        graphic_data(&mut def, &thing_tex_path(&self.def_name), "Graphic_Single");
        def.text_child("useHitPoints", true);
        def.text_child("selectable", true);
        sound_interact(&mut def, self, "Standard_Drop");

        let apparel = def.child("apparel");
        apparel.list("bodyPartGroups", split_list(&self.body_parts));
        apparel.text_child("wornGraphicPath", worn_tex_path(&self.def_name));
        apparel.list("layers", [&self.layer]);
        apparel.list("defaultOutfitTags", ["Worker"]);
        apparel.list("tags", [&self.apparel_type]);

        let stats = def.child("statBases");
        stats.text_child("MaxHitPoints", 100);
        stat(stats, "MarketValue", self.market_value);
        stat(stats, "Mass", self.mass);
        stats.text_child("WorkToMake", self.work_to_make);
        for (name, value) in [
            ("ArmorRating_Sharp", self.armor_sharp),
            ("ArmorRating_Blunt", self.armor_blunt),
            ("ArmorRating_Heat", self.armor_heat),
        ] {
            if value > 0.0 {
                stat(stats, name, value);
            }
        }
        stats.text_child("EquipDelay", "1.5");

        def.list("thingCategories", ["Apparel"]);
        def.list("tradeTags", ["Clothing"]);
        research_prerequisites(&mut def, self, ctx);
        Ok(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{ResearchIndex, ResearchMode};
    use crate::model::fields;

    fn build(form: &[(&str, &str)]) -> Element {
        let mut pairs = vec![("defName", "Vest"), ("label", "vest")];
        pairs.extend_from_slice(form);
        let apparel = Apparel::from_form(&fields(pairs)).unwrap();
        let index = ResearchIndex::default();
        apparel
            .build_def(&BuildContext::new(&index, ResearchMode::Inline))
            .unwrap()
    }

    #[test]
    fn test_only_positive_armor_emitted() {
        let def = build(&[("armorSharp", "0"), ("armorBlunt", "2.0"), ("armorHeat", "0")]);
        let stats = def.find("statBases").unwrap();
        let armor: Vec<_> = stats
            .children
            .iter()
            .filter(|c| c.name.starts_with("ArmorRating_"))
            .collect();
        assert_eq!(armor.len(), 1);
        assert_eq!(armor[0].name, "ArmorRating_Blunt");
        assert_eq!(armor[0].text(), "2.0");
    }

    #[test]
    fn test_body_parts_split_in_order() {
        let def = build(&[("bodyParts", "Torso, Legs,, Shoulders")]);
        let parts: Vec<_> = def
            .find_path("apparel/bodyPartGroups")
            .unwrap()
            .find_all("li")
            .map(Element::text)
            .collect();
        assert_eq!(parts, ["Torso", "Legs", "Shoulders"]);
        assert_eq!(
            def.find_path("apparel/wornGraphicPath").unwrap().text(),
            "Things/Apparel/Vest"
        );
    }
}
