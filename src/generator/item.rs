use super::common::*;
use super::error::Result;
use super::lists::split_list;
use super::{BuildContext, DefBuilder};
use crate::model::Item;
use crate::xml::Element;

impl DefBuilder for Item {
    fn build_def(&self, ctx: &BuildContext) -> Result<Element> {
        let mut def = def_root(self);
        def.text_child("category", "Item");
        def.text_child("thingClass", "ThingWithComps");
        def.text_child("drawerType", "MapMeshOnly");
        def.text_child("useHitPoints", false);
        def.text_child("selectable", true);
        def.text_child("rotatable", false);
        def.text_child("stackLimit", self.stack_limit);

        graphic_data(&mut def, &thing_tex_path(&self.def_name), "Graphic_StackCount");
        sound_interact(&mut def, self, "Standard_Drop");

        let stats = def.child("statBases");
        stat(stats, "MarketValue", self.market_value);
        stat(stats, "Mass", self.mass);

        def.list("thingCategories", split_list(&self.category));
        research_prerequisites(&mut def, self, ctx);
        Ok(def)
    }
}
