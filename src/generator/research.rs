use super::common::*;
use super::error::Result;
use super::{BuildContext, DefBuilder};
use crate::model::Research;
use crate::xml::Element;

impl DefBuilder for Research {
    fn build_def(&self, _ctx: &BuildContext) -> Result<Element> {
        let mut def = def_root(self);
        def.text_child("baseCost", self.base_cost);
        def.text_child("techLevel", &self.tech_level);
        def.text_child("tab", "Main");
        Ok(def)
    }
}
