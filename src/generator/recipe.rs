use super::common::*;
use super::error::Result;
use super::lists::parse_ingredients;
use super::{BuildContext, DefBuilder};
use crate::model::Recipe;
use crate::xml::Element;

impl DefBuilder for Recipe {
    fn build_def(&self, _ctx: &BuildContext) -> Result<Element> {
        let mut def = def_root(self);
        def.text_child("jobString", format!("Making {}.", self.label));
        def.text_child("workAmount", self.work_amount);
        def.text_child("workSkill", "Crafting");
        def.text_child("effectWorking", "Cook");
        def.text_child("soundWorking", "Recipe_CookMeal");

        let ingredients = def.child("ingredients");
        for ingredient in parse_ingredients(&self.ingredients) {
            let entry = ingredients.child("li");
            entry
                .child("filter")
                .list("thingDefs", [ingredient.def_name]);
            entry.text_child("count", ingredient.count);
        }

        def.child("products")
            .text_child(self.product.trim(), self.product_count);
        def.child("defaultIngredientFilter")
            .list("categories", ["Root"]);
        def.list("recipeUsers", ["CraftingSpot"]);
        Ok(def)
    }
}
