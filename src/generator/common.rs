//! Fragments shared by the thing builders

use super::derived::format_float;
use super::BuildContext;
use crate::model::Record;
use crate::xml::Element;

/// Category's def root with identity children, inheriting the category
/// template when it has one
pub fn def_root<R: Record>(record: &R) -> Element {
    let spec = R::CATEGORY.spec();
    let mut def = Element::new(spec.def_element);
    if let Some(parent) = spec.parent_name {
        def.set_attr("ParentName", parent);
    }
    identity(&mut def, record);
    def
}

/// `defName`, `label`, `description`
pub fn identity<R: Record>(def: &mut Element, record: &R) {
    def.text_child("defName", record.def_name());
    def.text_child("label", record.label());
    def.text_child("description", record.description());
}

/// `graphicData` block pointing at the record's texture path
pub fn graphic_data<'a>(
    def: &'a mut Element,
    tex_path: &str,
    graphic_class: &str,
) -> &'a mut Element {
    let graphic = def.child("graphicData");
    graphic.text_child("texPath", tex_path);
    graphic.text_child("graphicClass", graphic_class);
    graphic
}

/// Default texture path of a thing
pub fn thing_tex_path(def_name: &str) -> String {
    format!("Things/{}", def_name)
}

/// Texture path of apparel drawn on a pawn
pub fn worn_tex_path(def_name: &str) -> String {
    format!("Things/Apparel/{}", def_name)
}

/// Append a float stat rendered the way def files expect
pub fn stat(stats: &mut Element, name: &str, value: f64) {
    stats.text_child(name, format_float(value));
}

/// Inline `researchPrerequisites` when a research unlocks the record
pub fn research_prerequisites<R: Record>(def: &mut Element, record: &R, ctx: &BuildContext) {
    if let Some(research) = ctx.inline_prerequisite(R::CATEGORY, record.def_name()) {
        def.list("researchPrerequisites", [research]);
    }
}

/// `soundInteract` only when the record carries a sound
pub fn sound_interact<R: Record>(def: &mut Element, record: &R, sound: &str) {
    if record.sound().is_some() {
        def.text_child("soundInteract", sound);
    }
}

