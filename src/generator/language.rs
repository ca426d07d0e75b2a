//! English keyed language data for record descriptions

use crate::model::{Collection, Record, RecordStore};
use crate::xml::Element;

fn push_descriptions<T: Record>(root: &mut Element, records: &Collection<T>) {
    for record in records {
        let description = record.description().trim();
        if !description.is_empty() {
            root.text_child(format!("{}.description", record.def_name()), description);
        }
    }
}

/// `LanguageData` document with one `<defName.description>` key per described
/// record. Recipes carry no translatable keys.
pub fn generate_language_data(store: &RecordStore) -> Element {
    let mut root = Element::new("LanguageData");
    push_descriptions(&mut root, store.items());
    push_descriptions(&mut root, store.weapons());
    push_descriptions(&mut root, store.buildings());
    push_descriptions(&mut root, store.apparel());
    push_descriptions(&mut root, store.drugs());
    push_descriptions(&mut root, store.workbenches());
    push_descriptions(&mut root, store.research());
    root
}
