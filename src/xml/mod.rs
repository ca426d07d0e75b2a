//! XML element tree and text serializer

pub mod element;
pub mod serialize;

pub use element::Element;
pub use serialize::{to_xml_string, XmlError, DECLARATION};
