pub mod category;
pub mod error;
pub mod form;
pub mod records;
pub mod store;

pub use category::*;
pub use error::ValidationError;
pub use form::{fields, FieldMap};
pub use records::*;
pub use store::*;
