pub mod cli;
pub mod config;
pub mod filter;
pub mod generator;
pub mod model;
pub mod project;
pub mod ui;
pub mod writer;
pub mod xml;

pub use generator::{GenerationError, Generator, ModInfo, ResearchMode};
pub use model::{Category, RecordStore, ValidationError};
pub use project::ModProject;
