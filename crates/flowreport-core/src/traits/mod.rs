//! Collaborator seams consumed by the document writer.

pub mod extension;
pub mod resolver;
pub mod settings;

pub use extension::{AttributeExtension, ExtraAttributes, NoExtension};
pub use resolver::MethodResolver;
pub use settings::LineNumberSettings;
