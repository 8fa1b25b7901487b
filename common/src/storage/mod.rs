mod content_provider;
mod document;
mod serializer;
mod validate;

pub use content_provider::{ContentProvider, FileContentProvider, MemoryContentProvider};
pub use document::YamlDocument;
pub use serializer::{Serializer, YamlSerializer};
pub use validate::Validate;
