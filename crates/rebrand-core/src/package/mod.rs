pub mod archive;
pub mod ooxml;
pub mod relationships;

pub use archive::{list_entries, read_entry, rewrite_entries};
pub use ooxml::OoxmlPackage;
pub use relationships::Relationship;
