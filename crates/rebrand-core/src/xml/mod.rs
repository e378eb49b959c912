pub mod arena;
pub mod builder;
pub mod namespaces;
pub mod node;
pub mod parser;
pub mod xname;

pub use arena::XmlDocument;
pub use node::XmlNodeData;
pub use xname::{XAttribute, XName};
pub use namespaces::{A, CT, P, R, REL, S, W, XDR};
