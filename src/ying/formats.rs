//! Output formats for parsed programs
//!
//! - [`source`]: prints AST nodes back to Ying source
//! - [`tag`]: XML-like tag tree mirroring the AST

pub mod source;
pub mod tag;

pub use source::ToSource;
pub use tag::serialize_program;
