//! Customizer playground: selection axes, style composition, code generator.

mod codegen;
mod selection;
mod style;

pub use codegen::{export_artifact, generate};
pub use selection::{Device, Framework, Layout, Selection, Theme, Variant};
pub use style::navbar_class;
