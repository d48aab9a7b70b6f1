//! Ready-to-use navbar playground: fixed visual style, four framework
//! targets with full mobile-menu functionality in the generated code.

mod codegen;
mod selection;

pub use codegen::{export_artifact, generate, MOBILE_MENU_CLASSES, NAVBAR_CLASSES};
pub use selection::StackFramework;
