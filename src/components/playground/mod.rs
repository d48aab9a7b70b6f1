//! Customizer playground: option controls, live preview, generated code.

mod code_panel;
mod controls;
mod playground;
mod preview;

pub use playground::Playground;
