//! Stack playground: framework picker, fixed-style preview, generated code.

mod hero;
mod preview;
mod stack;

pub use hero::TemplateHero;
pub use stack::StackPlayground;
