//! One module per family of assertions, each against the fixture it needs.

mod alignment;
mod background;
mod dimensions;
mod fonts;
