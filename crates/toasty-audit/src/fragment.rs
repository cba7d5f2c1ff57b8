//! Historical schema fragments.
//!
//! A fragment is a small element tree (`property`, `column`, ...) appended to
//! the definition of an entity's audit table.

mod element;
pub use element::Element;

mod rename;
pub use rename::{column_names, prefix_names_in_property_element};
