//! Document model types for extracted PDF content.
//!
//! This module defines the intermediate representation handed over by a
//! PDF extractor: pages of typed elements. The model carries structure only;
//! rendering lives in [`crate::render`].

mod document;
mod element;
mod list;
mod page;
mod style;
mod table;

pub use document::Document;
pub use element::{Element, Heading, LineBreak, Link, Paragraph};
pub use list::{List, ListItem};
pub use page::Page;
pub use style::TextStyle;
pub use table::{Table, TableCell, TableRow};
