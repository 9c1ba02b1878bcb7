//! HTML extraction modules
//!
//! Each module handles one page shape: the encyclopedia infobox, the
//! catalog movie page, and the shared multi-name cell parser.

mod catalog;
mod entity_list;
mod infobox;

pub use catalog::*;
pub use entity_list::*;
pub use infobox::*;
