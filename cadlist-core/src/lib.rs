//! Core scanning and formatting for cadlist.
//!
//! Lists the `.cpp` files of a directory and turns their base names into
//! the source, dependency, and object lists of a makefile fragment.

mod error;
mod fragment;
pub mod paths;
mod scan;

pub use error::{Result, ScanError};
pub use fragment::{Block, BlockKind, Fragment, LineTemplate};
pub use scan::{BaseName, scan};
