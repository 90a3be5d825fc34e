//! Operations behind the `cadlist` command.
//!
//! Each operation returns a report; printing is left to `reports`.

pub mod generate;

pub use generate::generate;
