//! Path constants for generated build lists.
//!
//! Every emitted line is one of these prefixes, a base name, an extension,
//! and the line continuation marker.

/// Extension a directory entry must end with to be listed.
pub const SOURCE_EXTENSION: &str = ".cpp";

/// Prefix for source file lines, relative to the build directory.
pub const SOURCE_PREFIX: &str = "../src/cadical/src/";

/// Prefix for dependency and object file lines.
pub const BUILD_PREFIX: &str = "./src/cadical/src/";

/// Extension for dependency files.
pub const DEPENDENCY_EXTENSION: &str = ".d";

/// Extension for object files.
pub const OBJECT_EXTENSION: &str = ".o";

/// Appended to every line so the list continues in a makefile variable.
pub const CONTINUATION: &str = " \\";
