//! Makefile fragment formatting.

use std::fmt;

use crate::{
    paths::{
        BUILD_PREFIX, CONTINUATION, DEPENDENCY_EXTENSION, OBJECT_EXTENSION, SOURCE_EXTENSION,
        SOURCE_PREFIX,
    },
    scan::BaseName,
};

/// Template for a single line of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTemplate {
    pub prefix: &'static str,
    pub extension: &'static str,
}

impl LineTemplate {
    /// Render the line for a base name, including the continuation marker.
    ///
    /// The base name is inserted verbatim.
    pub fn line(&self, base: &BaseName) -> String {
        format!("{}{}{}{}", self.prefix, base, self.extension, CONTINUATION)
    }
}

/// The three kinds of block, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Source,
    Dependency,
    Object,
}

impl BlockKind {
    pub const ALL: [BlockKind; 3] = [
        BlockKind::Source,
        BlockKind::Dependency,
        BlockKind::Object,
    ];

    pub fn template(self) -> LineTemplate {
        match self {
            BlockKind::Source => LineTemplate {
                prefix: SOURCE_PREFIX,
                extension: SOURCE_EXTENSION,
            },
            BlockKind::Dependency => LineTemplate {
                prefix: BUILD_PREFIX,
                extension: DEPENDENCY_EXTENSION,
            },
            BlockKind::Object => LineTemplate {
                prefix: BUILD_PREFIX,
                extension: OBJECT_EXTENSION,
            },
        }
    }
}

/// One line per base name, rendered with a single template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    kind: BlockKind,
    lines: Vec<String>,
}

impl Block {
    pub fn new(kind: BlockKind, names: &[BaseName]) -> Self {
        let template = kind.template();
        Self {
            kind,
            lines: names.iter().map(|name| template.line(name)).collect(),
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Lines joined by newlines, without a trailing newline.
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Source, dependency, and object blocks for the same base names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    blocks: [Block; 3],
}

impl Fragment {
    pub fn new(names: &[BaseName]) -> Self {
        Self {
            blocks: BlockKind::ALL.map(|kind| Block::new(kind, names)),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, kind: BlockKind) -> &Block {
        match kind {
            BlockKind::Source => &self.blocks[0],
            BlockKind::Dependency => &self.blocks[1],
            BlockKind::Object => &self.blocks[2],
        }
    }
}

/// Each block followed by a newline, in output order.
impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            writeln!(f, "{}", block)?;
        }
        Ok(())
    }
}
