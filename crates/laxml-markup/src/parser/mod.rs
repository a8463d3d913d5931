//! Tree assembly: turning a token stream into a node forest.

/// Tree assembler implementation.
pub mod core;
mod legacy;

pub use self::core::{NestingMode, ParseOptions, TreeAssembler, assemble, print_tree};
