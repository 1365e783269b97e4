//! Grammars for common value types.

pub mod primitives;
