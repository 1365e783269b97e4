//! Describe a format once, then both parse and print it.
//!
//! # Overview
//!
//! A grammar is a tree of combinators that can run in both directions:
//! - Decode input (text or bytes) into structured values
//! - Encode structured values back into input
//!
//! The two directions are inverses of each other. Whatever a grammar prints, it decodes back
//! into the same value, and whatever input it decodes, it prints back unchanged (for grammars
//! whose input has a single canonical form). Values a grammar could never have produced are
//! rejected when printing rather than printed ambiguously.
//!
//! # Building Blocks
//!
//! - Matching: [literal], [prefix], [end], [empty], [int], [boolean]
//! - Sequencing: [zip], with [Zip::then] for kept values and [Zip::skip] for discarded ones
//! - Choice: [one_of] (or [GrammarExt::or]), tried in order with full rollback
//! - Repetition: [many], with separators, a terminator and count bounds
//! - Transformation: [GrammarExt::map] with an invertible [Conversion]
//!
//! Grammars decode from any [Input] cursor ([Text] for text, [bytes::Bytes] for bytes) and print
//! into any [Buffer] (`String`, `Vec<u8>` or [bytes::BytesMut]).
//!
//! # Example
//!
//! ```
//! use commonware_grammar::{
//!     conversion::{string, total},
//!     boolean, end, int, literal, many, one_of, prefix, zip, Decoder, Encoder, GrammarExt, Text,
//! };
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct User {
//!     id: i64,
//!     name: String,
//!     admin: bool,
//! }
//!
//! // A name is either quoted (and may contain commas) or bare
//! let quoted = zip()
//!     .skip(literal("\""))
//!     .then(prefix(|c: char| c != '"'))
//!     .skip(literal("\""));
//! let bare = prefix(|c: char| c != ',' && c != '"' && c != '\n');
//! let name = one_of((quoted, bare)).map(string());
//!
//! let user = zip()
//!     .then(int::<i64>())
//!     .skip(literal(","))
//!     .then(name)
//!     .skip(literal(","))
//!     .then(boolean())
//!     .map(total(
//!         |(id, name, admin): (i64, String, bool)| User { id, name, admin },
//!         |u: User| (u.id, u.name, u.admin),
//!     ));
//! let users = many(user).separator(literal("\n")).terminator(end());
//!
//! let value = vec![
//!     User { id: 1, name: "Blob".into(), admin: true },
//!     User { id: 2, name: "Blob, Esq.".into(), admin: false },
//! ];
//! let printed: String = users.encode(value.clone()).unwrap();
//! assert_eq!(printed, "1,Blob,true\n2,\"Blob, Esq.\",false");
//!
//! let decoded = users.decode_exact(Text::from(printed)).unwrap();
//! assert_eq!(decoded, value);
//! ```

pub mod buffer;
pub mod combinators;
pub mod config;
pub mod conversion;
pub mod error;
pub mod grammar;
pub mod input;
pub mod types;

// Re-export main types and traits
pub use buffer::Buffer;
pub use combinators::{
    empty::{empty, Empty},
    end::{end, End},
    literal::{literal, Literal},
    many::{many, Many},
    map::Map,
    one_of::{one_of, OneOf, PrintOrder},
    optional::{optional, Optional},
    prefix::{prefix, Prefix},
    skip::{skip, Skip},
    zip::{zip, Zip},
    GrammarExt,
};
pub use config::RangeCfg;
pub use conversion::Conversion;
pub use error::Error;
pub use grammar::{Decoder, Encoder, Grammar};
pub use input::{Input, Item, Text};
pub use types::primitives::{boolean, int, Bool, Int};
