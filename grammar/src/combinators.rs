//! Combinators for building grammars out of smaller grammars.

pub mod empty;
pub mod end;
pub mod literal;
pub mod many;
pub mod map;
pub mod one_of;
pub mod optional;
pub mod prefix;
pub mod skip;
pub mod zip;

use crate::types::primitives::{Bool, Int};
use empty::Empty;
use end::End;
use literal::Literal;
use many::{many, Many};
use map::Map;
use one_of::{one_of, OneOf};
use optional::{optional, Optional};
use prefix::Prefix;
use skip::{skip, Skip};
use zip::Zip;

/// Extension methods for chaining combinators onto a grammar.
pub trait GrammarExt: Sized {
    /// Transforms the output with an invertible [crate::Conversion].
    fn map<C>(self, conversion: C) -> Map<Self, C> {
        Map::new(self, conversion)
    }

    /// Matches this grammar or nothing. See [optional].
    fn optional(self) -> Optional<Self> {
        optional(self)
    }

    /// Wraps a grammar producing `()` as a discarded grammar. See [skip].
    ///
    /// Named apart from [Zip::skip], which appends a discarded slot to a sequence.
    fn skipped(self) -> Skip<Self> {
        skip(self)
    }

    /// Repeats this grammar. See [many].
    fn many(self) -> Many<Self> {
        many(self)
    }

    /// Tries this grammar, then `other`. See [one_of].
    fn or<P>(self, other: P) -> OneOf<(Self, P)> {
        one_of((self, other))
    }
}

macro_rules! impl_grammar_ext {
    ($($combinator:ident<$($param:ident),*>),* $(,)?) => {
        $(
            impl<$($param),*> GrammarExt for $combinator<$($param),*> {}
        )*
    };
}

impl_grammar_ext!(
    Literal<L>,
    Prefix<F>,
    Zip<S>,
    OneOf<T>,
    Many<P, S, T>,
    Skip<P>,
    Map<P, C>,
    Optional<P>,
    Int<T>,
);

impl GrammarExt for End {}
impl GrammarExt for Empty {}
impl GrammarExt for Bool {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{int, literal, zip, Decoder, Encoder, Text};

    #[test]
    fn test_skip_slot_and_skipped_sequence() {
        // `skip` on a sequence appends a slot, `skipped` wraps the whole sequence
        let arrow = zip().skip(literal("-")).skip(literal(">")).skipped();
        let ((), rest) = arrow.decode(Text::from("->x")).unwrap();
        assert_eq!(rest, "x");
        assert_eq!(arrow.encode::<String>(()).unwrap(), "->");

        let target = zip().skip(arrow).then(int::<u8>());
        assert_eq!(target.decode_exact(Text::from("->9")), Ok(9));
        assert_eq!(target.encode::<String>(9).unwrap(), "->9");
    }
}
