//! Ordered choice between grammars with the same output.

use crate::{Buffer, Decoder, Encoder, Error, Input};
use paste::paste;
use tracing::trace;

/// The order in which a [OneOf] tries its alternatives when printing.
///
/// Decoding always tries alternatives in declared order. When several alternatives can print the
/// same value, the one tried first when printing determines the output, so the printing order
/// should favor the alternative whose output the decoder would map back to that value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrintOrder {
    /// Last-declared alternative first.
    ///
    /// Declaring the most specific alternative first (as decoding requires) usually means the most
    /// general one is last, and the general one is typically the one that refuses values it can't
    /// print faithfully (e.g. a bare field refusing a value containing a separator), leaving them
    /// to the specific alternative.
    #[default]
    Reverse,

    /// Declared order, the same as decoding.
    Declared,
}

/// Tries each of a tuple of grammars in turn. See [one_of].
#[derive(Clone, Copy, Debug)]
pub struct OneOf<T> {
    alternatives: T,
    order: PrintOrder,
}

/// Creates a grammar that decodes with the first of `alternatives` that succeeds.
///
/// Between 2 and 8 alternatives are supported, all with the same output. If every alternative
/// fails, [Error::Exhausted] lists their errors in declared order. Printing tries the alternatives
/// in [PrintOrder::Reverse] unless configured otherwise with [OneOf::print_order], discarding
/// anything a failed alternative appended.
///
/// # Examples
///
/// ```
/// use commonware_grammar::{literal, one_of, prefix, zip, Decoder, Encoder, Text};
///
/// let quoted = zip()
///     .skip(literal("\""))
///     .then(prefix(|c: char| c != '"'))
///     .skip(literal("\""));
/// let bare = prefix(|c: char| c != ',' && c != '"');
/// let field = one_of((quoted, bare));
///
/// let printed: String = field.encode(Text::from("Blob")).unwrap();
/// assert_eq!(printed, "Blob");
/// let printed: String = field.encode(Text::from("Blob, Esq.")).unwrap();
/// assert_eq!(printed, "\"Blob, Esq.\"");
///
/// let (value, _) = field.decode(Text::from("\"Blob, Esq.\",true")).unwrap();
/// assert_eq!(value, "Blob, Esq.");
/// ```
pub fn one_of<T>(alternatives: T) -> OneOf<T> {
    OneOf {
        alternatives,
        order: PrintOrder::default(),
    }
}

impl<T> OneOf<T> {
    /// Sets the order alternatives are tried in when printing.
    pub fn print_order(mut self, order: PrintOrder) -> Self {
        self.order = order;
        self
    }
}

// Choice implementation
// Every alternative must produce the same output. The second list is the first reversed.
macro_rules! impl_one_of_for_tuple {
    (($($index:literal),*), ($($reversed:literal),*)) => {
        paste! {
            impl<I: Input, O, $( [<P $index>]: Decoder<I, Output = O> ),*> Decoder<I>
                for OneOf<( $( [<P $index>], )* )>
            {
                type Output = O;

                fn read(&self, input: &mut I) -> Result<O, Error> {
                    let checkpoint = input.clone();
                    let mut errors = Vec::new();
                    $(
                        match self.alternatives.$index.read(input) {
                            Ok(output) => return Ok(output),
                            Err(err) => {
                                trace!(alternative = $index, %err, "alternative failed to decode");
                                *input = checkpoint.clone();
                                errors.push(err);
                            }
                        }
                    )*
                    Err(Error::Exhausted(errors))
                }
            }

            impl<I: Input, O: Clone, $( [<P $index>]: Encoder<I, Output = O> ),*> Encoder<I>
                for OneOf<( $( [<P $index>], )* )>
            {
                fn write<B: Buffer<Input = I>>(&self, output: O, buf: &mut B) -> Result<(), Error> {
                    let checkpoint = buf.len();
                    let mut errors = Vec::new();
                    match self.order {
                        PrintOrder::Declared => {
                            $(
                                match self.alternatives.$index.write(output.clone(), buf) {
                                    Ok(()) => return Ok(()),
                                    Err(err) => {
                                        trace!(alternative = $index, %err, "alternative failed to encode");
                                        buf.truncate(checkpoint);
                                        errors.push(err);
                                    }
                                }
                            )*
                        }
                        PrintOrder::Reverse => {
                            $(
                                match self.alternatives.$reversed.write(output.clone(), buf) {
                                    Ok(()) => return Ok(()),
                                    Err(err) => {
                                        trace!(alternative = $reversed, %err, "alternative failed to encode");
                                        buf.truncate(checkpoint);
                                        errors.push(err);
                                    }
                                }
                            )*

                            // Report errors in declared order
                            errors.reverse();
                        }
                    }
                    Err(Error::Exhausted(errors))
                }
            }
        }
    };
}

// Generate implementations for 2 through 8 alternatives
impl_one_of_for_tuple!((0, 1), (1, 0));
impl_one_of_for_tuple!((0, 1, 2), (2, 1, 0));
impl_one_of_for_tuple!((0, 1, 2, 3), (3, 2, 1, 0));
impl_one_of_for_tuple!((0, 1, 2, 3, 4), (4, 3, 2, 1, 0));
impl_one_of_for_tuple!((0, 1, 2, 3, 4, 5), (5, 4, 3, 2, 1, 0));
impl_one_of_for_tuple!((0, 1, 2, 3, 4, 5, 6), (6, 5, 4, 3, 2, 1, 0));
impl_one_of_for_tuple!((0, 1, 2, 3, 4, 5, 6, 7), (7, 6, 5, 4, 3, 2, 1, 0));
