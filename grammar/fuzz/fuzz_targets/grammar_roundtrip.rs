#![no_main]

use arbitrary::Arbitrary;
use bytes::Bytes;
use commonware_grammar::{
    boolean,
    conversion::{string, total, utf8},
    end, int, literal, many, one_of, prefix, zip, Decoder, Encoder, GrammarExt, Text,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug, Clone, PartialEq)]
struct User {
    id: i64,
    name: String,
    admin: bool,
}

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Users(Vec<User>),
    Numbers(Vec<i64>),
    Text(String),
    Bytes(Vec<u8>),
}

fn users() -> impl Encoder<Text, Output = Vec<User>> {
    let quoted = zip()
        .skip(literal("\""))
        .then(prefix(|c: char| c != '"'))
        .skip(literal("\""));
    let bare = prefix(|c: char| c != ',' && c != '"' && c != '\n');
    let name = one_of((quoted, bare)).map(string());
    let user = zip()
        .then(int::<i64>())
        .skip(literal(","))
        .then(name)
        .skip(literal(","))
        .then(boolean())
        .map(total(
            |(id, name, admin): (i64, String, bool)| User { id, name, admin },
            |user: User| (user.id, user.name, user.admin),
        ));
    many(user).separator(literal("\n")).terminator(end())
}

fn roundtrip_users(value: Vec<User>) {
    let grammar = users();

    // Names with both a quote and a comma (or newline) have no printed form
    let Ok(printed) = grammar.encode::<String>(value.clone()) else {
        return;
    };
    let decoded = grammar
        .decode_exact(Text::from(printed))
        .expect("Failed to decode a successfully encoded input!");
    assert_eq!(value, decoded);
}

fn roundtrip_numbers(value: Vec<i64>) {
    let grammar = many(int::<i64>()).separator(literal(","));
    let printed: String = grammar.encode(value.clone()).unwrap();
    let decoded = grammar.decode_exact(Text::from(printed)).unwrap();
    assert_eq!(value, decoded);
}

fn roundtrip_text(input: String) {
    let grammar = many(int::<i64>()).separator(literal(","));
    let (value, rest) = grammar.decode(Text::from(input.clone())).unwrap();
    let mut printed: String = grammar.encode(value).unwrap();
    printed.push_str(rest.as_str());
    assert_eq!(printed, input);
}

fn roundtrip_bytes(input: Vec<u8>) {
    let grammar = many(prefix(|b: u8| b != b'\t').map(utf8())).separator(literal("\t"));

    // A field with invalid UTF-8 ends the repetition and stays in the remainder
    let (value, rest) = grammar.decode(Bytes::from(input.clone())).unwrap();
    let mut printed: Vec<u8> = grammar.encode(value).unwrap();
    printed.extend_from_slice(&rest);
    assert_eq!(printed, input);
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Users(value) => roundtrip_users(value),
        FuzzInput::Numbers(value) => roundtrip_numbers(value),
        FuzzInput::Text(input) => roundtrip_text(input),
        FuzzInput::Bytes(input) => roundtrip_bytes(input),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
