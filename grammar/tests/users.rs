use commonware_grammar::{
    boolean,
    conversion::{string, total},
    end, int, literal, many, one_of, prefix, zip, Decoder, Encoder, Error, GrammarExt, Text,
};

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: i64,
    name: String,
    admin: bool,
}

impl User {
    fn new(id: i64, name: &str, admin: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            admin,
        }
    }
}

/// A name is either quoted (and may contain commas) or bare.
fn field() -> impl Encoder<Text, Output = String> {
    let quoted = zip()
        .skip(literal("\""))
        .then(prefix(|c: char| c != '"'))
        .skip(literal("\""));
    let bare = prefix(|c: char| c != ',' && c != '"' && c != '\n');
    one_of((quoted, bare)).map(string())
}

/// One user per line: `id, name, admin` with optional spaces after the commas.
fn user() -> impl Encoder<Text, Output = User> {
    let space = one_of((literal(" "), literal("")));
    zip()
        .then(int::<i64>())
        .skip(literal(","))
        .skip(space)
        .then(field())
        .skip(literal(","))
        .skip(space)
        .then(boolean())
        .map(total(
            |(id, name, admin): (i64, String, bool)| User { id, name, admin },
            |user: User| (user.id, user.name, user.admin),
        ))
}

fn users() -> impl Encoder<Text, Output = Vec<User>> {
    many(user()).separator(literal("\n")).terminator(end())
}

const USERS_CSV: &str = "1, Blob, true
2, Blob Jr, false
3, Blob Sr, true
4, \"Blob, Esq.\", false";

#[test]
fn test_record() {
    let printed: String = user().encode(User::new(1, "Blob", true)).unwrap();
    assert_eq!(printed, "1,Blob,true");

    let value = user().decode_exact(Text::from(printed)).unwrap();
    assert_eq!(value, User::new(1, "Blob", true));
}

#[test]
fn test_record_optional_space() {
    let value = user().decode_exact(Text::from("7, Blob,false")).unwrap();
    assert_eq!(value, User::new(7, "Blob", false));
}

#[test]
fn test_quoted_field() {
    let printed: String = field().encode("Blob, Esq.".to_string()).unwrap();
    assert_eq!(printed, "\"Blob, Esq.\"");

    let printed: String = field().encode("Blob".to_string()).unwrap();
    assert_eq!(printed, "Blob");
}

#[test]
fn test_unprintable_field() {
    // Neither alternative can print a value with both a comma and a quote
    let mut buf = String::from("1,");
    let err = field()
        .write("\"Blob\", Esq.".to_string(), &mut buf)
        .unwrap_err();
    assert!(matches!(err, Error::Exhausted(errors) if errors.len() == 2));
    assert_eq!(buf, "1,");
}

#[test]
fn test_users_csv() {
    let value = users().decode_exact(Text::from(USERS_CSV)).unwrap();
    assert_eq!(
        value,
        vec![
            User::new(1, "Blob", true),
            User::new(2, "Blob Jr", false),
            User::new(3, "Blob Sr", true),
            User::new(4, "Blob, Esq.", false),
        ]
    );

    // Printing drops the optional spaces
    let printed: String = users().encode(value.clone()).unwrap();
    assert_eq!(
        printed,
        "1,Blob,true\n2,Blob Jr,false\n3,Blob Sr,true\n4,\"Blob, Esq.\",false"
    );
    assert_eq!(users().decode_exact(Text::from(printed)), Ok(value));
}

#[test]
fn test_users_empty() {
    let printed: String = users().encode(Vec::new()).unwrap();
    assert!(printed.is_empty());
    assert_eq!(users().decode_exact(Text::new()), Ok(Vec::new()));
}

#[test]
fn test_users_error_position() {
    let input = "1,Blob,true\n2,Blob Jr,maybe";
    let err = users().decode(Text::from(input)).unwrap_err();

    // The second line fails, so the repetition stops after the first and the terminator fails
    assert_eq!(err.offset(input.len()), Some(11));
}

#[test]
fn test_shared_grammar_across_threads() {
    let grammar = users();
    let inputs: Vec<String> = (0..8)
        .map(|i| format!("{i},Blob {i},true\n{},\"Blob, {i}\",false", i + 1))
        .collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let grammar = &grammar;
                s.spawn(move || grammar.decode_exact(Text::from(input.clone())))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let value = handle.join().unwrap().unwrap();
            let i = i as i64;
            assert_eq!(
                value,
                vec![
                    User::new(i, &format!("Blob {i}"), true),
                    User::new(i + 1, &format!("Blob, {i}"), false),
                ]
            );
        }
    });
}
