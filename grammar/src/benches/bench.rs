use commonware_grammar::{
    boolean,
    conversion::{string, total},
    end, int, literal, many, one_of, prefix, zip, Encoder, GrammarExt, Text,
};
use criterion::criterion_main;
use rand::{rngs::StdRng, Rng, SeedableRng};

mod encode;

criterion_main!(decode::benches, encode::benches);

/// A row of the benchmarked table.
#[derive(Clone, Debug, PartialEq)]
struct User {
    id: i64,
    name: String,
    admin: bool,
}

/// One user per line, with quoted names when they contain a comma.
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

/// Generate `count` random users, a quarter of them with quoted names.
fn random_users(count: usize) -> Vec<User> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..count)
        .map(|i| {
            let name = if rng.gen_ratio(1, 4) {
                format!("Blob, {}", rng.gen::<u16>())
            } else {
                format!("Blob {}", rng.gen::<u16>())
            };
            User {
                id: i as i64,
                name,
                admin: rng.gen(),
            }
        })
        .collect()
}
