//src/pack/src/id.rs
use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of a document id in the host's database
pub const ID_LENGTH: usize = 16;

/// Random `[A-Za-z0-9]{16}` id from the thread-local generator.
///
/// Uniqueness is probabilistic only, nothing checks for collisions.
pub fn generate_id() -> String {
    generate_id_with(&mut rand::rng())
}

/// Same as [`generate_id`] but drawing from the given generator
pub fn generate_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LENGTH)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}
