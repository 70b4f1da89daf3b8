//! Repository - the weapon record operations the service exposes.
//!
//! [`WeaponRepository`] layers record rules over a [`WeaponStore`](crate::store::WeaponStore):
//! not-found detection, retirement, and the rule that a retired weapon never
//! returns to service. Its errors separate bad input from missing records
//! from store failures; see [`ErrorKind`].

mod error;
mod repository;

pub use error::{ErrorKind, RepositoryError};
pub use repository::WeaponRepository;
