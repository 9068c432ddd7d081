//! Core domain entities.
//!
//! - [`ShortLink`] - A shortened URL mapping with its click counter
//! - [`LinkStats`] - Read-only snapshot of a short link
//! - [`User`] - A registered user (public view)
//! - [`UserCredentials`] - A user with its password hash, used by login
//!
//! Creation and update inputs live next to their entity (`NewUser`, `UserUpdate`).

pub mod short_link;
pub mod user;

pub use short_link::{LinkStats, ShortLink};
pub use user::{NewUser, User, UserCredentials, UserUpdate};
