//! Wire and domain types shared by the search client and the desktop app.

pub mod domain;
pub mod error;
pub mod protocol;
