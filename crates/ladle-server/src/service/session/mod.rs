//! In-process session management.
//!
//! Sessions map an opaque token to the authenticated chef for the lifetime
//! of the process. There is no expiry: a token stays valid until explicit
//! logout or restart.

mod store;
mod token;

pub use store::SessionStore;
pub use token::SessionToken;
