//! Spell-check service client.
//!
//! The client only speaks to the service through a [`Transport`], so any HTTP
//! stack (or a closure in tests) can carry the requests. Word extraction
//! decides what gets sent; the offsets it reports are used to place every
//! misspelling back into the caller's text.

pub mod client;
pub mod grammar;
pub mod misspelling;
pub mod request;
pub mod transport;

pub use client::{LangList, Languages, SpellCheckClient};
pub use grammar::GrammarProblem;
pub use misspelling::{LocatedMisspelling, Misspelling, locate_misspellings};
pub use request::{Command, RequestParams};
pub use transport::Transport;
