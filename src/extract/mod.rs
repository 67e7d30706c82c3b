//! Literal extraction from the two upstream script stages.
//!
//! Stage one pulls candidate script keys out of the bootstrap loader; stage
//! two pulls the credential out of one keyed cache script. The two stages
//! deliberately handle parse failures differently: a broken bootstrap aborts
//! the whole discovery, while a broken cache script only sinks its own
//! candidate.

pub mod credential;
pub mod script_keys;

pub use credential::CredentialExtractor;
pub use script_keys::ScriptKeyExtractor;
