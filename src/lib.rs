//! keyscout - YouTube API key discovery via the Google API Explorer scripts.
//!
//! The API explorer embeds a working YouTube Data API key in the scripts it
//! loads. This library retrieves one by:
//! - Fetching the explorer's bootstrap loader script
//! - Parsing it and extracting candidate script keys from its keylist call
//! - Racing one keyed cache-script fetch per candidate
//! - Extracting the `API_KEY` declaration from the first script that has one
//!
//! The retrieved key can then be used for *some* YouTube API queries, e.g.:
//!
//! ```text
//! curl 'https://content.googleapis.com/youtube/v3/channels?part=snippet&forUsername=<username>&key=<key>' \
//!     -H 'X-Origin: https://developers.google.com'
//! ```
//!
//! # Example
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() {
//!     let key = keyscout::get_credential().await.unwrap();
//!     println!("{}", key);
//! }
//! ```

pub mod ast;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod finder;
pub mod output;
pub mod resolver;
pub mod types;

pub use config::{Config, Endpoints};
pub use finder::{get_credential, KeyFinder};
pub use output::ConsoleOutput;
pub use types::{
    Credential, DiscoveryResult, HttpConfig, KeyscoutError, Result, ScriptKey,
};
