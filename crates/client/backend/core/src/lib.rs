//! Backend abstraction for the verification and conversation services.
//!
//! This crate defines the typed wire contracts and a layered trait seam:
//! - [`VerificationApi`]: text/image/deepfake/youtube analysis
//! - [`ConversationApi`]: constitutional and voice chat
//! - [`TranslationApi`]: interface-language translation
//! - [`NewsApi`]: curated civic news feed
//! - [`BackendApi`]: composite trait the client container stores
//!
//! [`MockBackend`] answers every call deterministically for offline runs and
//! tests; the reqwest implementation lives in `client-backend-http`.

pub mod cache;
pub mod error;
pub mod language;
pub mod mock;
pub mod traits;
pub mod types;

pub use cache::TranslationCache;
pub use error::BackendError;
pub use language::{INDIAN_LANGUAGES, Language};
pub use mock::MockBackend;
pub use traits::{BackendApi, ConversationApi, NewsApi, TranslationApi, VerificationApi};
pub use types::*;
