//! Async memo table for interface translations.

use std::collections::HashMap;

use tokio::sync::Mutex;
use tracing::debug;

use crate::traits::TranslationApi;

/// Caches translations keyed by `(source_text, target_language)`.
///
/// English (and empty text) is a passthrough with no backend call and no
/// cache entry. A failed translation falls back to the source text and caches
/// nothing, so the next attempt retries. Entries only leave the table through
/// explicit invalidation.
#[derive(Default)]
pub struct TranslationCache {
    entries: Mutex<HashMap<(String, String), String>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate `text` into `target_language`, consulting the cache first.
    pub async fn translate(
        &self,
        backend: &dyn TranslationApi,
        text: &str,
        target_language: &str,
    ) -> String {
        if text.is_empty() || target_language == "en" {
            return text.to_string();
        }

        let key = (text.to_string(), target_language.to_string());
        {
            let entries = self.entries.lock().await;
            if let Some(hit) = entries.get(&key) {
                return hit.clone();
            }
        }

        match backend.translate(text, target_language).await {
            Ok(translated) => {
                self.entries
                    .lock()
                    .await
                    .insert(key, translated.clone());
                translated
            }
            Err(err) => {
                debug!(%err, target_language, "translation failed, falling back to source text");
                text.to_string()
            }
        }
    }

    /// Drop every cached entry for one target language.
    pub async fn invalidate_language(&self, target_language: &str) {
        self.entries
            .lock()
            .await
            .retain(|(_, lang), _| lang != target_language);
    }

    /// Drop all cached entries.
    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}
