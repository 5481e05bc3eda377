//! Backend trait seams.
//!
//! The seams are split by concern so implementations and tests can cover one
//! surface at a time; [`BackendApi`] is the composite the client stores.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    AnalysisReport, AudioReply, ConstitutionalBrief, DeepfakeReport, NewsItem, VoiceExchange,
    VoiceTurn, YoutubeVerdict,
};

/// Misinformation verdicts for text, images, video, and YouTube links.
#[async_trait]
pub trait VerificationApi: Send + Sync {
    /// Analyze a textual claim. `language` hints the claim's language.
    async fn analyze_text(&self, text: &str, language: Option<&str>) -> Result<AnalysisReport>;

    /// Analyze an uploaded image (OCR + claim analysis on the service side).
    async fn analyze_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<AnalysisReport>;

    /// Frame-level deepfake detection for an uploaded video.
    async fn detect_deepfake(&self, file_name: &str, bytes: Vec<u8>) -> Result<DeepfakeReport>;

    /// Lightweight verdict for a YouTube URL.
    async fn detect_youtube(&self, url: &str) -> Result<YoutubeVerdict>;
}

/// Constitutional Q&A and voice conversation.
#[async_trait]
pub trait ConversationApi: Send + Sync {
    /// Ask a constitutional question; the reply carries pro/con/neutral sides.
    async fn chat_constitutional(&self, query: &str, language: &str)
    -> Result<ConstitutionalBrief>;

    /// One-shot audio question, answered with text plus reply audio.
    async fn chat_audio(&self, file_name: &str, bytes: Vec<u8>) -> Result<AudioReply>;

    /// Multi-turn voice conversation with history.
    async fn voice_chat(&self, audio_base64: &str, history: &[VoiceTurn])
    -> Result<VoiceExchange>;
}

/// Interface-language translation.
#[async_trait]
pub trait TranslationApi: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;
}

/// Curated civic news feed.
#[async_trait]
pub trait NewsApi: Send + Sync {
    async fn latest_news(&self, language: &str) -> Result<Vec<NewsItem>>;
}

/// Composite backend surface.
///
/// Blanket-implemented for any type covering all four seams, so the client
/// can hold one `Arc<dyn BackendApi>`.
pub trait BackendApi: VerificationApi + ConversationApi + TranslationApi + NewsApi {}

impl<T> BackendApi for T where T: VerificationApi + ConversationApi + TranslationApi + NewsApi {}
