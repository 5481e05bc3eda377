//! Mock backend for offline runs and testing.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{ConversationApi, NewsApi, TranslationApi, VerificationApi};
use crate::types::{
    AnalysisReport, AudioReply, ConstitutionalBrief, ContextLink, DeepfakeReport, Explanation,
    NewsItem, VoiceExchange, VoiceTurn, YoutubeVerdict,
};

/// Backend double that answers every call deterministically in-memory.
///
/// Verdicts are derived from the input (text length, byte count), so tests
/// can assert on stable output without a network.
#[derive(Clone, Default)]
pub struct MockBackend {
    translate_calls: Arc<AtomicUsize>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of translate calls served, for cache tests.
    pub fn translate_calls(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VerificationApi for MockBackend {
    async fn analyze_text(&self, text: &str, _language: Option<&str>) -> Result<AnalysisReport> {
        // Crude offline heuristic: short shouty claims read as fake.
        let is_fake = text.len() < 80;
        Ok(AnalysisReport {
            is_fake,
            confidence: if is_fake { 0.87 } else { 0.64 },
            explanation: Explanation {
                highlighted_words: text.split_whitespace().take(2).map(String::from).collect(),
                reason: "offline mock verdict".to_string(),
            },
            context_links: vec![ContextLink {
                title: "Press Information Bureau fact check".to_string(),
                excerpt: "No official record supports this claim.".to_string(),
                url: "https://factcheck.example.in/mock".to_string(),
            }],
            original_text: text.to_string(),
        })
    }

    async fn analyze_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<AnalysisReport> {
        self.analyze_text(&format!("{file_name} ({} bytes)", bytes.len()), None)
            .await
    }

    async fn detect_deepfake(&self, _file_name: &str, bytes: Vec<u8>) -> Result<DeepfakeReport> {
        Ok(DeepfakeReport {
            is_fake: bytes.len() % 2 == 0,
            confidence: 0.55,
            processed_frames: (bytes.len() / 1024).max(1) as u32,
            heatmap: String::new(),
        })
    }

    async fn detect_youtube(&self, url: &str) -> Result<YoutubeVerdict> {
        Ok(YoutubeVerdict {
            is_fake: url.contains("shorts"),
            confidence: 0.5,
        })
    }
}

#[async_trait]
impl ConversationApi for MockBackend {
    async fn chat_constitutional(
        &self,
        query: &str,
        _language: &str,
    ) -> Result<ConstitutionalBrief> {
        Ok(ConstitutionalBrief {
            pro_argument: format!("Arguments in favour regarding: {query}"),
            con_argument: format!("Arguments against regarding: {query}"),
            neutral_summation: "Both positions cite the constitutional text.".to_string(),
            citations: vec!["Article 83".to_string(), "Article 172".to_string()],
        })
    }

    async fn chat_audio(&self, _file_name: &str, _bytes: Vec<u8>) -> Result<AudioReply> {
        Ok(AudioReply {
            text: "Mock audio answer.".to_string(),
            audio: String::new(),
        })
    }

    async fn voice_chat(
        &self,
        _audio_base64: &str,
        history: &[VoiceTurn],
    ) -> Result<VoiceExchange> {
        Ok(VoiceExchange {
            text_query: format!("(turn {})", history.len() + 1),
            text_response: "Mock voice response.".to_string(),
            audio_base64: String::new(),
            detected_language: "en".to_string(),
        })
    }
}

#[async_trait]
impl TranslationApi for MockBackend {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("[{target_language}] {text}"))
    }
}

#[async_trait]
impl NewsApi for MockBackend {
    async fn latest_news(&self, _language: &str) -> Result<Vec<NewsItem>> {
        Ok(vec![
            NewsItem {
                headline: "Election Commission publishes revised electoral rolls".to_string(),
                summary: "Draft rolls open for claims and objections.".to_string(),
                source: "Civic Desk".to_string(),
                date: "2025-01-15".to_string(),
                category: "governance".to_string(),
            },
            NewsItem {
                headline: "Parliamentary committee reviews simultaneous-polls report".to_string(),
                summary: "Testimony continues on feasibility and cost.".to_string(),
                source: "Civic Desk".to_string(),
                date: "2025-01-14".to_string(),
                category: "policy".to_string(),
            },
        ])
    }
}
