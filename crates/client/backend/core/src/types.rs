//! Wire types for the backend contracts.
//!
//! Field casing mirrors the service JSON exactly. Most verification replies
//! are camelCase; the deepfake detector mixes camelCase verdict fields with
//! snake_case diagnostics, and that mix is preserved on purpose.

use serde::{Deserialize, Serialize};

// ============================================================================
// Verification
// ============================================================================

/// Request body for `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Why a claim was flagged, with the offending phrases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub highlighted_words: Vec<String>,
    pub reason: String,
}

/// A supporting source the service found for its verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextLink {
    pub title: String,
    pub excerpt: String,
    pub url: String,
}

/// Verdict for text and image analysis (`/analyze`, `/analyze-image`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub is_fake: bool,
    pub confidence: f64,
    pub explanation: Explanation,
    pub context_links: Vec<ContextLink>,
    pub original_text: String,
}

/// Verdict for `POST /detect-deepfake`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepfakeReport {
    #[serde(rename = "isFake")]
    pub is_fake: bool,
    pub confidence: f64,
    pub processed_frames: u32,
    /// Base64 PNG overlay of suspicious regions.
    pub heatmap: String,
}

/// Request body for `POST /detect-youtube`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeRequest {
    pub url: String,
}

/// Verdict for `POST /detect-youtube` (companion-extension contract).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeVerdict {
    pub is_fake: bool,
    pub confidence: f64,
}

// ============================================================================
// Conversation
// ============================================================================

/// Request body for `POST /chat-constitutional`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstitutionalRequest {
    pub query: String,
    pub language: String,
}

/// Balanced answer for a constitutional question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstitutionalBrief {
    pub pro_argument: String,
    pub con_argument: String,
    pub neutral_summation: String,
    pub citations: Vec<String>,
}

/// Reply from `POST /chat-audio`: text plus base64 reply audio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioReply {
    pub text: String,
    pub audio: String,
}

/// One prior message in a voice conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceTurn {
    pub role: String,
    pub content: String,
}

/// Request body for `POST /voice/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceChatRequest {
    pub audio_base64: String,
    pub conversation_history: Vec<VoiceTurn>,
}

/// Reply from `POST /voice/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceExchange {
    pub text_query: String,
    pub text_response: String,
    pub audio_base64: String,
    pub detected_language: String,
}

// ============================================================================
// Translation and news
// ============================================================================

/// Request body for `POST /translate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
}

/// Reply from `POST /translate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateReply {
    pub translated_text: String,
}

/// Request body for `POST /latest-news`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsRequest {
    pub language: String,
}

/// One entry in the curated civic news feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    pub summary: String,
    pub source: String,
    pub date: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_report_uses_camel_case_on_the_wire() {
        let report = AnalysisReport {
            is_fake: true,
            confidence: 0.93,
            explanation: Explanation {
                highlighted_words: vec!["guaranteed cure".to_string()],
                reason: "sensational health claim".to_string(),
            },
            context_links: vec![ContextLink {
                title: "Fact check".to_string(),
                excerpt: "No clinical evidence".to_string(),
                url: "https://example.org/check".to_string(),
            }],
            original_text: "A guaranteed cure was found".to_string(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("isFake").is_some());
        assert!(json.get("contextLinks").is_some());
        assert!(json["explanation"].get("highlightedWords").is_some());
        assert!(json.get("is_fake").is_none());
    }

    #[test]
    fn deepfake_report_preserves_mixed_casing() {
        let json = serde_json::json!({
            "isFake": false,
            "confidence": 0.12,
            "processed_frames": 48,
            "heatmap": "aGVhdG1hcA=="
        });

        let report: DeepfakeReport = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(report.processed_frames, 48);
        assert_eq!(serde_json::to_value(&report).unwrap(), json);
    }

    #[test]
    fn analyze_request_omits_absent_language() {
        let request = AnalyzeRequest {
            text: "claim".to_string(),
            language: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("language").is_none());
    }
}
