//! Reqwest client for the verification and conversation services.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use client_backend_core::{
    AnalysisReport, AnalyzeRequest, AudioReply, BackendError, ConstitutionalBrief,
    ConstitutionalRequest, ConversationApi, DeepfakeReport, NewsApi, NewsItem, NewsRequest,
    TranslateReply, TranslateRequest, TranslationApi, VerificationApi, VoiceChatRequest,
    VoiceExchange, VoiceTurn, YoutubeRequest, YoutubeVerdict,
};

type Result<T> = std::result::Result<T, BackendError>;

use crate::config::BackendConfig;

/// HTTP implementation of the backend seams.
///
/// One request per call, no retries; failures surface as [`BackendError`]
/// values for the frontend to display inline.
#[derive(Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        Ok(Self { http, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    async fn post_json<Req, Resp>(&self, url: &str, body: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        debug!(url, "backend request");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        Self::decode(response).await
    }

    async fn post_multipart<Resp>(
        &self,
        url: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Resp>
    where
        Resp: DeserializeOwned,
    {
        debug!(url, file_name, size = bytes.len(), "backend upload");
        let form = Form::new().part(
            field.to_string(),
            Part::bytes(bytes).file_name(file_name.to_string()),
        );

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<Resp>(response: reqwest::Response) -> Result<Resp>
    where
        Resp: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Resp>()
            .await
            .map_err(|err| BackendError::Decode(err.to_string()))
    }
}

#[async_trait]
impl VerificationApi for HttpBackend {
    async fn analyze_text(&self, text: &str, language: Option<&str>) -> Result<AnalysisReport> {
        self.post_json(
            &self.url("/analyze"),
            &AnalyzeRequest {
                text: text.to_string(),
                language: language.map(String::from),
            },
        )
        .await
    }

    async fn analyze_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<AnalysisReport> {
        self.post_multipart(&self.url("/analyze-image"), "file", file_name, bytes)
            .await
    }

    async fn detect_deepfake(&self, file_name: &str, bytes: Vec<u8>) -> Result<DeepfakeReport> {
        self.post_multipart(&self.url("/detect-deepfake"), "file", file_name, bytes)
            .await
    }

    async fn detect_youtube(&self, url: &str) -> Result<YoutubeVerdict> {
        // The detector service may live at a different base URL.
        let endpoint = format!("{}/detect-youtube", self.config.detector_url);
        self.post_json(
            &endpoint,
            &YoutubeRequest {
                url: url.to_string(),
            },
        )
        .await
    }
}

#[async_trait]
impl ConversationApi for HttpBackend {
    async fn chat_constitutional(
        &self,
        query: &str,
        language: &str,
    ) -> Result<ConstitutionalBrief> {
        self.post_json(
            &self.url("/chat-constitutional"),
            &ConstitutionalRequest {
                query: query.to_string(),
                language: language.to_string(),
            },
        )
        .await
    }

    async fn chat_audio(&self, file_name: &str, bytes: Vec<u8>) -> Result<AudioReply> {
        self.post_multipart(&self.url("/chat-audio"), "file", file_name, bytes)
            .await
    }

    async fn voice_chat(
        &self,
        audio_base64: &str,
        history: &[VoiceTurn],
    ) -> Result<VoiceExchange> {
        self.post_json(
            &self.url("/voice/chat"),
            &VoiceChatRequest {
                audio_base64: audio_base64.to_string(),
                conversation_history: history.to_vec(),
            },
        )
        .await
    }
}

#[async_trait]
impl TranslationApi for HttpBackend {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let reply: TranslateReply = self
            .post_json(
                &self.url("/translate"),
                &TranslateRequest {
                    text: text.to_string(),
                    target_language: target_language.to_string(),
                },
            )
            .await?;
        Ok(reply.translated_text)
    }
}

#[async_trait]
impl NewsApi for HttpBackend {
    async fn latest_news(&self, language: &str) -> Result<Vec<NewsItem>> {
        self.post_json(
            &self.url("/latest-news"),
            &NewsRequest {
                language: language.to_string(),
            },
        )
        .await
    }
}
