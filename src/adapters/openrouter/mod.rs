//! Moment-extraction adapter for the OpenRouter chat-completions API
//!
//! The embedded prompt template and the moment record parser form one
//! versioned contract: the section headings and key names below must
//! match what `domain::parser` recognizes. Change them in lockstep.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::errors::DomainError;
use crate::ports::AnalyzePort;

/// Prompt sent with the transcript. `{full_transcript}` is replaced at
/// request time.
const PROMPT_TEMPLATE: &str = r#"I am providing you with the transcript of a video. Your task is to analyze the full transcript and extract structured insights. This output will be used in a further processing phase, so strictly follow the format provided below and ensure consistency and machine-readability.

1. Identify the most interesting moments in the video. These can be engaging conversations, funny remarks, insightful commentary, or high-energy moments. For each moment, provide:
- Title: A short, descriptive title.
- Start_Time: The beginning timestamp hh:mm:ss.
- End_Time: The ending timestamp hh:mm:ss.
- Why_Interesting: 1-2 concise sentences explaining the appeal.

2. Suggest good cut points: natural transitions or breaks (e.g., topic shifts, pauses). For each cut point, provide:
- Cut_Timestamp: The timestamp hh:mm:ss.
- Reason: A short justification for the cut.

REQUIRED OUTPUT FORMAT (strictly follow this structure):

Interesting_Moments:
```
1.
Title: [Title]
Start_Time: hh:mm:ss
End_Time: hh:mm:ss
Why_Interesting: [Explanation]
```

Suggested_Cut_Points:
```
1.
Cut_Timestamp: hh:mm:ss
Reason: [Explanation]
```

Please output only in the exact format above. Here is the transcript:

{full_transcript}
"#;

const MAX_TOKENS: u32 = 2048;
const TEMPERATURE: f32 = 0.4;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Client for the OpenRouter chat-completions endpoint.
///
/// The API key is optional at construction so a run that hits a cached
/// highlights file never needs one; a missing key only fails the
/// analyze call itself.
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: Option<String>,
    api_url: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(api_key: Option<String>, api_url: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
            api_url,
            model,
        }
    }
}

#[async_trait]
impl AnalyzePort for OpenRouterClient {
    async fn analyze(&self, transcript_text: &str) -> Result<String, DomainError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            DomainError::ApiFailure("OPENROUTER_API_KEY is not set".to_string())
        })?;

        info!(model = %self.model, "requesting highlights from moment-extraction API");

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: PROMPT_TEMPLATE.replace("{full_transcript}", transcript_text),
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::ApiFailure(e.to_string()))?
            .error_for_status()
            .map_err(|e| DomainError::ApiFailure(e.to_string()))?;

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::ApiFailure(format!("unexpected response shape: {}", e)))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| DomainError::ApiFailure("response contained no choices".to_string()))?;

        info!("moment-extraction response received");
        Ok(content.trim().to_string())
    }
}
