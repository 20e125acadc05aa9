// ABOUTME: Gemini REST client — generateContent with history and system instruction.
// ABOUTME: Defines the AssistantClient seam so conversation flow is testable offline.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Internal transcript role for turns sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    /// Our "assistant" role; the Gemini wire format calls this "model".
    Model,
}

impl ChatRole {
    /// Translation table to the Gemini wire role strings.
    pub fn wire_role(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// One prior turn of the conversation, sent as history.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// The external language-model collaborator. One call per user send; the
/// caller substitutes fallback text on error, so implementations just report
/// failures as they are.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Generate a reply to `input` given the prior conversation history.
    async fn generate(&self, input: &str, history: &[ChatTurn]) -> anyhow::Result<String>;
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    system_instruction: SystemInstruction,
    generation_config: GenerationConfig,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// Serialize history turns into the wire contents list, appending the new
/// user input as the final entry.
fn build_contents(input: &str, history: &[ChatTurn]) -> Vec<Content> {
    history
        .iter()
        .map(|turn| Content {
            role: turn.role.wire_role().to_string(),
            parts: vec![Part {
                text: turn.text.clone(),
            }],
        })
        .chain(std::iter::once(Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: input.to_string(),
            }],
        }))
        .collect()
}

/// Client for the Gemini generateContent REST endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    instruction: String,
    temperature: f32,
}

impl GeminiClient {
    /// Create a client. The API key comes from GEMINI_API_KEY.
    pub fn from_env(
        base_url: &str,
        model: &str,
        instruction: String,
        temperature: f32,
    ) -> anyhow::Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY is not set"))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
            instruction,
            temperature,
        })
    }
}

#[async_trait]
impl AssistantClient for GeminiClient {
    async fn generate(&self, input: &str, history: &[ChatTurn]) -> anyhow::Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = GenerateRequest {
            contents: build_contents(input, history),
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: self.instruction.clone(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            anyhow::bail!("Gemini API error: HTTP {}", resp.status());
        }

        let parsed: GenerateResponse = resp.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_role_maps_to_model_on_the_wire() {
        assert_eq!(ChatRole::Model.wire_role(), "model");
        assert_eq!(ChatRole::User.wire_role(), "user");
    }

    #[test]
    fn contents_end_with_the_new_user_input() {
        let history = vec![ChatTurn::model("welcome"), ChatTurn::user("hi")];
        let contents = build_contents("how to start?", &history);
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0].role, "model");
        assert_eq!(contents[1].role, "user");
        assert_eq!(contents[2].role, "user");
        assert_eq!(contents[2].parts[0].text, "how to start?");
    }

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let req = GenerateRequest {
            contents: build_contents("hello", &[]),
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: "policy".to_string(),
                }],
            },
            generation_config: GenerationConfig { temperature: 0.5 },
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("systemInstruction").is_some());
        assert_eq!(json["generationConfig"]["temperature"], 0.5);
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn response_text_is_extracted_from_first_candidate_parts() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hindi: नमस्ते"}, {"text": "\nEnglish: Namaste"}]}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");
        assert_eq!(text, "Hindi: नमस्ते\nEnglish: Namaste");
    }

    #[test]
    fn empty_candidates_parse_to_empty_text() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
