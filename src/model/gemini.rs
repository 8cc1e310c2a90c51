use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::{ImageModel, ImageResponse, InlineImage, Part, TextModel};

/// Max bytes of an error body echoed back in a failure message.
const ERROR_BODY_LIMIT: usize = 512;

/// Shared connection to the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_base: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim().trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        let model = model.trim();
        let model_path = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        };
        format!("{}/{}:generateContent", self.api_base, model_path)
    }

    async fn generate(&self, model: &str, body: &GenerateRequest<'_>) -> Result<GenerateResponse> {
        let started = Instant::now();
        let resp = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .with_context(|| format!("request to {model} failed"))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            bail!("Gemini API error ({}): {}", status, truncate(&text, ERROR_BODY_LIMIT));
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .with_context(|| format!("unreadable response from {model}"))?;
        tracing::info!(model, elapsed_ms = started.elapsed().as_millis() as u64, "model call finished");
        Ok(parsed)
    }
}

/// The text half: system instruction + user question in, plain text out.
pub struct GeminiTextModel {
    client: GeminiClient,
    model: String,
}

impl GeminiTextModel {
    pub fn new(client: GeminiClient, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl TextModel for GeminiTextModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate_text(&self, system: &str, user: &str) -> Result<String> {
        let body = text_request(system, user);
        let resp = self.client.generate(&self.model, &body).await?;
        response_text(resp)
    }
}

/// The image half: prompt in, ordered parts out.
pub struct GeminiImageModel {
    client: GeminiClient,
    model: String,
}

impl GeminiImageModel {
    pub fn new(client: GeminiClient, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl ImageModel for GeminiImageModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate_image(&self, prompt: &str) -> Result<ImageResponse> {
        let body = image_request(prompt);
        let resp = self.client.generate(&self.model, &body).await?;
        Ok(ImageResponse {
            parts: response_parts(resp)?,
        })
    }
}

fn text_request<'a>(system: &'a str, user: &'a str) -> GenerateRequest<'a> {
    GenerateRequest {
        system_instruction: Some(Content {
            role: None,
            parts: vec![TextPart { text: system }],
        }),
        contents: vec![Content {
            role: Some("user"),
            parts: vec![TextPart { text: user }],
        }],
        generation_config: None,
    }
}

fn image_request(prompt: &str) -> GenerateRequest<'_> {
    GenerateRequest {
        system_instruction: None,
        contents: vec![Content {
            role: Some("user"),
            parts: vec![TextPart { text: prompt }],
        }],
        generation_config: Some(GenerationConfig {
            response_modalities: vec!["IMAGE", "TEXT"],
        }),
    }
}

/// Concatenated text of the first candidate.
fn response_text(resp: GenerateResponse) -> Result<String> {
    let text: String = first_candidate_parts(resp)?
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.trim().is_empty() {
        bail!("Gemini API returned empty response");
    }
    Ok(text)
}

/// Parts of the first candidate up to and including the first inline image,
/// base64-decoded. Anything after that image is never looked at.
fn response_parts(resp: GenerateResponse) -> Result<Vec<Part>> {
    let mut parts = Vec::new();
    for part in first_candidate_parts(resp)? {
        match (part.inline_data, part.text) {
            (Some(inline), _) => {
                let data = BASE64
                    .decode(inline.data.as_bytes())
                    .context("Gemini image base64 decode failed")?;
                parts.push(Part::InlineData(InlineImage {
                    mime_type: inline.mime_type,
                    data,
                }));
                break;
            }
            (None, Some(text)) => parts.push(Part::Text(text)),
            (None, None) => parts.push(Part::Other),
        }
    }
    Ok(parts)
}

fn first_candidate_parts(resp: GenerateResponse) -> Result<Vec<ResponsePart>> {
    let Some(candidate) = resp.candidates.into_iter().next() else {
        match resp.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => bail!("Gemini API blocked the prompt: {reason}"),
            None => bail!("Gemini API returned no candidates"),
        }
    };
    Ok(candidate.content.map(|c| c.parts).unwrap_or_default())
}

fn truncate(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

// --- API types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(rename = "inlineData", alias = "inline_data")]
    inline_data: Option<WireInlineData>,
}

#[derive(Deserialize)]
struct WireInlineData {
    #[serde(rename = "mimeType", alias = "mime_type")]
    mime_type: Option<String>,
    #[serde(default)]
    data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn endpoint_adds_models_prefix() {
        let client = GeminiClient::new("https://example.test/v1beta/", "k");
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(
            client.endpoint("models/gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn text_request_shape() {
        let body = serde_json::to_value(text_request("be an oracle", "why?")).unwrap();
        assert_eq!(
            body,
            json!({
                "systemInstruction": {"parts": [{"text": "be an oracle"}]},
                "contents": [{"role": "user", "parts": [{"text": "why?"}]}]
            })
        );
    }

    #[test]
    fn image_request_asks_for_image_and_text() {
        let body = serde_json::to_value(image_request("draw it")).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "draw it"}]}],
                "generationConfig": {"responseModalities": ["IMAGE", "TEXT"]}
            })
        );
    }

    #[test]
    fn response_text_joins_parts() {
        let resp = parse(json!({
            "candidates": [{"content": {"parts": [{"text": "Takeaway: a"}, {"text": "\nAnswer to question: b"}]}}]
        }));
        assert_eq!(response_text(resp).unwrap(), "Takeaway: a\nAnswer to question: b");
    }

    #[test]
    fn response_text_uses_first_candidate() {
        let resp = parse(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        }));
        assert_eq!(response_text(resp).unwrap(), "first");
    }

    #[test]
    fn response_text_empty_fails() {
        let resp = parse(json!({"candidates": [{"content": {"parts": []}}]}));
        assert!(response_text(resp).unwrap_err().to_string().contains("empty response"));
    }

    #[test]
    fn no_candidates_fails() {
        let resp = parse(json!({}));
        assert!(response_text(resp).unwrap_err().to_string().contains("no candidates"));
    }

    #[test]
    fn blocked_prompt_reports_reason() {
        let resp = parse(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
        let err = response_parts(resp).unwrap_err().to_string();
        assert!(err.contains("SAFETY"));
    }

    #[test]
    fn response_parts_decodes_inline_data() {
        let resp = parse(json!({
            "candidates": [{"content": {"parts": [
                {"text": "Here is your picture"},
                {"functionCall": {"name": "x"}},
                {"inlineData": {"mimeType": "image/png", "data": BASE64.encode(b"png-bytes")}}
            ]}}]
        }));
        let parts = response_parts(resp).unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], Part::Text("Here is your picture".to_string()));
        assert_eq!(parts[1], Part::Other);
        assert_eq!(
            parts[2],
            Part::InlineData(InlineImage {
                mime_type: Some("image/png".to_string()),
                data: b"png-bytes".to_vec(),
            })
        );
    }

    #[test]
    fn parts_after_the_first_image_are_not_decoded() {
        let resp = parse(json!({
            "candidates": [{"content": {"parts": [
                {"inlineData": {"mimeType": "image/png", "data": BASE64.encode(b"good")}},
                {"inlineData": {"mimeType": "image/png", "data": "@@bad@@"}},
                {"text": "trailing caption"}
            ]}}]
        }));
        let parts = response_parts(resp).unwrap();
        assert_eq!(parts.len(), 1);
        let image = ImageResponse { parts }.into_first_image().unwrap();
        assert_eq!(image.data, b"good");
    }

    #[test]
    fn response_parts_accepts_snake_case() {
        let resp = parse(json!({
            "candidates": [{"content": {"parts": [
                {"inline_data": {"mime_type": "image/jpeg", "data": BASE64.encode(b"jpg")}}
            ]}}]
        }));
        let image = ImageResponse {
            parts: response_parts(resp).unwrap(),
        }
        .into_first_image()
        .unwrap();
        assert_eq!(image.mime_type.as_deref(), Some("image/jpeg"));
        assert_eq!(image.data, b"jpg");
    }

    #[test]
    fn response_parts_bad_base64_fails() {
        let resp = parse(json!({
            "candidates": [{"content": {"parts": [{"inlineData": {"data": "@@not base64@@"}}]}}]
        }));
        assert!(response_parts(resp).unwrap_err().to_string().contains("base64"));
    }

    #[test]
    fn candidate_without_content_has_no_parts() {
        let resp = parse(json!({"candidates": [{"finishReason": "SAFETY"}]}));
        assert!(response_parts(resp).unwrap().is_empty());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 2), "he");
        assert_eq!(truncate("héllo", 2), "h");
    }
}
