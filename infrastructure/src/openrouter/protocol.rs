//! Wire types for the chat-completion endpoint

use serde::{Deserialize, Serialize};
use sitewright_application::{CompletionRequest, GatewayError};
use sitewright_domain::Message;

/// Longest slice of an upstream body kept in errors
const MAX_ERROR_BODY: usize = 2000;

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

impl<'a> From<&'a CompletionRequest> for ChatCompletionRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: request.model.as_str(),
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format: request
                .require_json_object
                .then_some(ResponseFormat { kind: "json_object" }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<UpstreamError>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Error object some providers return inside a 200 response
#[derive(Debug, Deserialize)]
struct UpstreamError {
    code: Option<serde_json::Value>,
    message: Option<String>,
}

/// Turn a successful HTTP body into the reply value.
///
/// With `json_object` the first choice's content must parse as a JSON
/// object; otherwise the content is returned as a JSON string.
pub(crate) fn extract_reply(body: &str, json_object: bool) -> Result<serde_json::Value, GatewayError> {
    let response: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        GatewayError::MalformedResponse(format!("{}: {}", e, clip(body)))
    })?;

    if let Some(err) = response.error {
        let status = err
            .code
            .as_ref()
            .and_then(serde_json::Value::as_u64)
            .and_then(|c| u16::try_from(c).ok())
            .unwrap_or(502);
        return Err(GatewayError::Http {
            status,
            body: err.message.unwrap_or_else(|| "upstream error".to_string()),
        });
    }

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or(GatewayError::EmptyResponse)?;

    if json_object {
        parse_json_object(&content)
    } else {
        Ok(serde_json::Value::String(content))
    }
}

/// Parse model output that should be a single JSON object.
///
/// Tolerates a surrounding markdown code fence or stray prose around the
/// outermost braces, which models emit despite instructions.
pub(crate) fn parse_json_object(content: &str) -> Result<serde_json::Value, GatewayError> {
    let trimmed = strip_code_fence(content.trim());

    let value = serde_json::from_str::<serde_json::Value>(trimmed).or_else(|first_err| {
        match (trimmed.find('{'), trimmed.rfind('}')) {
            (Some(start), Some(end)) if start < end => {
                serde_json::from_str(&trimmed[start..=end]).map_err(|_| first_err)
            }
            _ => Err(first_err),
        }
    });

    match value {
        Ok(v @ serde_json::Value::Object(_)) => Ok(v),
        Ok(_) => Err(GatewayError::MalformedResponse(
            "expected a JSON object".to_string(),
        )),
        Err(e) => Err(GatewayError::MalformedResponse(format!(
            "{}: {}",
            e,
            clip(content)
        ))),
    }
}

fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    // Drop the info string ("json") on the opening fence line.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// Cut `text` to at most [`MAX_ERROR_BODY`] bytes on a char boundary,
/// marking the cut with `...`.
fn clip(text: &str) -> String {
    if text.len() <= MAX_ERROR_BODY {
        return text.to_string();
    }
    let budget = MAX_ERROR_BODY - 3;
    let end = text
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= budget)
        .last()
        .unwrap_or(0);
    format!("{}...", &text[..end])
}

/// Shorten an error body for [`GatewayError::Http`]
pub(crate) fn error_body(body: &str) -> String {
    clip(body.trim())
}
