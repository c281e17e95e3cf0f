//! One-shot hypothesis suggestion via a prompt-completion call.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

const MODEL_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HypothesisSuggestion {
    pub hypothesis: String,
    pub metric: String,
}

/// Ask the model for a structured hypothesis for a problem statement.
///
/// Without an API key the canned suggestion is returned after a short delay,
/// so the generator flow stays usable in unconfigured installs. Any request
/// or parse failure is logged and yields `None`.
pub async fn suggest_hypothesis(
    http: &Client,
    api_key: Option<&str>,
    problem: &str,
) -> Option<HypothesisSuggestion> {
    let Some(api_key) = api_key else {
        log::warn!("Model API key not found, returning canned hypothesis");
        tokio::time::sleep(Duration::from_secs(1)).await;
        return Some(HypothesisSuggestion {
            hypothesis: "If we optimize the onboarding flow, then retention will increase by 10%."
                .to_string(),
            metric: "Day 7 Retention".to_string(),
        });
    };

    match request_suggestion(http, api_key, problem).await {
        Ok(suggestion) => Some(suggestion),
        Err(e) => {
            log::error!("Error generating hypothesis: {e}");
            None
        }
    }
}

async fn request_suggestion(
    http: &Client,
    api_key: &str,
    problem: &str,
) -> anyhow::Result<HypothesisSuggestion> {
    let prompt = format!(
        "You are a Senior Growth Marketing Strategist.\n\
         I have a problem statement: \"{problem}\".\n\n\
         Please generate a solid experimentation hypothesis in the format: \
         \"If [variable], then [outcome], because [rationale].\"\n\
         Also suggest the primary metric to track.\n\n\
         Return the response in JSON format with keys: \"hypothesis\" and \"metric\"."
    );
    let body = json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": { "responseMimeType": "application/json" }
    });

    let response = http
        .post(MODEL_ENDPOINT)
        .query(&[("key", api_key)])
        .json(&body)
        .send()
        .await?
        .error_for_status()?;
    let payload: Value = response.json().await?;

    let text = payload["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("model response had no text part"))?;
    Ok(serde_json::from_str(text)?)
}
