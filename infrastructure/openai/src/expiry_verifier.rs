use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use business::domain::listing::services::{ExpiryCandidate, ExpiryVerifierService};

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = r#"You are an expiry date auditor for a marketplace where sellers list near-expiry goods at a discount.
Given a numbered list of products with their declared dates, judge for each one whether the declared expiry date is plausible for that kind of product.

Rules:
1. Return ONLY a JSON array of booleans, one per product, in the same order as the input.

2. true means the declared expiry date is believable; false means it is not.

3. A date is implausible when it contradicts the product itself:
   - fresh goods (bread, dairy, produce) declared to last years
   - an expiry date earlier than the manufacture date
   - dates decades away for anything edible

4. Consider the storage notes when given: frozen, canned or dried goods keep far longer than chilled or fresh ones.

5. When in doubt, answer true. Only answer false for clearly implausible dates.

Example for three products:
[true,false,true]"#;

pub struct ExpiryVerifierOpenAI {
    client: OpenAIClient,
}

impl ExpiryVerifierOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_user_prompt(candidates: &[ExpiryCandidate]) -> String {
        let mut parts = vec![format!("Today is {}.", Utc::now().format("%Y-%m-%d"))];
        for (index, candidate) in candidates.iter().enumerate() {
            let mut lines = vec![
                format!("{}. {} ({})", index + 1, candidate.title, candidate.brand),
                format!(
                    "   Expiry date: {}",
                    candidate.expiry_date.format("%Y-%m-%d")
                ),
            ];
            if let Some(manufactured) = candidate.manufacturer_date {
                lines.push(format!("   Manufactured: {}", manufactured.format("%Y-%m-%d")));
            }
            if let Some(best_before) = candidate.best_before {
                lines.push(format!("   Best before: {}", best_before.format("%Y-%m-%d")));
            }
            if let Some(storage) = candidate.storage_info.as_deref() {
                lines.push(format!("   Storage: {}", storage));
            }
            parts.push(lines.join("\n"));
        }
        parts.push("Judge each expiry date.".to_string());
        parts.join("\n")
    }

    /// Pulls the boolean array out of the model's reply. Anything that is
    /// not an array of exactly one verdict per candidate is treated as no
    /// answer at all.
    fn parse_response(content: &str, expected: usize) -> Option<Vec<bool>> {
        let array_match = regex::Regex::new(r"\[[\s\S]*\]")
            .ok()
            .and_then(|re| re.find(content))?;
        let flags: Vec<bool> = serde_json::from_str(array_match.as_str()).ok()?;
        if flags.len() == expected {
            Some(flags)
        } else {
            None
        }
    }
}

#[async_trait]
impl ExpiryVerifierService for ExpiryVerifierOpenAI {
    /// A submission must never be lost to an auditor outage, so every
    /// failure mode along the way degrades to passing the whole batch.
    async fn verify_batch(&self, candidates: &[ExpiryCandidate]) -> Vec<bool> {
        let pass_all = vec![true; candidates.len()];
        if candidates.is_empty() {
            return pass_all;
        }

        let body = json!({
            "model": "gpt-4o",
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": Self::build_user_prompt(candidates)},
            ],
            "temperature": 0.0,
        });

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                match resp.json::<serde_json::Value>().await {
                    Ok(data) => {
                        let text = data["choices"][0]["message"]["content"].as_str();
                        match text.and_then(|t| Self::parse_response(t, candidates.len())) {
                            Some(flags) => flags,
                            None => pass_all,
                        }
                    }
                    Err(_) => pass_all,
                }
            }
            _ => pass_all,
        }
    }
}
