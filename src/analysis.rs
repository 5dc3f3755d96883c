use reqwest::Client;
use serde::Deserialize;

/// One ranked label from the emotion endpoint.
#[derive(Debug, Clone, Deserialize)]
struct EmotionScore {
    label: String,
    score: f32,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    emotion: Vec<EmotionScore>,
}

#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: String,
}

#[derive(Debug, Deserialize)]
struct SuggestResponse {
    suggestion: String,
}

/// Client for the text-analysis service: per-text emotion ranking, batch
/// summarization, and the remote suggested-task variant.
#[derive(Clone)]
pub struct AnalysisClient {
    base_url: String,
    http: Client,
}

impl AnalysisClient {
    pub fn new(base_url: &str) -> Result<Self, String> {
        let http = Client::builder()
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Analyze one text, returning the top-ranked emotion label.
    ///
    /// An empty ranking comes back as "neutral". Transport, HTTP, and
    /// parse failures are errors; the caller decides whether to default
    /// or to drop the text from its aggregate.
    pub async fn analyze_emotion(&self, text: &str) -> Result<String, String> {
        let url = format!("{}/analyze", self.base_url);
        let body = serde_json::json!({ "text": text });

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Analyze request failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(format!("Analyze returned {}", resp.status()));
        }

        let parsed: AnalyzeResponse = resp
            .json()
            .await
            .map_err(|e| format!("Failed to parse analyze response: {}", e))?;

        match parsed.emotion.first() {
            Some(top) => {
                log::debug!("Top emotion {} ({:.3})", top.label, top.score);
                Ok(top.label.clone())
            }
            None => Ok("neutral".to_string()),
        }
    }

    /// Summarize every thought text and incomplete task name in one request.
    pub async fn summarize(
        &self,
        thoughts: &[String],
        task_names: &[String],
    ) -> Result<String, String> {
        let url = format!("{}/summarize", self.base_url);
        let body = serde_json::json!({
            "thoughts": thoughts,
            "tasks": task_names,
        });

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Summarize request failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(format!("Summarize returned {}", resp.status()));
        }

        let parsed: SummarizeResponse = resp
            .json()
            .await
            .map_err(|e| format!("Failed to parse summarize response: {}", e))?;
        Ok(parsed.summary)
    }

    /// Ask the service for a single suggested task derived from the same
    /// inputs the summarizer sees.
    pub async fn suggest_task(
        &self,
        thoughts: &[String],
        task_names: &[String],
    ) -> Result<String, String> {
        let url = format!("{}/suggest", self.base_url);
        let body = serde_json::json!({
            "thoughts": thoughts,
            "tasks": task_names,
        });

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Suggest request failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(format!("Suggest returned {}", resp.status()));
        }

        let parsed: SuggestResponse = resp
            .json()
            .await
            .map_err(|e| format!("Failed to parse suggest response: {}", e))?;
        Ok(parsed.suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_response_ranking_decodes() {
        let parsed: AnalyzeResponse = serde_json::from_str(
            r#"{"emotion": [{"label": "joy", "score": 0.93}, {"label": "surprise", "score": 0.04}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.emotion[0].label, "joy");
        assert_eq!(parsed.emotion.len(), 2);
    }

    #[test]
    fn empty_ranking_decodes() {
        let parsed: AnalyzeResponse = serde_json::from_str(r#"{"emotion": []}"#).unwrap();
        assert!(parsed.emotion.is_empty());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error() {
        let client = AnalysisClient::new("http://127.0.0.1:1").unwrap();
        let err = client.analyze_emotion("hello").await.unwrap_err();
        assert!(err.starts_with("Analyze request failed"));
    }
}
