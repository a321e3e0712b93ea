//! `kisan ask` -- one advisory call from the command line.

use std::io::Write;

use kisan_types::advisory::{AdvisoryReply, AdvisoryRequest, Provider};

use crate::state::AppState;

pub async fn ask(
    state: &AppState,
    prompt: String,
    provider: Provider,
    model: Option<String>,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut request = AdvisoryRequest::new(prompt).with_provider(provider);
    if let Some(model) = model {
        request = request.with_model(model);
    }

    match state.advisory.advise(request).await {
        Ok(content) => {
            if json {
                writeln!(out, "{}", AdvisoryReply::content(content).to_json())?;
            } else {
                writeln!(out, "{content}")?;
            }
            Ok(())
        }
        Err(err) => {
            if json {
                writeln!(out, "{}", AdvisoryReply::from(err.clone()).to_json())?;
            }
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use super::*;
    use crate::http::test_support::{spawn_upstream, test_state, ALL_KEYS};

    #[tokio::test]
    async fn prints_content_from_upstream() {
        let upstream =
            spawn_upstream(StatusCode::OK, r#"{"choices":[{"message":{"content":"Sow in November."}}]}"#).await;
        let state = test_state(&upstream.base_url, ALL_KEYS);

        let mut out = Vec::new();
        ask(&state, "When to sow wheat?".into(), Provider::OpenRouter, None, false, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Sow in November.\n");
        let sent = upstream.requests();
        assert_eq!(sent[0]["model"], "openai/gpt-4o-mini");
        assert_eq!(sent[0]["messages"][1]["content"], "When to sow wheat?");
    }

    #[tokio::test]
    async fn json_mode_prints_error_envelope_on_missing_key() {
        let upstream = spawn_upstream(StatusCode::OK, "{}").await;
        let state = test_state(&upstream.base_url, &[]);

        let mut out = Vec::new();
        let err = ask(&state, "p".into(), Provider::OpenAi, None, true, &mut out)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("OPENAI_API_KEY"));
        let printed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            printed,
            json!({"error": "Server: Missing API key. Set OPENAI_API_KEY in your environment variables."})
        );
        assert!(upstream.requests().is_empty());
    }
}
