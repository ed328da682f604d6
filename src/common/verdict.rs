use async_trait::async_trait;
use axum::http::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::{Config, EvaluatorMode};

pub_struct!(Debug, Clone; Verdict {
    is_copyrighted: bool,
    details: String,
});

#[derive(Debug, Error)]
#[error("{0}")]
pub struct VerdictError(pub String);

/// The external collaborator deciding whether content is copyrighted.
/// Handlers only know this trait; the concrete source is picked at
/// startup from the `[evaluator]` config section.
#[async_trait]
pub trait VerdictSource: Send + Sync {
    async fn evaluate(&self, url: &str, platform: &str) -> Result<Verdict, VerdictError>;
}

/// Demo stub: a coin flip. Not a detection algorithm, replace with a
/// real evaluator before trusting any verdict.
pub struct RandomVerdict;

#[async_trait]
impl VerdictSource for RandomVerdict {
    async fn evaluate(&self, _url: &str, _platform: &str) -> Result<Verdict, VerdictError> {
        let is_copyrighted = rand::random::<bool>();
        let details = if is_copyrighted {
            "Copyrighted content detected"
        } else {
            "No copyright issues found"
        };
        Ok(Verdict {
            is_copyrighted,
            details: details.to_string(),
        })
    }
}

#[derive(Deserialize)]
struct EvaluateResponse {
    #[serde(rename = "isCopyrighted")]
    is_copyrighted: bool,
    details: String,
}

/// Delegates to a remote evaluator service over HTTP.
pub struct RemoteVerdict {
    server: String,
    client: reqwest::Client,
}

impl RemoteVerdict {
    pub fn new(server: String) -> Self {
        RemoteVerdict {
            server,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl VerdictSource for RemoteVerdict {
    async fn evaluate(&self, url: &str, platform: &str) -> Result<Verdict, VerdictError> {
        let body = json!({
            "url": url,
            "platform": platform,
        });

        let response = self
            .client
            .post(format!("{}evaluate", self.server))
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await;

        match response {
            Ok(resp) => {
                if resp.status().is_success() {
                    match resp.json::<EvaluateResponse>().await {
                        Ok(evaluated) => Ok(Verdict {
                            is_copyrighted: evaluated.is_copyrighted,
                            details: evaluated.details,
                        }),
                        Err(e) => Err(VerdictError(format!("{}", e))),
                    }
                } else {
                    Err(VerdictError(format!(
                        "evaluator returned {}",
                        resp.status()
                    )))
                }
            }
            Err(e) => Err(VerdictError(format!("{}", e))),
        }
    }
}

pub fn from_config(conf: &Config) -> Box<dyn VerdictSource> {
    match conf.evaluator.mode {
        EvaluatorMode::Random => Box::new(RandomVerdict),
        EvaluatorMode::Remote => match &conf.evaluator.server {
            Some(server) => Box::new(RemoteVerdict::new(server.clone())),
            None => {
                panic!("error: evaluator.server is required when evaluator.mode is \"remote\"")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn random_verdict_details_match_flag() {
        let source = RandomVerdict;
        let verdict = source
            .evaluate("https://example.com/v/1", "youtube")
            .await
            .unwrap();
        assert!(!verdict.details.is_empty());
        if verdict.is_copyrighted {
            assert_eq!(verdict.details, "Copyrighted content detected");
        } else {
            assert_eq!(verdict.details, "No copyright issues found");
        }
    }
}
