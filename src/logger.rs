use chrono::Utc;
use serde_derive::Serialize;
use std::borrow::Cow;
use std::sync::Arc;

use crate::config::Watchtower;

// Prints locally and, when watchtower is enabled, ships the log line
// to the collector without blocking the caller.
pub struct Logger {
    config: Arc<Watchtower>,
    client: Arc<reqwest::Client>,
}

#[derive(Clone, Copy)]
pub enum LogType {
    Info,
    Warning,
    Severe,
}

#[derive(Serialize)]
struct LogData<'a> {
    token: &'a str,
    log: LogPayload<'a>,
}

#[derive(Serialize)]
struct LogPayload<'a> {
    app_id: &'a str,
    r#type: &'a str,
    message: Cow<'a, str>,
    timestamp: i64,
}

impl Logger {
    pub fn new(config: &Watchtower) -> Self {
        env_logger::try_init().ok();
        Logger {
            config: Arc::new(config.clone()),
            client: Arc::new(reqwest::Client::new()),
        }
    }

    async fn post_log(&self, log_type: LogType, message: String) {
        let config = Arc::clone(&self.config);

        let data = LogData {
            token: &config.token,
            log: LogPayload {
                app_id: &config.app_id,
                r#type: match log_type {
                    LogType::Info => &config.types.info,
                    LogType::Warning => &config.types.warning,
                    LogType::Severe => &config.types.severe,
                },
                message: Cow::Owned(message),
                timestamp: Utc::now().timestamp_millis(),
            },
        };

        let response = self.client.post(&config.endpoint).json(&data).send().await;

        match response {
            Ok(res) if res.status().is_success() => (),
            Ok(res) => eprintln!(
                "Failed to post log: {:?}",
                res.text().await.unwrap_or_default()
            ),
            Err(err) => eprintln!("Failed to post log: {:?}", err),
        }
    }

    fn dispatch(&self, log_type: LogType, message: String) {
        let label = match log_type {
            LogType::Info => "INFO",
            LogType::Warning => "WARNING",
            LogType::Severe => "SEVERE",
        };
        println!("{}: {}", label, &message);
        if self.config.enabled {
            let logger = self.clone();
            tokio::spawn(async move {
                logger.post_log(log_type, message).await;
            });
        }
    }

    pub fn info<S>(&self, message: S)
    where
        S: Into<String>,
    {
        self.dispatch(LogType::Info, message.into());
    }

    pub fn warning<S>(&self, message: S)
    where
        S: Into<String>,
    {
        self.dispatch(LogType::Warning, message.into());
    }

    pub fn severe<S>(&self, message: S)
    where
        S: Into<String>,
    {
        self.dispatch(LogType::Severe, message.into());
    }
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        Logger {
            config: Arc::clone(&self.config),
            client: Arc::clone(&self.client),
        }
    }
}
