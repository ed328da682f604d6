use serde::{Deserialize, Serialize};

use crate::common::verdict::VerdictSource;
use crate::config::Config;
use crate::logger::Logger;

pub_struct!(;AppState {
    conf: Config,
    logger: Logger,
    verdict: Box<dyn VerdictSource>,
});

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub url: String,
    pub platform: String,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub url: String,
    pub platform: String,
    #[serde(rename = "isCopyrighted")]
    pub is_copyrighted: bool,
    pub details: String,
}
