use thiserror::Error;

use crate::common::verdict::{VerdictError, VerdictSource};
use crate::models::{CheckRequest, CheckResult};

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{0}")]
    InvalidArgument(&'static str),
    #[error("verdict source unavailable: {0}")]
    VerdictSource(#[from] VerdictError),
}

/// Validates the submission, asks the verdict source, and pairs the
/// echoed input with the verdict. Stateless, one call per request.
pub async fn check_content(
    source: &dyn VerdictSource,
    request: CheckRequest,
) -> Result<CheckResult, CheckError> {
    if request.url.is_empty() {
        return Err(CheckError::InvalidArgument("url must not be empty"));
    }
    if request.platform.is_empty() {
        return Err(CheckError::InvalidArgument("platform must not be empty"));
    }

    let verdict = source.evaluate(&request.url, &request.platform).await?;

    Ok(CheckResult {
        url: request.url,
        platform: request.platform,
        is_copyrighted: verdict.is_copyrighted,
        details: verdict.details,
    })
}
