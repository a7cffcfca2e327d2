use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ProviderSettings;

/// Fixed delay standing in for real work.
const SIMULATED_WORK: Duration = Duration::from_millis(100);

const STATUS_COMPLETED: &str = "completed";
const SUCCESS_MESSAGE: &str = "Processing completed successfully";
const UNKNOWN_ERROR: &str = "Unknown error";

/// Failure raised by the core processing step
#[derive(Debug, Clone, Error)]
pub enum ProcessError {
    #[error("{0}")]
    Failed(String),
}

/// Record produced by a completed processing step
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutput {
    /// Number of operations completed by this provider instance so far
    pub processed: u64,
    pub status: String,
    /// Completion time as an RFC 3339 string
    pub timestamp: String,
}

/// Envelope returned by [`RpcProvider::execute`]
///
/// `data` is present exactly when `success` is true; on failure `message`
/// carries the error description instead.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ProcessOutput>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ProcessResult {
    #[must_use]
    pub fn completed(data: ProcessOutput) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: SUCCESS_MESSAGE.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn failed(error: &ProcessError) -> Self {
        let description = error.to_string();
        let message = if description.is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            description
        };

        Self {
            success: false,
            data: None,
            message,
            timestamp: Utc::now(),
        }
    }
}

/// Provider wrapping a single simulated processing operation
#[derive(Debug)]
pub struct RpcProvider {
    settings: ProviderSettings,
    processed: u64,
}

impl RpcProvider {
    #[must_use]
    pub const fn new(settings: ProviderSettings) -> Self {
        Self {
            settings,
            processed: 0,
        }
    }

    /// Run the processing operation and wrap the outcome in a result
    /// envelope. All failures from the inner step are converted into a
    /// failed envelope; this method itself never fails.
    pub async fn execute(&mut self) -> ProcessResult {
        let started = Instant::now();

        if self.settings.verbose {
            info!("Initializing RPCProvider processor...");
        }

        match self.process().await {
            Ok(output) => {
                let duration = started.elapsed();
                if self.settings.verbose {
                    info!("Processing completed in {}ms", duration.as_millis());
                }
                ProcessResult::completed(output)
            }
            Err(e) => {
                debug!("processing failed: {e}");
                ProcessResult::failed(&e)
            }
        }
    }

    /// Core processing step: awaits the simulated work delay and increments
    /// the instance counter. The delay itself cannot fail, so the error
    /// branch exists only for the envelope conversion in `execute`.
    async fn process(&mut self) -> Result<ProcessOutput, ProcessError> {
        tokio::time::sleep(SIMULATED_WORK).await;

        self.processed += 1;

        Ok(ProcessOutput {
            processed: self.processed,
            status: STATUS_COMPLETED.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
