//! Lifecycle of long-running video jobs.
//!
//! A job moves `Pending -> Resolved | Failed`. [`advance`] is the pure
//! transition; polling and waiting are layered on top through
//! [`OperationPoller`].

use async_trait::async_trait;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::error::{map_operation_error, HeroResult};
use crate::extract::VideoArtifact;
use crate::types::Operation;

/// Interval the app waits between status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// State of a video job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationState {
    /// Still running.
    Pending,
    /// Finished with a video.
    Resolved,
    /// Finished without a video.
    Failed,
}

impl OperationState {
    /// Lowercase name for logs and metric labels.
    pub const fn as_str(self) -> &'static str {
        match self {
            OperationState::Pending => "pending",
            OperationState::Resolved => "resolved",
            OperationState::Failed => "failed",
        }
    }
}

/// Error reported by a failed job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationFailure {
    /// Provider status code, 0 when absent.
    pub code: i32,
    /// Provider message.
    pub message: String,
}

/// Opaque handle to a submitted video job.
///
/// Only [`advance`] produces new states, and a handle that is done never
/// changes again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationHandle {
    id: String,
    done: bool,
    result: Option<VideoArtifact>,
    error: Option<OperationFailure>,
}

impl OperationHandle {
    /// A pending handle for the operation named `id`.
    pub fn pending(id: impl Into<String>) -> Self {
        Self { id: id.into(), done: false, result: None, error: None }
    }

    /// The handle for a freshly submitted operation.
    pub fn submitted(operation: Operation) -> Self {
        let handle = Self::pending(operation.name.clone());
        advance(handle, &operation)
    }

    /// Provider operation name, used as the polling key.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the job reached a terminal state.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The video, once resolved.
    pub fn result(&self) -> Option<&VideoArtifact> {
        self.result.as_ref()
    }

    /// The failure, once failed.
    pub fn error(&self) -> Option<&OperationFailure> {
        self.error.as_ref()
    }

    /// Current state.
    pub fn state(&self) -> OperationState {
        match (self.done, &self.result) {
            (false, _) => OperationState::Pending,
            (true, Some(_)) => OperationState::Resolved,
            (true, None) => OperationState::Failed,
        }
    }

    /// The video when resolved, `None` while pending, or the failure as an error.
    pub fn outcome(&self) -> HeroResult<Option<&VideoArtifact>> {
        match (&self.result, &self.error) {
            (Some(video), _) => Ok(Some(video)),
            (None, Some(failure)) => {
                Err(map_operation_error(&self.id, failure.code, failure.message.clone()))
            }
            (None, None) => Ok(None),
        }
    }
}

/// Applies a status report to a handle.
///
/// Terminal handles are returned unchanged. A report that is not done leaves
/// the handle pending with no result. A done report resolves with the first
/// video URI, or fails with the reported error. A done report carrying
/// neither fails with the content-filter reasons when present.
pub fn advance(handle: OperationHandle, status: &Operation) -> OperationHandle {
    if handle.done || !status.done {
        return handle;
    }

    if let Some(error) = &status.error {
        return OperationHandle {
            done: true,
            result: None,
            error: Some(OperationFailure { code: error.code, message: error.message.clone() }),
            ..handle
        };
    }

    match status.video_uri() {
        Some(uri) => OperationHandle {
            done: true,
            result: Some(VideoArtifact { uri: uri.to_string() }),
            error: None,
            ..handle
        },
        None => OperationHandle {
            done: true,
            result: None,
            error: Some(OperationFailure { code: 0, message: missing_video_message(status) }),
            ..handle
        },
    }
}

fn missing_video_message(status: &Operation) -> String {
    let reasons = status
        .response
        .as_ref()
        .and_then(|r| r.generate_video_response.as_ref())
        .and_then(|r| r.rai_media_filtered_reasons.as_ref())
        .filter(|reasons| !reasons.is_empty());

    match reasons {
        Some(reasons) => reasons.join("; "),
        None => "operation finished without a generated video".to_string(),
    }
}

/// Something that can check the status of a video job.
#[async_trait]
pub trait OperationPoller: Send + Sync {
    /// Issues one status check and applies it. Terminal handles are returned
    /// unchanged without a network call.
    async fn poll(&self, handle: &OperationHandle) -> HeroResult<OperationHandle>;
}

/// Polls every `interval` until the job is terminal or `cancel` fires.
///
/// No attempt limit is imposed. On cancellation the last observed handle is
/// returned. The job itself keeps running on the provider side.
pub async fn wait_for_completion<P>(
    poller: &P,
    handle: OperationHandle,
    interval: Duration,
    cancel: &CancellationToken,
) -> HeroResult<OperationHandle>
where
    P: OperationPoller + ?Sized,
{
    let mut handle = handle;

    while !handle.is_done() {
        tokio::select! {
            () = cancel.cancelled() => {
                tracing::debug!(operation = %handle.id(), "Stopped waiting for video operation");
                return Ok(handle);
            }
            () = tokio::time::sleep(interval) => {}
        }

        handle = poller.poll(&handle).await?;
    }

    Ok(handle)
}
