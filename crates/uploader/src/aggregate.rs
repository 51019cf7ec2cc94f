//! Concurrent upload supervision and result aggregation.
//!
//! Responsibilities:
//! - Fan upload tasks out onto the runtime and supervise them to completion.
//! - Collect published image records over a channel, so no task ever holds a
//!   lock around shared state.
//! - Turn the first failure into cancellation of every sibling task.
//!
//! Does NOT handle:
//! - Talking to any cloud; tasks bring their own upload logic.
//!
//! Invariants:
//! - Records are only surfaced when every task succeeded; a failed run
//!   yields an error and no partial manifest.
//! - The failure reported is the first one observed; later failures are
//!   logged, not returned.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use futures::future::BoxFuture;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::cancellation::CancellationToken;
use crate::options::UploadOptions;
use crate::record::ImageRecord;

/// Failure of a single upload task.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("artifact not found: {0}")]
    ArtifactMissing(String),

    #[error("upload to {cloud} failed: {message}")]
    Failed { cloud: String, message: String },

    #[error("cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of an upload run as a whole.
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("task '{task}' failed: {source}")]
    TaskFailed {
        task: String,
        #[source]
        source: UploadError,
    },

    #[error("task '{task}' panicked")]
    TaskPanicked { task: String },
}

/// Failure to write the output manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("manifest serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("manifest write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Sending half of the record channel, cloned into every task.
#[derive(Debug, Clone)]
pub struct RecordSink {
    tx: mpsc::UnboundedSender<ImageRecord>,
}

impl RecordSink {
    /// Publish one record.
    ///
    /// A send after the supervisor stopped collecting is silently dropped;
    /// the run has already failed at that point.
    pub fn push(&self, record: ImageRecord) {
        let _ = self.tx.send(record);
    }
}

/// Everything a task needs from its supervisor.
#[derive(Debug, Clone)]
pub struct TaskContext {
    /// Where to publish records for the manifest.
    pub sink: RecordSink,
    /// Cooperative cancellation signal, raised on the first sibling failure.
    pub cancel: CancellationToken,
    /// Run settings shared by every task: release tag, artifact location,
    /// target architectures and regions.
    pub options: Arc<UploadOptions>,
}

/// One unit of upload work, e.g. "publish AWS images for amd64".
pub trait UploadTask: Send + 'static {
    /// Name of the task, used in logs and error reports.
    fn name(&self) -> String;

    /// Run the task to completion, publishing records through the context.
    ///
    /// Tasks should observe `ctx.cancel` at safe points and return
    /// [`UploadError::Cancelled`] when it fires.
    fn run(self: Box<Self>, ctx: TaskContext) -> BoxFuture<'static, Result<(), UploadError>>;
}

/// Run every task to completion and aggregate their published records.
///
/// All tasks run concurrently and share `options` through their context.
/// The first failure cancels the remaining tasks, which are still awaited
/// so nothing outlives the run. On success the collected records are
/// returned in completion order.
pub async fn run_uploads(
    options: UploadOptions,
    tasks: Vec<Box<dyn UploadTask>>,
) -> Result<Vec<ImageRecord>, AggregateError> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();
    let options = Arc::new(options);

    info!(tasks = tasks.len(), version = %options.version_tag, "starting upload run");

    let mut join_set = JoinSet::new();
    let mut task_names = HashMap::new();
    for task in tasks {
        let ctx = TaskContext {
            sink: RecordSink { tx: tx.clone() },
            cancel: cancel.clone(),
            options: options.clone(),
        };
        let name = task.name();
        let handle = join_set.spawn({
            let name = name.clone();
            async move { (name, task.run(ctx).await) }
        });
        task_names.insert(handle.id(), name);
    }
    // Only task-held senders keep the channel open.
    drop(tx);

    let mut first_failure: Option<AggregateError> = None;
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((name, Ok(()))) => {
                debug!(task = %name, "upload task finished");
            }
            Ok((name, Err(source))) => {
                cancel.cancel();
                if first_failure.is_none() {
                    error!(task = %name, error = %source, "upload task failed");
                    first_failure = Some(AggregateError::TaskFailed { task: name, source });
                } else {
                    debug!(task = %name, error = %source, "upload task failed after first failure");
                }
            }
            Err(join_error) => {
                cancel.cancel();
                let task = task_names
                    .get(&join_error.id())
                    .cloned()
                    .unwrap_or_default();
                error!(task = %task, error = %join_error, "upload task panicked");
                if first_failure.is_none() {
                    first_failure = Some(AggregateError::TaskPanicked { task });
                }
            }
        }
    }

    if let Some(failure) = first_failure {
        return Err(failure);
    }

    let mut records = Vec::new();
    while let Ok(record) = rx.try_recv() {
        records.push(record);
    }

    info!(records = records.len(), "upload run finished");
    Ok(records)
}

/// Write `records` as a pretty-printed JSON manifest.
pub fn write_manifest<W: Write>(records: &[ImageRecord], mut writer: W) -> Result<(), ManifestError> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    Ok(())
}
