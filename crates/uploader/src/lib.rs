//! Concurrent cloud image upload supervision for nodecfg.
//!
//! This crate runs a set of upload tasks concurrently, collects the image
//! records they publish over a channel, and writes the aggregate manifest.
//! The first failing task cancels its siblings and fails the whole run.

pub mod aggregate;
pub mod cancellation;
pub mod options;
pub mod record;

pub use aggregate::{
    AggregateError, ManifestError, RecordSink, TaskContext, UploadError, UploadTask, run_uploads,
    write_manifest,
};
pub use cancellation::CancellationToken;
pub use options::UploadOptions;
pub use record::ImageRecord;
