//! marksync-backend — local artifact storage for synchronized notes
//!
//! Persists note content pulled from the remote note service (markdown
//! text, images, attachments) into a local directory tree, preserving
//! original creation timestamps. The sync orchestrator drives these
//! operations per note and per asset; this crate owns path derivation,
//! filename sanitization, idempotent writes, and timestamp normalization.

pub mod config;
pub mod http;
pub mod record;
pub mod storage;
pub mod telemetry;

pub use record::SyncRecord;
pub use storage::file_store::FileStore;
pub use storage::timestamp::CreateTime;
