//! Local artifact storage — note markdown, images, and attachments.

pub mod file_store;
pub mod sanitize;
pub mod timestamp;

pub use file_store::FileStore;
pub use timestamp::CreateTime;
