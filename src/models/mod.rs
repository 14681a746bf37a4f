pub mod job;
pub mod target;

pub use job::{image_file_name, DownloadJob, IMAGE_EXTENSION};
pub use target::SearchTarget;
