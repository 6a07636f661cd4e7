pub mod severity;
pub mod timeline;
