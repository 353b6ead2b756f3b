//! The content properties record and the content header payload
mod read;
mod write;
