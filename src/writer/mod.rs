//! Output stage: C text generation and change-suppressing file writes.
pub mod c;
pub mod file;
