// Build/deploy helpers for the recipe site: seed-file splitting and the
// frontend dist step. Both tools are single-pass text transforms over whole
// files; neither keeps state between invocations.

pub mod builder;
pub mod logger;
pub mod progress;
pub mod splitter;

// Fallible operations across the crate return boxed errors.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
