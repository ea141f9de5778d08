//! The prompt coach core: form state in, LLM-ready prompt out.

pub mod builder;
pub mod format;
pub mod inputs;
pub mod tips;

pub use format::OutputFormat;
pub use inputs::{Field, PromptInputs};
