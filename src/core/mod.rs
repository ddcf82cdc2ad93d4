//! Core conversation orchestration

mod controller;

pub use controller::{ConversationController, Submission, WARNING_PREFIX};
