// Customer-support chat: one model call per question, with conversation history.

pub mod agent;
pub mod handlers;
pub mod prompts;
