pub mod animator;
pub mod app_core;
mod async_runtime;
pub mod conversation;
pub mod disclosure;
pub mod domain;
pub mod kernel;
pub mod orchestrator;
pub mod script;
pub mod timeline;
pub mod typing;
pub mod viewmodel;

pub use app_core::*;
pub use conversation::{derive_messages, ConversationFlags};
pub use disclosure::Disclosure;
pub use domain::{DemoState, ScriptFlags, TypingState};
pub use kernel::DemoKernel;
pub use orchestrator::{ScriptOrchestrator, ScriptRun};
pub use script::{RunId, RunSink, ScriptEvent, TypingSlot};
pub use timeline::{Milestone, Schedule, Timeline};
pub use viewmodel::*;
