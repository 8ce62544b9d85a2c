mod message;
mod tool;
mod traits;
mod usage;

pub use message::{ChatMessage, ChatMessageBuilder, ChatRole, MessageType};
pub use tool::{FunctionTool, Tool, ToolChoice};
pub use traits::{ChatProvider, ChatResponse};
pub use usage::Usage;
