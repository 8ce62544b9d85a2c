//! Model backends implementing [`crate::chat::ChatProvider`].

pub mod openai;
