/// Values threaded through every agent run and every tool invocation.
///
/// Built once at startup and only ever borrowed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub user_id: String,
}

impl RunContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
