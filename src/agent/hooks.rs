use std::sync::atomic::{AtomicUsize, Ordering};

use crate::tools::RunContext;

/// Lifecycle callbacks invoked by the runner.
///
/// Implementations receive identifiers only, never tool arguments, tool
/// results or model text.
pub trait AgentHooks: Send + Sync {
    fn on_start(&self, _context: &RunContext, _agent: &str) {}

    fn on_end(&self, _context: &RunContext, _agent: &str) {}

    fn on_tool_start(&self, _context: &RunContext, _agent: &str, _tool: &str) {}

    fn on_tool_end(&self, _context: &RunContext, _agent: &str, _tool: &str) {}
}

/// Hooks that log each lifecycle event with a running counter.
pub struct LoggingHooks {
    display_name: String,
    event_counter: AtomicUsize,
}

impl LoggingHooks {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            event_counter: AtomicUsize::new(0),
        }
    }

    pub fn event_count(&self) -> usize {
        self.event_counter.load(Ordering::Relaxed)
    }

    fn next(&self) -> usize {
        self.event_counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl AgentHooks for LoggingHooks {
    fn on_start(&self, _context: &RunContext, agent: &str) {
        let n = self.next();
        log::info!("### ({}) {n}: Agent {agent} started", self.display_name);
    }

    fn on_end(&self, _context: &RunContext, agent: &str) {
        let n = self.next();
        log::info!("### ({}) {n}: Agent {agent} ended", self.display_name);
    }

    fn on_tool_start(&self, context: &RunContext, agent: &str, tool: &str) {
        let n = self.next();
        log::info!(
            "### ({}) {n}: Agent {agent} started tool {tool} for user {}",
            self.display_name,
            context.user_id
        );
    }

    fn on_tool_end(&self, _context: &RunContext, agent: &str, tool: &str) {
        let n = self.next();
        log::info!(
            "### ({}) {n}: Agent {agent} ended tool {tool}",
            self.display_name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_bumps_the_counter() {
        let hooks = LoggingHooks::new("research");
        let context = RunContext::new("u1");

        hooks.on_start(&context, "assistant");
        hooks.on_tool_start(&context, "assistant", "GoogleSearch_Search");
        hooks.on_tool_end(&context, "assistant", "GoogleSearch_Search");
        hooks.on_end(&context, "assistant");

        assert_eq!(hooks.event_count(), 4);
    }
}
