//! Tool descriptors, the confirmation gate and the interceptor that puts
//! the gate in front of selected tools.

mod catalog;
mod context;
mod descriptor;
mod gate;
mod interceptor;
mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{prepare_tools, Authorization, ToolAuthorizer, ToolCatalog};
pub use context::RunContext;
pub use descriptor::{ToolDescriptor, ToolInvoker};
pub use gate::{ConfirmationGate, ConsoleGate, Decision, PendingCall};
pub use interceptor::{apply_confirmation, ConfirmationPolicy, ConfirmedInvoker};
pub use registry::ToolRegistry;
