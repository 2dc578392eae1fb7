//! TANDEM Messaging - Agent Registry and Messaging Capability
//!
//! The consumed side of the matching engine: a read-only registry of remote
//! agents and the messaging capability used to ask each one for its profile.
//! Transport details stay behind the `AgentMessenger` trait; the engine never
//! sees HTTP.

pub mod jsonrpc;
pub mod messenger;
pub mod mock;
pub mod registry;

pub use jsonrpc::JsonRpcMessenger;
pub use messenger::{AgentMessenger, MessagePart};
pub use mock::MockMessenger;
pub use registry::{AgentRegistry, RemoteAgentCard};
