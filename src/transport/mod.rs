//! The contract the engine needs from the underlying peer discovery and value routing library,
//! plus an in-process implementation of it

use super::*;

mod loopback;
#[allow(clippy::module_inception)]
mod transport;

pub use loopback::{LoopbackNetwork, LoopbackSession, SignalInfo};
pub use transport::{
    InstanceId, InstanceStatus, SessionBuilder, SignalId, SignalProperties, Transport,
    TransportDirection,
};
