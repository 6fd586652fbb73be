use super::*;

/// Handle to a signal registered with a transport session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignalId(pub u64);

/// Identifies one instance of a signal. Never reused within a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which way values flow, as seen by the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportDirection {
    /// Only this session writes the signal
    Outgoing,
    /// Peers may write the signal
    Incoming,
}

/// Everything the transport needs to know to create a signal
#[derive(Debug, Clone, PartialEq)]
pub struct SignalProperties {
    pub name: String,
    pub direction: TransportDirection,
    pub vector_length: usize,
    pub wire_type: WireType,
    pub units: Option<String>,
    pub bounds: Option<Bounds>,
    pub ephemeral: bool,
    pub default: Option<WireValue>,
}

/// What happened to an instance on the network since the status was last taken
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstanceStatus {
    /// A peer wrote a new value
    pub updated_remotely: bool,
    /// A peer asked for the instance to be released
    pub release_requested: bool,
}

/// A live session with the network. Dropping the session destroys it along with its signals.
pub trait Transport: Send {
    fn name(&self) -> &str;

    fn add_signal(&mut self, properties: &SignalProperties) -> MapperResult<SignalId>;

    fn reserve_instance(&mut self, signal: SignalId, instance: InstanceId) -> MapperResult<()>;

    fn release_instance(&mut self, signal: SignalId, instance: InstanceId) -> MapperResult<()>;

    /// Publishes a new local value, stamped with the session's current time
    fn set_value(
        &mut self,
        signal: SignalId,
        instance: InstanceId,
        value: WireValue,
    ) -> MapperResult<()>;

    /// The instance's current value (None until anyone has written it) and when it was written
    fn value(&self, signal: SignalId, instance: InstanceId)
        -> MapperResult<(Option<WireValue>, Time)>;

    /// Returns the instance's status flags and clears them
    fn take_status(&mut self, signal: SignalId, instance: InstanceId)
        -> MapperResult<InstanceStatus>;

    /// False until the session has finished joining the network
    fn is_ready(&self) -> bool;

    /// Advances the session, blocking for up to `block_for` waiting for network activity. A zero
    /// duration never blocks.
    fn poll(&mut self, block_for: Duration);

    /// The session's logical clock
    fn time(&self) -> Time;
}

/// Creates named sessions. The device holds one of these until it starts.
pub trait SessionBuilder {
    fn create_session(&self, name: &str) -> MapperResult<Box<dyn Transport>>;
}
