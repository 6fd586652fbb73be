use super::*;
use bimap::BiMap;

#[derive(Debug)]
struct InstanceSlot {
    value: Option<WireValue>,
    time: Time,
    status: InstanceStatus,
}

#[derive(Debug)]
struct SignalEntry {
    properties: SignalProperties,
    session: u64,
    instances: BTreeMap<InstanceId, InstanceSlot>,
    released: Vec<InstanceId>,
}

/// Operations from remote peers, delivered on the next poll
#[derive(Debug)]
enum Pending {
    Write {
        signal: SignalId,
        instance: InstanceId,
        value: WireValue,
    },
    Release {
        signal: SignalId,
        instance: InstanceId,
    },
}

#[derive(Debug)]
struct NetworkState {
    clock: Time,
    names: BiMap<String, SignalId>,
    signals: HashMap<SignalId, SignalEntry>,
    pending: Vec<Pending>,
    polls: HashMap<u64, u64>,
    next_signal: u64,
    next_session: u64,
    ready_after_polls: u64,
}

impl NetworkState {
    fn signal(&self, id: SignalId) -> MapperResult<&SignalEntry> {
        self.signals
            .get(&id)
            .ok_or_else(|| MapperError::Transport(format!("no signal {:?}", id)))
    }

    fn signal_mut(&mut self, id: SignalId) -> MapperResult<&mut SignalEntry> {
        self.signals
            .get_mut(&id)
            .ok_or_else(|| MapperError::Transport(format!("no signal {:?}", id)))
    }

    fn slot(&self, id: SignalId, instance: InstanceId) -> MapperResult<&InstanceSlot> {
        let signal = self.signal(id)?;
        signal.instances.get(&instance).ok_or_else(|| {
            MapperError::Transport(format!(
                "{} has no instance {}",
                signal.properties.name, instance
            ))
        })
    }

    fn slot_mut(&mut self, id: SignalId, instance: InstanceId) -> MapperResult<&mut InstanceSlot> {
        let signal = self.signal_mut(id)?;
        let name = &signal.properties.name;
        match signal.instances.get_mut(&instance) {
            Some(slot) => Ok(slot),
            None => Err(MapperError::Transport(format!(
                "{} has no instance {}",
                name, instance
            ))),
        }
    }

    fn lookup(&self, name: &str) -> MapperResult<SignalId> {
        self.names
            .get_by_left(name)
            .copied()
            .ok_or_else(|| MapperError::Transport(format!("no signal named {}", name)))
    }

    fn deliver_pending(&mut self) {
        let clock = self.clock;
        for pending in std::mem::take(&mut self.pending) {
            match pending {
                Pending::Write {
                    signal,
                    instance,
                    value,
                } => match self.slot_mut(signal, instance) {
                    Ok(slot) => {
                        slot.value = Some(value);
                        slot.time = clock;
                        slot.status.updated_remotely = true;
                    }
                    Err(e) => trace!("dropped remote write: {}", e),
                },
                Pending::Release { signal, instance } => match self.slot_mut(signal, instance) {
                    Ok(slot) => slot.status.release_requested = true,
                    Err(e) => trace!("dropped remote release: {}", e),
                },
            }
        }
    }
}

/// A snapshot of one signal as the network sees it
#[derive(Debug, Clone, PartialEq)]
pub struct SignalInfo {
    pub properties: SignalProperties,
    /// Currently reserved instances, in ascending order
    pub instances: Vec<InstanceId>,
    /// Instances that have been released, in the order they were released
    pub released: Vec<InstanceId>,
}

/// An in-process network. Sessions created from the same network share one logical clock, which
/// every poll advances. Signals are addressed by their full name, "<session>/<signal>".
///
/// The network also plays the remote peers: `remote_write()` and `remote_release()` are delivered
/// to the target instance on the next poll of any session.
#[derive(Debug, Clone)]
pub struct LoopbackNetwork {
    state: Arc<Mutex<NetworkState>>,
}

impl Default for LoopbackNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopbackNetwork {
    /// Sessions are ready after their first poll
    pub fn new() -> Self {
        Self::with_ready_after(1)
    }

    /// Sessions are ready once they have polled this many times
    pub fn with_ready_after(polls: u64) -> Self {
        Self {
            state: Arc::new(Mutex::new(NetworkState {
                clock: Time::ZERO,
                names: BiMap::new(),
                signals: HashMap::new(),
                pending: Vec::new(),
                polls: HashMap::new(),
                next_signal: 1,
                next_session: 1,
                ready_after_polls: polls,
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NetworkState> {
        self.state.lock().expect("failed to lock loopback network")
    }

    pub fn session(&self, name: &str) -> LoopbackSession {
        let mut state = self.lock();
        let id = state.next_session;
        state.next_session += 1;
        state.polls.insert(id, 0);
        LoopbackSession {
            name: name.to_string(),
            id,
            state: self.state.clone(),
        }
    }

    pub fn time(&self) -> Time {
        self.lock().clock
    }

    /// Full names of every signal on the network, sorted
    pub fn signal_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().names.left_values().cloned().collect();
        names.sort();
        names
    }

    pub fn signal_info(&self, name: &str) -> Option<SignalInfo> {
        let state = self.lock();
        let id = state.lookup(name).ok()?;
        let entry = state.signal(id).ok()?;
        Some(SignalInfo {
            properties: entry.properties.clone(),
            instances: entry.instances.keys().copied().collect(),
            released: entry.released.clone(),
        })
    }

    /// The instance's value and timestamp, if the instance exists and has been written
    pub fn value_of(&self, name: &str, instance: InstanceId) -> Option<(WireValue, Time)> {
        let state = self.lock();
        let id = state.lookup(name).ok()?;
        let slot = state.slot(id, instance).ok()?;
        slot.value.clone().map(|value| (value, slot.time))
    }

    /// A peer writes the instance. Takes effect, stamped with the new time, on the next poll.
    pub fn remote_write(
        &self,
        name: &str,
        instance: InstanceId,
        value: WireValue,
    ) -> MapperResult<()> {
        let mut state = self.lock();
        let signal = state.lookup(name)?;
        state.pending.push(Pending::Write {
            signal,
            instance,
            value,
        });
        Ok(())
    }

    /// A peer asks for the instance to be released. Takes effect on the next poll.
    pub fn remote_release(&self, name: &str, instance: InstanceId) -> MapperResult<()> {
        let mut state = self.lock();
        let signal = state.lookup(name)?;
        state.pending.push(Pending::Release { signal, instance });
        Ok(())
    }
}

impl SessionBuilder for LoopbackNetwork {
    fn create_session(&self, name: &str) -> MapperResult<Box<dyn Transport>> {
        Ok(Box::new(self.session(name)))
    }
}

/// One session on a `LoopbackNetwork`
pub struct LoopbackSession {
    name: String,
    id: u64,
    state: Arc<Mutex<NetworkState>>,
}

impl LoopbackSession {
    fn lock(&self) -> std::sync::MutexGuard<'_, NetworkState> {
        self.state.lock().expect("failed to lock loopback network")
    }
}

impl Transport for LoopbackSession {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_signal(&mut self, properties: &SignalProperties) -> MapperResult<SignalId> {
        let full_name = format!("{}/{}", self.name, properties.name);
        let mut state = self.lock();
        if state.names.contains_left(&full_name) {
            return Err(MapperError::Transport(format!(
                "signal {} already exists",
                full_name
            )));
        }
        let id = SignalId(state.next_signal);
        state.next_signal += 1;
        state.names.insert(full_name, id);
        state.signals.insert(
            id,
            SignalEntry {
                properties: properties.clone(),
                session: self.id,
                instances: BTreeMap::new(),
                released: Vec::new(),
            },
        );
        Ok(id)
    }

    fn reserve_instance(&mut self, signal: SignalId, instance: InstanceId) -> MapperResult<()> {
        let mut state = self.lock();
        let clock = state.clock;
        let entry = state.signal_mut(signal)?;
        if entry.instances.contains_key(&instance) {
            return Err(MapperError::Transport(format!(
                "{} already has instance {}",
                entry.properties.name, instance
            )));
        }
        let value = entry.properties.default.clone();
        entry.instances.insert(
            instance,
            InstanceSlot {
                value,
                time: clock,
                status: InstanceStatus::default(),
            },
        );
        Ok(())
    }

    fn release_instance(&mut self, signal: SignalId, instance: InstanceId) -> MapperResult<()> {
        let mut state = self.lock();
        let entry = state.signal_mut(signal)?;
        match entry.instances.remove(&instance) {
            Some(_) => {
                entry.released.push(instance);
                Ok(())
            }
            None => Err(MapperError::Transport(format!(
                "{} has no instance {} to release",
                entry.properties.name, instance
            ))),
        }
    }

    fn set_value(
        &mut self,
        signal: SignalId,
        instance: InstanceId,
        value: WireValue,
    ) -> MapperResult<()> {
        let mut state = self.lock();
        let clock = state.clock;
        let expected = state.signal(signal)?.properties.wire_type;
        if value.wire_type() != expected {
            return Err(MapperError::Transport(format!(
                "signal carries {} values, got {}",
                expected,
                value.wire_type()
            )));
        }
        let slot = state.slot_mut(signal, instance)?;
        slot.value = Some(value);
        slot.time = clock;
        Ok(())
    }

    fn value(
        &self,
        signal: SignalId,
        instance: InstanceId,
    ) -> MapperResult<(Option<WireValue>, Time)> {
        let state = self.lock();
        let slot = state.slot(signal, instance)?;
        Ok((slot.value.clone(), slot.time))
    }

    fn take_status(
        &mut self,
        signal: SignalId,
        instance: InstanceId,
    ) -> MapperResult<InstanceStatus> {
        let mut state = self.lock();
        let slot = state.slot_mut(signal, instance)?;
        Ok(std::mem::take(&mut slot.status))
    }

    fn is_ready(&self) -> bool {
        let state = self.lock();
        state.polls.get(&self.id).copied().unwrap_or(0) >= state.ready_after_polls
    }

    fn poll(&mut self, block_for: Duration) {
        if !block_for.is_zero() {
            std::thread::sleep(block_for);
        }
        let mut state = self.lock();
        state.clock = state.clock.next();
        *state.polls.entry(self.id).or_insert(0) += 1;
        state.deliver_pending();
    }

    fn time(&self) -> Time {
        self.lock().clock
    }
}

impl Drop for LoopbackSession {
    fn drop(&mut self) {
        match self.state.lock() {
            Ok(mut state) => {
                let id = self.id;
                state.signals.retain(|_, entry| entry.session != id);
                let stale: Vec<String> = state
                    .names
                    .iter()
                    .filter(|(_, signal)| !state.signals.contains_key(*signal))
                    .map(|(name, _)| name.clone())
                    .collect();
                for name in stale {
                    state.names.remove_by_left(&name);
                }
                state.polls.remove(&id);
            }
            Err(_) => warn!("loopback network poisoned, {} not cleaned up", self.name),
        }
    }
}
