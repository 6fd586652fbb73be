use super::*;
use std::{mem, thread, thread::JoinHandle};

enum TransportSlot {
    /// Not started, or the transport was lost to a failed background poll
    Empty,
    Idle(Box<dyn Transport>),
    /// The transport has been moved to a worker thread for a background poll
    Polling(JoinHandle<Box<dyn Transport>>),
}

/// Exposes the components of discovery lists on the network. Call `start()` once, then `tick()` at
/// a fixed rate.
///
/// Until the device is frozen extractors, converters and components can be registered but nothing
/// is synchronized. After it is frozen registration fails and every tick synchronizes.
pub struct Device {
    config: DeviceConfig,
    owner: ObjectKey,
    types: TypeRegistry,
    signals: SignalRegistry,
    lists: SlotMap<ListKey, ComponentList>,
    /// The list add_component() appends to, created on first use
    own_list: Option<ListKey>,
    transport: TransportSlot,
    /// Set by the first successful start(), even if the transport is lost later
    started: bool,
    /// A background poll has completed since the last synchronization
    polled: bool,
}

/// Runs discovery on every list that has not been visited yet. Each list is visited exactly once,
/// even if discovering it fails.
fn discover(
    lists: &mut SlotMap<ListKey, ComponentList>,
    types: &TypeRegistry,
    signals: &mut SignalRegistry,
    transport: &mut dyn Transport,
    scene: &Scene,
) -> MapperResult<usize> {
    let mut discovered = 0;
    for (key, list) in lists.iter_mut() {
        if list.is_visited() {
            continue;
        }
        list.mark_visited();
        let owner = match OwnerInfo::from_scene(scene, list.owner) {
            Some(owner) => owner,
            None => {
                warn!("owner of component list {:?} is not in the scene", key);
                continue;
            }
        };
        for component in &list.components {
            for property in types.extract_properties(component)? {
                let property = types.primitivize(property)?;
                let spec = SignalSpec::new(property, owner.clone(), key).with_list_settings(list);
                signals.register(transport, spec)?;
                discovered += 1;
            }
        }
    }
    if discovered > 0 {
        info!("discovered {} properties", discovered);
    }
    Ok(discovered)
}

impl Device {
    /// `owner` is the scene object components added with `add_component()` are attached to
    pub fn new(config: DeviceConfig, owner: ObjectKey) -> Self {
        Self {
            config,
            owner,
            types: TypeRegistry::new(),
            signals: SignalRegistry::new(),
            lists: SlotMap::with_key(),
            own_list: None,
            transport: TransportSlot::Empty,
            started: false,
            polled: false,
        }
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn signals(&self) -> &SignalRegistry {
        &self.signals
    }

    pub fn is_frozen(&self) -> bool {
        self.types.is_frozen()
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.transport, TransportSlot::Empty)
    }

    /// Opens a session named after the device, registers the built-in extractors and converters
    /// and then whatever `extensions` registers. Registration is open during start() even if
    /// freeze() was already called. Unless the device is configured to use the API, it is frozen
    /// afterwards. A device can only be started once, later calls fail without touching the
    /// running session.
    pub fn start<F>(&mut self, builder: &dyn SessionBuilder, extensions: F) -> MapperResult<()>
    where
        F: FnOnce(&mut Self) -> MapperResult<()>,
    {
        if self.started {
            return Err(MapperError::AlreadyStarted);
        }
        let transport = builder.create_session(&self.config.name)?;
        let was_frozen = self.types.is_frozen();
        self.types.set_frozen(false);
        let registered = register_builtins(&mut self.types).and_then(|()| extensions(self));
        self.types.set_frozen(was_frozen);
        registered?;
        self.transport = TransportSlot::Idle(transport);
        self.started = true;
        self.polled = false;
        info!("device {} started", self.config.name);
        if !self.config.use_api {
            self.freeze();
        }
        Ok(())
    }

    /// Closes registration and lets ticks start synchronizing. Can not be undone.
    pub fn freeze(&mut self) {
        if !self.types.is_frozen() {
            debug!("device {} frozen", self.config.name);
        }
        self.types.freeze();
    }

    pub fn register_extractor<T, E>(&mut self, extractor: E) -> MapperResult<()>
    where
        T: Component,
        E: PropertyExtractor<T>,
    {
        self.types.register_extractor::<T, E>(extractor)
    }

    pub fn register_converter<C: TypeConverter>(&mut self, converter: C) -> MapperResult<()> {
        self.types.register_type_converter(converter)
    }

    /// Exposes a component through the device's own list
    pub fn add_component(&mut self, component: ComponentRef) -> MapperResult<()> {
        if self.types.is_frozen() {
            return Err(MapperError::Frozen("component".to_string()));
        }
        let key = match self.own_list {
            Some(key) if self.lists.contains_key(key) => key,
            _ => {
                let key = self.lists.insert(ComponentList::new(self.owner));
                self.own_list = Some(key);
                key
            }
        };
        if let Some(list) = self.lists.get_mut(key) {
            list.components.push(component);
        }
        Ok(())
    }

    /// Lists can be added at any time, they are discovered on the next tick after the session is
    /// ready
    pub fn add_component_list(&mut self, list: ComponentList) -> ListKey {
        self.lists.insert(list)
    }

    pub fn component_list(&self, key: ListKey) -> Option<&ComponentList> {
        self.lists.get(key)
    }

    /// Removes the list and releases every signal instance discovered from it
    pub fn destroy_component_list(&mut self, key: ListKey) -> MapperResult<Option<ComponentList>> {
        let list = match self.lists.remove(key) {
            Some(list) => list,
            None => return Ok(None),
        };
        if self.own_list == Some(key) {
            self.own_list = None;
        }
        if list.is_visited() {
            self.finish_poll()?;
            if let TransportSlot::Idle(transport) = &mut self.transport {
                let removed = self.signals.remove_all_from_list(transport.as_mut(), key)?;
                debug!("destroyed component list, released {} instances", removed);
            }
        }
        Ok(Some(list))
    }

    /// Whether the session has joined the network. False while a background poll is in flight.
    pub fn is_ready(&self) -> bool {
        match &self.transport {
            TransportSlot::Idle(transport) => transport.is_ready(),
            _ => false,
        }
    }

    /// Waits for an in-flight background poll, if any
    fn finish_poll(&mut self) -> MapperResult<()> {
        match mem::replace(&mut self.transport, TransportSlot::Empty) {
            TransportSlot::Polling(handle) => {
                let transport = handle
                    .join()
                    .map_err(|_| MapperError::Transport("background poll panicked".to_string()))?;
                self.transport = TransportSlot::Idle(transport);
                self.polled = true;
            }
            other => self.transport = other,
        }
        Ok(())
    }

    /// Moves the transport to a worker thread for one blocking poll
    fn schedule_poll(&mut self) -> MapperResult<()> {
        match mem::replace(&mut self.transport, TransportSlot::Empty) {
            TransportSlot::Idle(mut transport) => {
                let poll_time = self.config.poll_time;
                let handle = thread::Builder::new()
                    .name("transport poll".to_string())
                    .spawn(move || {
                        transport.poll(poll_time);
                        transport
                    })
                    .map_err(|e| MapperError::Transport(format!("failed to start poll: {}", e)))?;
                self.transport = TransportSlot::Polling(handle);
            }
            other => self.transport = other,
        }
        Ok(())
    }

    /// One synchronization step. Does nothing until the device is started and frozen. Otherwise
    /// advances the transport, and once the session is ready discovers new component lists and
    /// synchronizes every signal instance.
    pub fn tick(&mut self, scene: &Scene) -> MapperResult<()> {
        if !self.types.is_frozen() {
            return Ok(());
        }
        self.finish_poll()?;
        let transport = match &mut self.transport {
            TransportSlot::Idle(transport) => transport,
            _ => return Ok(()),
        };
        let polled = match self.config.polling {
            PollingMode::Immediate => {
                transport.poll(Duration::ZERO);
                true
            }
            PollingMode::Background => mem::take(&mut self.polled),
        };
        if polled && transport.is_ready() {
            discover(
                &mut self.lists,
                &self.types,
                &mut self.signals,
                transport.as_mut(),
                scene,
            )?;
            self.signals.sync_all(transport.as_mut())?;
        }
        if self.config.polling == PollingMode::Background {
            self.schedule_poll()?;
        }
        Ok(())
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        self.finish_poll()
            .or_log_warn("background poll failed while shutting down");
    }
}
