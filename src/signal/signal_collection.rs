use super::*;

/// One network signal and every object instance mapped onto it. Type, vector length, units and
/// bounds come from the first spec and are assumed uniform across the group.
///
/// Collections are never destroyed, a collection whose instances have all been removed keeps its
/// signal registered.
#[derive(Debug)]
pub struct SignalCollection {
    name: String,
    signal: SignalId,
    direction: SignalDirection,
    representative: GroupingKey,
    backing_type: ValueType,
    vector_length: usize,
    next_instance: u64,
    instances: BTreeMap<InstanceId, SignalSpec>,
    last_synced: BTreeMap<InstanceId, Time>,
}

/// Pushes the local value of one instance out to the network and returns the time it was sent at
fn push(
    transport: &mut dyn Transport,
    signal: SignalId,
    instance: InstanceId,
    spec: &SignalSpec,
    vector_length: usize,
) -> MapperResult<Time> {
    let value = WireValue::from_value(spec.property.get_value()?, vector_length)?;
    transport.set_value(signal, instance, value)?;
    Ok(transport.time())
}

impl SignalCollection {
    /// Registers a signal shaped like `template` under `name`. The template itself is not added,
    /// pass it to `add()` afterwards.
    pub fn new(
        transport: &mut dyn Transport,
        name: String,
        template: &SignalSpec,
    ) -> MapperResult<Self> {
        let property = &template.property;
        let backing_type = property.backing_type();
        let wire_type = WireType::of(backing_type).ok_or(MapperError::TypeMismatch {
            expected: "a wire primitive",
            actual: backing_type.name(),
        })?;
        let signal = transport.add_signal(&SignalProperties {
            name: name.clone(),
            direction: template.direction.transport_direction(),
            vector_length: property.vector_length(),
            wire_type,
            units: property.units().map(str::to_string),
            bounds: property.bounds(),
            ephemeral: template.ephemeral,
            default: None,
        })?;
        info!(
            "created {} signal {} ({} x{})",
            template.direction,
            name,
            wire_type,
            property.vector_length()
        );
        Ok(Self {
            name,
            signal,
            direction: template.direction,
            representative: template.grouping_key(),
            backing_type,
            vector_length: property.vector_length(),
            next_instance: 0,
            instances: BTreeMap::new(),
            last_synced: BTreeMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signal_id(&self) -> SignalId {
        self.signal
    }

    pub fn direction(&self) -> SignalDirection {
        self.direction
    }

    pub fn backing_type(&self) -> ValueType {
        self.backing_type
    }

    pub fn vector_length(&self) -> usize {
        self.vector_length
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instance_ids(&self) -> Vec<InstanceId> {
        self.instances.keys().copied().collect()
    }

    pub fn spec(&self, instance: InstanceId) -> Option<&SignalSpec> {
        self.instances.get(&instance)
    }

    pub fn last_synced(&self, instance: InstanceId) -> Option<Time> {
        self.last_synced.get(&instance).copied()
    }

    /// Whether the spec belongs in this collection, judged against the collection's first spec
    pub fn can_accept(&self, spec: &SignalSpec) -> bool {
        spec.direction == self.direction && self.representative.matches(&spec.grouping_key())
    }

    /// Adds the spec as a new instance with a fresh identifier, and reserves that instance on the
    /// signal
    pub fn add(
        &mut self,
        transport: &mut dyn Transport,
        mut spec: SignalSpec,
    ) -> MapperResult<InstanceId> {
        let instance = InstanceId(self.next_instance);
        spec.assign_instance(instance)?;
        transport.reserve_instance(self.signal, instance)?;
        self.next_instance += 1;
        info!(
            "{} instance {} is {}",
            self.name, instance, spec.owner.path
        );
        self.last_synced.insert(instance, transport.time());
        self.instances.insert(instance, spec);
        Ok(instance)
    }

    /// Brings every instance in line with the network. Per instance, at most one of these happens:
    /// - a remote release request resets the local property
    /// - a remote value is applied locally, if the signal accepts remote writes and the remote
    ///   value is flagged as updated or is newer than the last sync
    /// - the local value is pushed out
    ///
    /// Write-only signals never push and read-only signals never apply remote values.
    pub fn sync(&mut self, transport: &mut dyn Transport) -> MapperResult<()> {
        for (&instance, spec) in &self.instances {
            let status = transport.take_status(self.signal, instance)?;
            if status.release_requested {
                debug!("{} {} released upstream, resetting", self.name, instance);
                spec.property.reset()?;
                continue;
            }
            if self.direction != SignalDirection::ReadOnly {
                let (remote, remote_time) = transport.value(self.signal, instance)?;
                let last_synced = self.last_synced.get(&instance).copied().unwrap_or(Time::ZERO);
                let accept = match self.direction {
                    SignalDirection::WriteOnly => true,
                    _ => status.updated_remotely || remote_time > last_synced,
                };
                if accept {
                    if let Some(remote) = remote {
                        trace!("{} {} <- {:?}", self.name, instance, remote);
                        let value = remote.into_value(self.backing_type, self.vector_length)?;
                        spec.property.set_object(value)?;
                        self.last_synced.insert(instance, remote_time);
                    }
                    continue;
                }
            }
            let sent = push(transport, self.signal, instance, spec, self.vector_length)?;
            self.last_synced.insert(instance, sent);
        }
        Ok(())
    }

    /// Removes and releases every instance that came from the given discovery list. Returns how
    /// many were removed.
    pub fn remove_list(
        &mut self,
        transport: &mut dyn Transport,
        list: ListKey,
    ) -> MapperResult<usize> {
        let doomed: Vec<InstanceId> = self
            .instances
            .iter()
            .filter(|(_, spec)| spec.list == list)
            .map(|(&instance, _)| instance)
            .collect();
        for &instance in &doomed {
            transport.release_instance(self.signal, instance)?;
            self.instances.remove(&instance);
            self.last_synced.remove(&instance);
            info!("released {} instance {}", self.name, instance);
        }
        Ok(doomed.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICE: &str = "dev";

    struct Fixture {
        network: LoopbackNetwork,
        session: LoopbackSession,
        scene: Scene,
        room: ObjectKey,
        lists: SlotMap<ListKey, ()>,
    }

    impl Fixture {
        fn new() -> Self {
            let network = LoopbackNetwork::new();
            let mut session = network.session(DEVICE);
            session.poll(Duration::ZERO);
            let mut scene = Scene::new();
            let room = scene.add_object("Room", None);
            Self {
                network,
                session,
                scene,
                room,
                lists: SlotMap::with_key(),
            }
        }

        fn spec(&mut self, owner: &str, property: MockProperty) -> SignalSpec {
            let object = self.scene.add_object(owner, Some(self.room));
            let list = self.lists.insert(());
            SignalSpec::new(
                Box::new(property),
                OwnerInfo::from_scene(&self.scene, object).unwrap(),
                list,
            )
        }

        fn collection(&mut self, direction: SignalDirection, property: MockProperty) -> SignalCollection {
            let mut spec = self.spec("Lamp.001", property);
            spec.direction = direction;
            let mut collection =
                SignalCollection::new(&mut self.session, "Room/Lamp.001/Foo/Bar".to_string(), &spec)
                    .unwrap();
            collection.add(&mut self.session, spec).unwrap();
            collection
        }

        fn full_name(&self) -> &'static str {
            "dev/Room/Lamp.001/Foo/Bar"
        }

        fn tick(&mut self, collection: &mut SignalCollection) {
            self.session.poll(Duration::ZERO);
            collection.sync(&mut self.session).unwrap();
        }
    }

    #[test]
    fn registers_signal_from_template() {
        let mut f = Fixture::new();
        let property = MockProperty::new("Foo/Bar").with_units("m").with_bounds(0.0, 2.0);
        let collection = f.collection(SignalDirection::ReadOnly, property);
        let info = f.network.signal_info(f.full_name()).unwrap();
        assert_eq!(info.properties.direction, TransportDirection::Outgoing);
        assert_eq!(info.properties.wire_type, WireType::Float);
        assert_eq!(info.properties.vector_length, 1);
        assert_eq!(info.properties.units.as_deref(), Some("m"));
        assert_eq!(info.properties.bounds, Some(Bounds::new(0.0, 2.0)));
        assert_eq!(info.instances, vec![InstanceId(0)]);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn instance_ids_increase_and_are_never_reused() {
        let mut f = Fixture::new();
        let mut collection = f.collection(SignalDirection::ReadWrite, MockProperty::new("Foo/Bar"));
        let second = f.spec("Lamp.002", MockProperty::new("Foo/Bar"));
        let second_list = second.list;
        assert_eq!(collection.add(&mut f.session, second).unwrap(), InstanceId(1));
        collection.remove_list(&mut f.session, second_list).unwrap();
        let third = f.spec("Lamp.003", MockProperty::new("Foo/Bar"));
        assert_eq!(collection.add(&mut f.session, third).unwrap(), InstanceId(2));
        assert_eq!(collection.instance_ids(), vec![InstanceId(0), InstanceId(2)]);
    }

    #[test]
    fn adding_assigns_instance_to_spec() {
        let mut f = Fixture::new();
        let mut collection = f.collection(SignalDirection::ReadWrite, MockProperty::new("Foo/Bar"));
        let spec = f.spec("Lamp.002", MockProperty::new("Foo/Bar"));
        let instance = collection.add(&mut f.session, spec).unwrap();
        assert_eq!(collection.spec(instance).unwrap().instance(), Some(instance));
        assert_eq!(collection.last_synced(instance), Some(f.session.time()));
    }

    #[test]
    fn adding_spec_that_already_has_instance_fails() {
        let mut f = Fixture::new();
        let mut collection = f.collection(SignalDirection::ReadWrite, MockProperty::new("Foo/Bar"));
        let mut spec = f.spec("Lamp.002", MockProperty::new("Foo/Bar"));
        spec.assign_instance(InstanceId(9)).unwrap();
        assert!(collection.add(&mut f.session, spec).unwrap_err().is_contract_violation());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn accepts_only_matching_direction_and_group() {
        let mut f = Fixture::new();
        let collection = f.collection(SignalDirection::ReadWrite, MockProperty::new("Foo/Bar"));
        assert!(collection.can_accept(&f.spec("Lamp.002", MockProperty::new("Foo/Bar"))));
        assert!(!collection.can_accept(&f.spec("Lamp", MockProperty::new("Foo/Bar"))));
        let mut read_only = f.spec("Lamp.003", MockProperty::new("Foo/Bar"));
        read_only.direction = SignalDirection::ReadOnly;
        assert!(!collection.can_accept(&read_only));
    }

    #[test]
    fn pushes_local_value_without_remote_update() {
        let mut f = Fixture::new();
        let property = MockProperty::new("Foo/Bar").with_value(1.25);
        let mut collection = f.collection(SignalDirection::ReadWrite, property);
        f.tick(&mut collection);
        let (value, time) = f.network.value_of(f.full_name(), InstanceId(0)).unwrap();
        assert_eq!(value, WireValue::Float(vec![1.25]));
        assert_eq!(collection.last_synced(InstanceId(0)), Some(time));
    }

    #[test]
    fn timestamp_increases_every_push() {
        let mut f = Fixture::new();
        let mut collection = f.collection(SignalDirection::ReadWrite, MockProperty::new("Foo/Bar"));
        let mut previous = collection.last_synced(InstanceId(0)).unwrap();
        for _ in 0..5 {
            f.tick(&mut collection);
            let now = collection.last_synced(InstanceId(0)).unwrap();
            assert!(now > previous);
            previous = now;
        }
    }

    #[test]
    fn applies_remote_update() {
        let mut f = Fixture::new();
        let property = MockProperty::new("Foo/Bar");
        let state = property.state();
        let mut collection = f.collection(SignalDirection::ReadWrite, property);
        f.network
            .remote_write(f.full_name(), InstanceId(0), WireValue::Float(vec![3.5]))
            .unwrap();
        f.tick(&mut collection);
        assert_eq!(state.lock().unwrap().value, 3.5);
        assert_eq!(state.lock().unwrap().sets, vec![3.5]);
    }

    #[test]
    fn remote_wins_tie_with_local_change() {
        let mut f = Fixture::new();
        let property = MockProperty::new("Foo/Bar").with_value(1.0);
        let state = property.state();
        let mut collection = f.collection(SignalDirection::ReadWrite, property);
        state.lock().unwrap().value = 2.0;
        f.network
            .remote_write(f.full_name(), InstanceId(0), WireValue::Float(vec![3.5]))
            .unwrap();
        f.tick(&mut collection);
        assert_eq!(state.lock().unwrap().value, 3.5);
        let (value, _) = f.network.value_of(f.full_name(), InstanceId(0)).unwrap();
        assert_eq!(value, WireValue::Float(vec![3.5]));
    }

    #[test]
    fn read_only_never_applies_remote_values() {
        let mut f = Fixture::new();
        let property = MockProperty::new("Foo/Bar").with_value(1.0);
        let state = property.state();
        let mut collection = f.collection(SignalDirection::ReadOnly, property);
        f.network
            .remote_write(f.full_name(), InstanceId(0), WireValue::Float(vec![3.5]))
            .unwrap();
        f.tick(&mut collection);
        assert!(state.lock().unwrap().sets.is_empty());
        let (value, _) = f.network.value_of(f.full_name(), InstanceId(0)).unwrap();
        assert_eq!(value, WireValue::Float(vec![1.0]));
    }

    #[test]
    fn write_only_never_pushes() {
        let mut f = Fixture::new();
        let property = MockProperty::new("Foo/Bar").with_value(1.0);
        let state = property.state();
        let mut collection = f.collection(SignalDirection::WriteOnly, property);
        f.tick(&mut collection);
        assert_eq!(f.network.value_of(f.full_name(), InstanceId(0)), None);
        assert_eq!(state.lock().unwrap().gets, 0);
    }

    #[test]
    fn write_only_applies_current_remote_value_every_tick() {
        let mut f = Fixture::new();
        let property = MockProperty::new("Foo/Bar");
        let state = property.state();
        let mut collection = f.collection(SignalDirection::WriteOnly, property);
        f.network
            .remote_write(f.full_name(), InstanceId(0), WireValue::Float(vec![0.5]))
            .unwrap();
        f.tick(&mut collection);
        f.tick(&mut collection);
        assert_eq!(state.lock().unwrap().sets, vec![0.5, 0.5]);
    }

    #[test]
    fn release_request_resets_and_skips() {
        let mut f = Fixture::new();
        let property = MockProperty::new("Foo/Bar").with_value(1.0);
        let state = property.state();
        let mut collection = f.collection(SignalDirection::ReadWrite, property);
        f.network.remote_release(f.full_name(), InstanceId(0)).unwrap();
        f.tick(&mut collection);
        assert_eq!(state.lock().unwrap().resets, 1);
        assert_eq!(f.network.value_of(f.full_name(), InstanceId(0)), None);
        assert_eq!(collection.len(), 1);
        f.tick(&mut collection);
        assert!(f.network.value_of(f.full_name(), InstanceId(0)).is_some());
    }

    #[test]
    fn applied_remote_value_is_pushed_back_next_tick() {
        let mut f = Fixture::new();
        let mut collection = f.collection(SignalDirection::ReadWrite, MockProperty::new("Foo/Bar"));
        f.network
            .remote_write(f.full_name(), InstanceId(0), WireValue::Float(vec![3.5]))
            .unwrap();
        f.tick(&mut collection);
        let applied_at = collection.last_synced(InstanceId(0)).unwrap();
        f.tick(&mut collection);
        let (value, time) = f.network.value_of(f.full_name(), InstanceId(0)).unwrap();
        assert_eq!(value, WireValue::Float(vec![3.5]));
        assert!(time > applied_at);
        assert_eq!(collection.last_synced(InstanceId(0)), Some(time));
    }

    #[test]
    fn remove_list_releases_only_that_lists_instances() {
        let mut f = Fixture::new();
        let mut collection = f.collection(SignalDirection::ReadWrite, MockProperty::new("Foo/Bar"));
        let second = f.spec("Lamp.002", MockProperty::new("Foo/Bar"));
        let second_list = second.list;
        collection.add(&mut f.session, second).unwrap();
        assert_eq!(collection.remove_list(&mut f.session, second_list).unwrap(), 1);
        assert_eq!(collection.instance_ids(), vec![InstanceId(0)]);
        assert_eq!(collection.last_synced(InstanceId(1)), None);
        let info = f.network.signal_info(f.full_name()).unwrap();
        assert_eq!(info.released, vec![InstanceId(1)]);
        assert_eq!(collection.remove_list(&mut f.session, second_list).unwrap(), 0);
    }

    #[test]
    fn failed_release_keeps_instances_registered() {
        let mut f = Fixture::new();
        let mut collection = f.collection(SignalDirection::ReadWrite, MockProperty::new("Foo/Bar"));
        let second = f.spec("Lamp.002", MockProperty::new("Foo/Bar"));
        let list = second.list;
        let mut third = f.spec("Lamp.003", MockProperty::new("Foo/Bar"));
        third.list = list;
        collection.add(&mut f.session, second).unwrap();
        collection.add(&mut f.session, third).unwrap();
        f.session
            .release_instance(collection.signal_id(), InstanceId(1))
            .unwrap();

        assert!(collection.remove_list(&mut f.session, list).is_err());
        assert_eq!(
            collection.instance_ids(),
            vec![InstanceId(0), InstanceId(1), InstanceId(2)]
        );
        assert!(collection.last_synced(InstanceId(1)).is_some());
        assert!(collection.last_synced(InstanceId(2)).is_some());
        let info = f.network.signal_info(f.full_name()).unwrap();
        assert_eq!(info.instances, vec![InstanceId(0), InstanceId(2)]);
    }

    #[test]
    fn signal_survives_losing_all_instances() {
        let mut f = Fixture::new();
        let mut collection = f.collection(SignalDirection::ReadWrite, MockProperty::new("Foo/Bar"));
        let list = collection.spec(InstanceId(0)).unwrap().list;
        collection.remove_list(&mut f.session, list).unwrap();
        assert!(collection.is_empty());
        assert!(f.network.signal_info(f.full_name()).is_some());
        f.tick(&mut collection);
    }

    #[test]
    fn property_errors_stop_sync() {
        let mut f = Fixture::new();
        let property = MockProperty::new("Foo/Bar");
        let state = property.state();
        let mut collection = f.collection(SignalDirection::ReadWrite, property);
        state.lock().unwrap().fail = true;
        f.session.poll(Duration::ZERO);
        assert!(collection.sync(&mut f.session).is_err());
    }
}
