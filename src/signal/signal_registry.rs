use super::*;

/// Every signal collection of a device, in the order they were created
#[derive(Debug, Default)]
pub struct SignalRegistry {
    collections: Vec<SignalCollection>,
}

impl SignalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collections(&self) -> &[SignalCollection] {
        &self.collections
    }

    pub fn collection(&self, name: &str) -> Option<&SignalCollection> {
        self.collections.iter().find(|c| c.name() == name)
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Total instances across all collections
    pub fn instance_count(&self) -> usize {
        self.collections.iter().map(SignalCollection::len).sum()
    }

    /// "<owner path>/<property name>", with a number appended if another collection already has
    /// that name
    fn unique_name(&self, spec: &SignalSpec) -> String {
        let base = format!("{}/{}", spec.owner.path, spec.local_name);
        let mut name = base.clone();
        let mut n = 2;
        while self.collection(&name).is_some() {
            name = format!("{}_{}", base, n);
            n += 1;
        }
        name
    }

    /// Adds the spec to the first collection that accepts it, or creates a new collection for it
    pub fn register(
        &mut self,
        transport: &mut dyn Transport,
        spec: SignalSpec,
    ) -> MapperResult<InstanceId> {
        if let Some(collection) = self.collections.iter_mut().find(|c| c.can_accept(&spec)) {
            debug!(
                "adding {} of {} to existing collection {}",
                spec.local_name,
                spec.owner.path,
                collection.name()
            );
            return collection.add(transport, spec);
        }
        let name = self.unique_name(&spec);
        let mut collection = SignalCollection::new(transport, name, &spec)?;
        let instance = collection.add(transport, spec)?;
        self.collections.push(collection);
        Ok(instance)
    }

    pub fn sync_all(&mut self, transport: &mut dyn Transport) -> MapperResult<()> {
        for collection in &mut self.collections {
            collection.sync(transport)?;
        }
        Ok(())
    }

    /// Releases every instance that came from the list, across all collections. Collections are
    /// kept even when this leaves them empty.
    pub fn remove_all_from_list(
        &mut self,
        transport: &mut dyn Transport,
        list: ListKey,
    ) -> MapperResult<usize> {
        let mut removed = 0;
        for collection in &mut self.collections {
            removed += collection.remove_list(transport, list)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        network: LoopbackNetwork,
        session: LoopbackSession,
        scene: Scene,
        room: ObjectKey,
        lists: SlotMap<ListKey, ()>,
        registry: SignalRegistry,
    }

    impl Fixture {
        fn new() -> Self {
            let network = LoopbackNetwork::new();
            let mut session = network.session("dev");
            session.poll(Duration::ZERO);
            let mut scene = Scene::new();
            let room = scene.add_object("Room", None);
            Self {
                network,
                session,
                scene,
                room,
                lists: SlotMap::with_key(),
                registry: SignalRegistry::new(),
            }
        }

        fn register(&mut self, owner: &str, property: &str) -> (ListKey, InstanceId) {
            let object = self.scene.add_object(owner, Some(self.room));
            let list = self.lists.insert(());
            let spec = SignalSpec::new(
                Box::new(MockProperty::new(property)),
                OwnerInfo::from_scene(&self.scene, object).unwrap(),
                list,
            );
            let instance = self.registry.register(&mut self.session, spec).unwrap();
            (list, instance)
        }
    }

    #[test]
    fn suffixed_siblings_share_a_collection() {
        let mut f = Fixture::new();
        f.register("Lamp.001", "Light/Intensity");
        f.register("Lamp.002", "Light/Intensity");
        assert_eq!(f.registry.len(), 1);
        let collection = f.registry.collection("Room/Lamp.001/Light/Intensity").unwrap();
        assert_eq!(collection.instance_ids(), vec![InstanceId(0), InstanceId(1)]);
    }

    #[test]
    fn unsuffixed_sibling_gets_its_own_collection() {
        let mut f = Fixture::new();
        f.register("Lamp.001", "Light/Intensity");
        f.register("Lamp.002", "Light/Intensity");
        let (_, instance) = f.register("Lamp", "Light/Intensity");
        assert_eq!(f.registry.len(), 2);
        assert_eq!(instance, InstanceId(0));
        let collection = f.registry.collection("Room/Lamp/Light/Intensity").unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(
            f.network.signal_names(),
            vec![
                "dev/Room/Lamp.001/Light/Intensity".to_string(),
                "dev/Room/Lamp/Light/Intensity".to_string(),
            ]
        );
    }

    #[test]
    fn first_accepting_collection_wins() {
        let mut f = Fixture::new();
        f.register("Lamp.001", "Light/Intensity");
        f.register("Lamp", "Light/Intensity");
        // a plain "Lamp" sibling groups with the second collection only
        f.register("Lamp", "Light/Intensity");
        assert_eq!(f.registry.collections()[0].len(), 1);
        assert_eq!(f.registry.collections()[1].len(), 2);
    }

    #[test]
    fn colliding_names_are_made_unique() {
        let mut f = Fixture::new();
        let object = f.scene.add_object("Lamp", Some(f.room));
        for _ in 0..2 {
            let list = f.lists.insert(());
            let mut spec = SignalSpec::new(
                Box::new(MockProperty::new("Light/Intensity")),
                OwnerInfo::from_scene(&f.scene, object).unwrap(),
                list,
            );
            spec.can_instance = false;
            f.registry.register(&mut f.session, spec).unwrap();
        }
        assert!(f.registry.collection("Room/Lamp/Light/Intensity").is_some());
        assert!(f.registry.collection("Room/Lamp/Light/Intensity_2").is_some());
    }

    #[test]
    fn removing_list_touches_every_collection() {
        let mut f = Fixture::new();
        let object = f.scene.add_object("Lamp.001", Some(f.room));
        let list = f.lists.insert(());
        for property in ["Light/Intensity", "Light/Color"] {
            let spec = SignalSpec::new(
                Box::new(MockProperty::new(property)),
                OwnerInfo::from_scene(&f.scene, object).unwrap(),
                list,
            );
            f.registry.register(&mut f.session, spec).unwrap();
        }
        f.register("Lamp.002", "Light/Intensity");
        assert_eq!(f.registry.instance_count(), 3);
        let removed = f
            .registry
            .remove_all_from_list(&mut f.session, list)
            .unwrap();
        assert_eq!(removed, 2);
        assert_eq!(f.registry.instance_count(), 1);
        assert_eq!(f.registry.len(), 2);
    }

    #[test]
    fn sync_all_pushes_every_collection() {
        let mut f = Fixture::new();
        f.register("Lamp.001", "Light/Intensity");
        f.register("Lamp", "Light/Intensity");
        f.session.poll(Duration::ZERO);
        f.registry.sync_all(&mut f.session).unwrap();
        for name in f.network.signal_names() {
            assert!(f.network.value_of(&name, InstanceId(0)).is_some());
        }
    }
}
