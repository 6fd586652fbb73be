use super::*;

/// The scene object a property belongs to, as it was when the property was discovered
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerInfo {
    pub object: ObjectKey,
    pub name: String,
    pub parent: Option<ObjectKey>,
    pub path: String,
}

impl OwnerInfo {
    /// None if the object is not in the scene
    pub fn from_scene(scene: &Scene, object: ObjectKey) -> Option<Self> {
        let found = scene.object(object)?;
        Some(Self {
            object,
            name: found.name.clone(),
            parent: found.parent,
            path: scene.path(object),
        })
    }
}

/// Strips a trailing duplicate marker from an object name: "Lamp.001" and "Lamp (2)" both give
/// "Lamp". None if the name has no such suffix.
pub fn strip_duplicate_suffix(name: &str) -> Option<&str> {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if let Some((base, suffix)) = name.rsplit_once('.') {
        if all_digits(suffix) && !base.is_empty() {
            return Some(base);
        }
    }
    if let Some(rest) = name.strip_suffix(')') {
        if let Some((base, number)) = rest.rsplit_once(" (") {
            if all_digits(number) && !base.is_empty() {
                return Some(base);
            }
        }
    }
    None
}

/// The parts of a signal spec that decide whether it can share a signal with another
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingKey {
    pub can_instance: bool,
    pub parent: Option<ObjectKey>,
    pub local_name: String,
    pub owner_name: String,
    pub backing_type: ValueType,
    pub vector_length: usize,
}

impl GroupingKey {
    /// Both must allow instancing, have the same parent, local name and type, and be owned by
    /// objects with the same name or with duplicate suffixed names of the same base. "Lamp.001"
    /// matches "Lamp.002", but neither matches "Lamp".
    pub fn matches(&self, other: &GroupingKey) -> bool {
        self.can_instance
            && other.can_instance
            && self.parent == other.parent
            && self.local_name == other.local_name
            && self.backing_type == other.backing_type
            && self.vector_length == other.vector_length
            && (self.owner_name == other.owner_name
                || match (
                    strip_duplicate_suffix(&self.owner_name),
                    strip_duplicate_suffix(&other.owner_name),
                ) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                })
    }
}

/// A request to expose one property of one object, possibly as an instance of a signal shared
/// with similar objects
#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct SignalSpec {
    pub local_name: String,
    pub owner: OwnerInfo,
    #[derivative(Debug = "ignore")]
    pub property: Box<dyn PropertyAccessor>,
    /// The discovery list the property came from
    pub list: ListKey,
    pub can_instance: bool,
    pub ephemeral: bool,
    pub direction: SignalDirection,
    instance: AssignOnce<InstanceId>,
}

impl SignalSpec {
    pub fn new(property: Box<dyn PropertyAccessor>, owner: OwnerInfo, list: ListKey) -> Self {
        Self {
            local_name: property.name().to_string(),
            owner,
            property,
            list,
            can_instance: true,
            ephemeral: false,
            direction: SignalDirection::default(),
            instance: AssignOnce::new(),
        }
    }

    /// Takes direction, ephemerality and instancing from the list the property was found in
    pub fn with_list_settings(mut self, list: &ComponentList) -> Self {
        self.direction = list.direction;
        self.ephemeral = list.ephemeral;
        self.can_instance = list.can_instance;
        self
    }

    /// None until the spec joins a collection
    pub fn instance(&self) -> Option<InstanceId> {
        self.instance.get().copied()
    }

    /// Can only succeed once
    pub fn assign_instance(&mut self, instance: InstanceId) -> MapperResult<()> {
        self.instance.assign(instance)
    }

    pub fn grouping_key(&self) -> GroupingKey {
        GroupingKey {
            can_instance: self.can_instance,
            parent: self.owner.parent,
            local_name: self.local_name.clone(),
            owner_name: self.owner.name.clone(),
            backing_type: self.property.backing_type(),
            vector_length: self.property.vector_length(),
        }
    }

    pub fn can_group_with(&self, other: &SignalSpec) -> bool {
        self.grouping_key().matches(&other.grouping_key())
    }
}
