use super::*;

new_key_type! {
    pub struct ListKey;
}

/// Components of one scene object that should be exposed as signals, and how. A list is
/// discovered once; after that its properties live in the signal registry until the list is
/// destroyed.
#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct ComponentList {
    pub owner: ObjectKey,
    #[derivative(Debug = "ignore")]
    pub components: Vec<ComponentRef>,
    pub direction: SignalDirection,
    pub ephemeral: bool,
    /// If false, every property of the list gets a signal of its own
    pub can_instance: bool,
    visited: bool,
}

impl ComponentList {
    pub fn new(owner: ObjectKey) -> Self {
        Self {
            owner,
            components: Vec::new(),
            direction: SignalDirection::ReadWrite,
            ephemeral: false,
            can_instance: true,
            visited: false,
        }
    }

    pub fn with_component(mut self, component: ComponentRef) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_direction(mut self, direction: SignalDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    pub fn without_instancing(mut self) -> Self {
        self.can_instance = false;
        self
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }
}
