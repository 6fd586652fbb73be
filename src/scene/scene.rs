use super::*;

new_key_type! {
    pub struct ObjectKey;
}

#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub parent: Option<ObjectKey>,
}

/// Named objects in a parent/child hierarchy
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<ObjectKey, SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panics if the parent is not in the scene
    pub fn add_object(&mut self, name: &str, parent: Option<ObjectKey>) -> ObjectKey {
        if let Some(parent) = parent {
            assert!(
                self.objects.contains_key(parent),
                "parent of {} is not in the scene",
                name
            );
        }
        self.objects.insert(SceneObject {
            name: name.to_string(),
            parent,
        })
    }

    /// Removes the object. Its children become roots.
    pub fn remove_object(&mut self, key: ObjectKey) -> Option<SceneObject> {
        let removed = self.objects.remove(key)?;
        for (_, object) in self.objects.iter_mut() {
            if object.parent == Some(key) {
                object.parent = None;
            }
        }
        Some(removed)
    }

    pub fn object(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    pub fn contains(&self, key: ObjectKey) -> bool {
        self.objects.contains_key(key)
    }

    pub fn name(&self, key: ObjectKey) -> Option<&str> {
        self.objects.get(key).map(|object| object.name.as_str())
    }

    pub fn parent(&self, key: ObjectKey) -> Option<ObjectKey> {
        self.objects.get(key).and_then(|object| object.parent)
    }

    pub fn children(&self, key: ObjectKey) -> impl Iterator<Item = ObjectKey> + '_ {
        self.objects
            .iter()
            .filter(move |(_, object)| object.parent == Some(key))
            .map(|(child, _)| child)
    }

    /// Slash separated names from the root down to the object, or an empty string if the object is
    /// not in the scene
    pub fn path(&self, key: ObjectKey) -> String {
        let mut names = Vec::new();
        let mut current = Some(key);
        while let Some(object) = current.and_then(|key| self.objects.get(key)) {
            names.push(object.name.as_str());
            current = object.parent;
        }
        names.reverse();
        names.join("/")
    }
}
