use super::*;

/// Runtime identity of a Rust type, comparable and hashable. Two value types are equal iff they
/// name the same type.
#[derive(derivative::Derivative, Clone, Copy)]
#[derivative(PartialEq, Eq, Hash)]
pub struct ValueType {
    id: TypeId,
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    name: &'static str,
}

impl ValueType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Full type name, including the module path
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without module path or generic arguments
    pub fn short_name(&self) -> &'static str {
        trim_type_name(self.name)
    }
}

impl Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_type_is_equal() {
        assert_eq!(ValueType::of::<f32>(), ValueType::of::<f32>());
        assert_ne!(ValueType::of::<f32>(), ValueType::of::<f64>());
    }

    #[test]
    fn is_checks_type() {
        assert!(ValueType::of::<Vec<i32>>().is::<Vec<i32>>());
        assert!(!ValueType::of::<Vec<i32>>().is::<i32>());
    }

    #[test]
    fn short_name_has_no_path() {
        assert_eq!(ValueType::of::<Vector3<f32>>().short_name(), "Vector3");
    }
}
