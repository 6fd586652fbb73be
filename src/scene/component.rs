use super::*;

/// Lets trait objects be downcast to their concrete type
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Something attached to a scene object whose state can be exposed as signals. Components without
/// a registered extractor are exposed through the member table they return here.
pub trait Component: AsAny + Send + Sync {
    fn members(&self) -> Vec<Member> {
        Vec::new()
    }

    /// The concrete type behind a `dyn Component`. Not meant to be overridden.
    fn component_type(&self) -> ValueType {
        ValueType::of::<Self>()
    }
}

/// Shared handle to a live component. Properties keep one of these to read and write their target.
pub type ComponentRef = Arc<RwLock<dyn Component>>;

pub fn into_component_ref<C: Component>(component: C) -> ComponentRef {
    Arc::new(RwLock::new(component))
}

pub fn downcast_component<T: Component>(component: &dyn Component) -> MapperResult<&T> {
    component
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| MapperError::TypeMismatch {
            expected: type_name::<T>(),
            actual: component.component_type().name(),
        })
}

pub fn downcast_component_mut<T: Component>(
    component: &mut dyn Component,
) -> MapperResult<&mut T> {
    let actual = component.component_type().name();
    component
        .as_any_mut()
        .downcast_mut::<T>()
        .ok_or(MapperError::TypeMismatch {
            expected: type_name::<T>(),
            actual,
        })
}
