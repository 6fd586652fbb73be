use super::*;
use std::marker::PhantomData;

/// A strongly typed property of components of type `T`. Built-in and hand-written extractors
/// implement this and `bind()` it to a live component to get a `PropertyAccessor`.
pub trait TypedProperty<T: Component>: Send + Sync + 'static {
    type Value: Any + Send;

    fn name(&self) -> &str;

    fn vector_length(&self) -> usize {
        1
    }

    fn units(&self) -> Option<&str> {
        None
    }

    fn bounds(&self) -> Option<Bounds> {
        None
    }

    fn enforce_bounds(&self) -> bool {
        false
    }

    fn enabled(&self, _target: &T) -> Option<bool> {
        None
    }

    fn get(&self, target: &T) -> Self::Value;

    fn set(&self, target: &mut T, value: Self::Value);

    fn reset(&self, _target: &mut T) {}
}

/// A typed property bound to one live component. The component is downcast on every access, so a
/// handle that does not hold a `T` yields a type mismatch instead of a panic.
pub struct BoundProperty<T, P> {
    property: P,
    target: ComponentRef,
    _component: PhantomData<fn() -> T>,
}

pub fn bind<T, P>(target: &ComponentRef, property: P) -> Box<dyn PropertyAccessor>
where
    T: Component,
    P: TypedProperty<T>,
{
    Box::new(BoundProperty {
        property,
        target: target.clone(),
        _component: PhantomData,
    })
}

impl<T, P> BoundProperty<T, P>
where
    T: Component,
    P: TypedProperty<T>,
{
    fn with_target<R>(&self, f: impl FnOnce(&T) -> R) -> MapperResult<R> {
        let guard = self.target.read().expect("failed to lock component");
        Ok(f(downcast_component::<T>(&*guard)?))
    }

    fn with_target_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> MapperResult<R> {
        let mut guard = self.target.write().expect("failed to lock component");
        Ok(f(downcast_component_mut::<T>(&mut *guard)?))
    }
}

impl<T, P> PropertyAccessor for BoundProperty<T, P>
where
    T: Component,
    P: TypedProperty<T>,
{
    fn name(&self) -> &str {
        self.property.name()
    }

    fn backing_type(&self) -> ValueType {
        ValueType::of::<P::Value>()
    }

    fn vector_length(&self) -> usize {
        self.property.vector_length()
    }

    fn units(&self) -> Option<&str> {
        self.property.units()
    }

    fn bounds(&self) -> Option<Bounds> {
        self.property.bounds()
    }

    fn enforce_bounds(&self) -> bool {
        self.property.enforce_bounds()
    }

    fn enabled(&self) -> Option<bool> {
        self.with_target(|target| self.property.enabled(target))
            .ok()
            .flatten()
    }

    fn get_value(&self) -> MapperResult<Value> {
        self.with_target(|target| Value::new(self.property.get(target)))
    }

    fn set_object(&self, value: Value) -> MapperResult<()> {
        let value = accept_incoming(self, value)?.downcast::<P::Value>()?;
        self.with_target_mut(|target| self.property.set(target, value))
    }

    fn reset(&self) -> MapperResult<()> {
        self.with_target_mut(|target| self.property.reset(target))
    }
}
