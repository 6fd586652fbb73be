use super::*;
use std::marker::PhantomData;

/// Produces the properties a component of type `T` exposes. Each returned accessor should keep
/// `handle` so it can read and write the component on its own.
pub trait PropertyExtractor<T: Component>: Send + Sync + 'static {
    fn extract_properties(
        &self,
        component: &T,
        handle: &ComponentRef,
    ) -> Vec<Box<dyn PropertyAccessor>>;
}

/// Type erased extractor, as stored in the `TypeRegistry`
pub trait DynExtractor: Send + Sync {
    /// The exact component type this extractor handles
    fn component_type(&self) -> ValueType;

    fn extract(&self, handle: &ComponentRef) -> MapperResult<Vec<Box<dyn PropertyAccessor>>>;
}

struct ErasedExtractor<T, E> {
    extractor: E,
    _component: PhantomData<fn() -> T>,
}

pub fn erase_extractor<T, E>(extractor: E) -> Arc<dyn DynExtractor>
where
    T: Component,
    E: PropertyExtractor<T>,
{
    Arc::new(ErasedExtractor {
        extractor,
        _component: PhantomData,
    })
}

impl<T, E> DynExtractor for ErasedExtractor<T, E>
where
    T: Component,
    E: PropertyExtractor<T>,
{
    fn component_type(&self) -> ValueType {
        ValueType::of::<T>()
    }

    fn extract(&self, handle: &ComponentRef) -> MapperResult<Vec<Box<dyn PropertyAccessor>>> {
        let guard = handle.read().expect("failed to lock component");
        let component: &dyn Component = &*guard;
        let typed = component.as_any().downcast_ref::<T>().ok_or_else(|| {
            MapperError::ExtractorTypeMismatch {
                expected: type_name::<T>(),
                actual: component.component_type().name(),
            }
        })?;
        Ok(self.extractor.extract_properties(typed, handle))
    }
}
