use super::*;

/// Extractors keyed by component type and converters keyed by composite type. Owned by the device,
/// filled in while it starts up and read-only once frozen.
pub struct TypeRegistry {
    extractors: HashMap<ValueType, Arc<dyn DynExtractor>>,
    converters: HashMap<ValueType, Arc<dyn DynConverter>>,
    frozen: bool,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            converters: HashMap::new(),
            frozen: false,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub(crate) fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    /// Registers an extractor for components of exactly type `T`, replacing any previous one
    pub fn register_extractor<T, E>(&mut self, extractor: E) -> MapperResult<()>
    where
        T: Component,
        E: PropertyExtractor<T>,
    {
        self.register_dyn_extractor(erase_extractor::<T, E>(extractor))
    }

    /// The generic fallback can not be replaced, so an extractor claiming the `dyn Component` type
    /// is rejected
    pub fn register_dyn_extractor(&mut self, extractor: Arc<dyn DynExtractor>) -> MapperResult<()> {
        if self.frozen {
            return Err(MapperError::Frozen("extractor".to_string()));
        }
        let component_type = extractor.component_type();
        if component_type == ValueType::of::<dyn Component>() {
            return Err(MapperError::ReservedExtractor);
        }
        if self.extractors.insert(component_type, extractor).is_some() {
            debug!("replaced extractor for {}", component_type.short_name());
        }
        Ok(())
    }

    /// Registers a converter for its composite type, replacing any previous one
    pub fn register_converter(&mut self, converter: Arc<dyn DynConverter>) -> MapperResult<()> {
        if self.frozen {
            return Err(MapperError::Frozen("converter".to_string()));
        }
        let complex_type = converter.complex_type();
        if self.converters.insert(complex_type, converter).is_some() {
            debug!("replaced converter for {}", complex_type.short_name());
        }
        Ok(())
    }

    pub fn register_type_converter<C: TypeConverter>(&mut self, converter: C) -> MapperResult<()> {
        self.register_converter(Arc::new(converter))
    }

    pub fn extractor_for(&self, component_type: ValueType) -> Option<&Arc<dyn DynExtractor>> {
        self.extractors.get(&component_type)
    }

    pub fn converter_for(&self, complex_type: ValueType) -> Option<&Arc<dyn DynConverter>> {
        self.converters.get(&complex_type)
    }

    /// Uses the extractor registered for the component's exact type if there is one, and generic
    /// extraction otherwise
    pub fn extract_properties(
        &self,
        handle: &ComponentRef,
    ) -> MapperResult<Vec<Box<dyn PropertyAccessor>>> {
        let component_type = {
            let guard = handle.read().expect("failed to lock component");
            let component: &dyn Component = &*guard;
            component.component_type()
        };
        match self.extractors.get(&component_type) {
            Some(extractor) => extractor.extract(handle),
            None => GenericExtractor::new(&self.converters).extract(handle),
        }
    }

    /// Makes sure the transport can carry the property's values. Properties with a wire primitive
    /// type are returned as they are, others are wrapped with the converter for their type. A
    /// missing converter, or one that does not produce a primitive, is a configuration error.
    pub fn primitivize(
        &self,
        property: Box<dyn PropertyAccessor>,
    ) -> MapperResult<Box<dyn PropertyAccessor>> {
        let backing_type = property.backing_type();
        if WireType::is_primitive(backing_type) {
            return Ok(property);
        }
        let converter = self
            .converters
            .get(&backing_type)
            .ok_or(MapperError::MissingConverter(backing_type.name()))?;
        if !WireType::is_primitive(converter.simple_type()) {
            return Err(MapperError::NotPrimitive(converter.simple_type().name()));
        }
        Ok(Box::new(WrappedProperty::new(property, converter.clone())?))
    }
}
