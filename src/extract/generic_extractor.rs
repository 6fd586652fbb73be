use super::*;

/// Fallback extraction for components with no registered extractor. Every eligible member with a
/// wire primitive type becomes a property; members of other types are wrapped with a registered
/// converter or skipped if there is none.
pub struct GenericExtractor<'a> {
    converters: &'a HashMap<ValueType, Arc<dyn DynConverter>>,
}

impl<'a> GenericExtractor<'a> {
    pub fn new(converters: &'a HashMap<ValueType, Arc<dyn DynConverter>>) -> Self {
        Self { converters }
    }

    pub fn extract(&self, handle: &ComponentRef) -> MapperResult<Vec<Box<dyn PropertyAccessor>>> {
        let (members, component_type) = {
            let guard = handle.read().expect("failed to lock component");
            let component: &dyn Component = &*guard;
            (component.members(), component.component_type())
        };
        debug!("extracting properties from {}", component_type.short_name());
        let mut properties: Vec<Box<dyn PropertyAccessor>> = Vec::new();
        for member in members {
            if !member.is_eligible() {
                trace!("  skipping {}", member.property_name());
                continue;
            }
            let value_type = member.value_type();
            if let Some(wire_type) = WireType::of(value_type) {
                debug!("  extracted {} as {}", member.property_name(), wire_type);
                properties.push(Box::new(FieldProperty::new(member, handle.clone())));
            } else if let Some(converter) = self.converters.get(&value_type) {
                debug!(
                    "  extracted {} as {} through a converter",
                    member.property_name(),
                    converter.simple_type().short_name()
                );
                let inner = Box::new(FieldProperty::new(member, handle.clone()));
                properties.push(Box::new(WrappedProperty::new(inner, converter.clone())?));
            } else {
                trace!(
                    "  skipping {}, {} has no converter",
                    member.property_name(),
                    value_type.short_name()
                );
            }
        }
        Ok(properties)
    }
}
