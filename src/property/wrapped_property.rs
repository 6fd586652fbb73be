use super::*;

/// Presents a property with a composite backing type as its primitive simple type. Values are
/// converted on the way in and out; name, units and bounds are the inner property's.
pub struct WrappedProperty {
    inner: Box<dyn PropertyAccessor>,
    converter: Arc<dyn DynConverter>,
}

impl WrappedProperty {
    /// Fails if the converter does not produce the inner property's backing type
    pub fn new(
        inner: Box<dyn PropertyAccessor>,
        converter: Arc<dyn DynConverter>,
    ) -> MapperResult<Self> {
        if converter.complex_type() != inner.backing_type() {
            return Err(MapperError::TypeMismatch {
                expected: inner.backing_type().name(),
                actual: converter.complex_type().name(),
            });
        }
        Ok(Self { inner, converter })
    }
}

impl PropertyAccessor for WrappedProperty {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn backing_type(&self) -> ValueType {
        self.converter.simple_type()
    }

    fn vector_length(&self) -> usize {
        self.converter.vector_length()
    }

    fn units(&self) -> Option<&str> {
        self.inner.units()
    }

    fn bounds(&self) -> Option<Bounds> {
        self.inner.bounds()
    }

    fn enforce_bounds(&self) -> bool {
        self.inner.enforce_bounds()
    }

    fn enabled(&self) -> Option<bool> {
        self.inner.enabled()
    }

    fn get_value(&self) -> MapperResult<Value> {
        self.converter.create_simple_value(self.inner.get_value()?)
    }

    fn set_object(&self, value: Value) -> MapperResult<()> {
        // bounds apply to the primitive side, the inner property would pass a composite through
        let value = accept_incoming(self, value)?;
        let complex = self.converter.create_complex_value(value)?;
        self.inner.set_object(complex)
    }

    fn reset(&self) -> MapperResult<()> {
        self.inner.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped_tint(lamp: &ComponentRef) -> WrappedProperty {
        let member = Member::field("tint", |l: &MockLamp| l.tint, |l, v| l.tint = v)
            .units("rgba")
            .bounds(0.0, 1.0)
            .enforce_bounds();
        let inner = Box::new(FieldProperty::new(member, lamp.clone()));
        WrappedProperty::new(inner, Arc::new(ColorConverter)).unwrap()
    }

    #[test]
    fn takes_type_from_converter_and_metadata_from_inner() {
        let lamp = into_component_ref(MockLamp::default());
        let property = wrapped_tint(&lamp);
        assert_eq!(property.name(), "MockLamp/tint");
        assert!(property.backing_type().is::<Vec<f32>>());
        assert_eq!(property.vector_length(), 4);
        assert_eq!(property.units(), Some("rgba"));
        assert_eq!(property.bounds(), Some(Bounds::new(0.0, 1.0)));
    }

    #[test]
    fn get_converts_to_simple() {
        let lamp = into_component_ref(MockLamp::default());
        write_component(&lamp, |l: &mut MockLamp| {
            l.tint = ColorRGBA::new(0.2, 0.4, 0.6, 1.0)
        });
        let value = wrapped_tint(&lamp).get_value().unwrap();
        assert_eq!(value.downcast::<Vec<f32>>(), Ok(vec![0.2, 0.4, 0.6, 1.0]));
    }

    #[test]
    fn set_converts_to_complex_and_clamps() {
        let lamp = into_component_ref(MockLamp::default());
        wrapped_tint(&lamp)
            .set_object(Value::new(vec![0.5f32, 2.0, -1.0, 1.0]))
            .unwrap();
        assert_eq!(
            read_component(&lamp, |l: &MockLamp| l.tint),
            ColorRGBA::new(0.5, 1.0, 0.0, 1.0)
        );
    }

    #[test]
    fn set_rejects_composite_value() {
        let lamp = into_component_ref(MockLamp::default());
        let err = wrapped_tint(&lamp)
            .set_object(Value::new(ColorRGBA::default()))
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn converter_must_match_inner_type() {
        let lamp = into_component_ref(MockLamp::default());
        let member = Member::field("tint", |l: &MockLamp| l.tint, |l, v| l.tint = v);
        let inner = Box::new(FieldProperty::new(member, lamp));
        assert!(WrappedProperty::new(inner, Arc::new(BoolConverter)).is_err());
    }
}
