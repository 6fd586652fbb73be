use super::*;

/// One exposed property of one live component. The transport only ever sees values of
/// `backing_type()`; anything else passed to `set_object()` is a contract violation.
pub trait PropertyAccessor: Send + Sync {
    /// Hierarchical, slash separated name, such as "Light/Intensity"
    fn name(&self) -> &str;

    /// The type `get_value()` returns and `set_object()` accepts
    fn backing_type(&self) -> ValueType;

    /// Greater than 1 only for array backed properties
    fn vector_length(&self) -> usize {
        1
    }

    fn units(&self) -> Option<&str> {
        None
    }

    fn bounds(&self) -> Option<Bounds> {
        None
    }

    /// If true (and there are bounds) incoming values are clamped before being stored
    fn enforce_bounds(&self) -> bool {
        false
    }

    /// Whether the underlying component is active, for components that have such a thing
    fn enabled(&self) -> Option<bool> {
        None
    }

    fn get_value(&self) -> MapperResult<Value>;

    fn set_object(&self, value: Value) -> MapperResult<()>;

    /// Puts the property into its default or inactive state
    fn reset(&self) -> MapperResult<()> {
        Ok(())
    }
}

impl Debug for dyn PropertyAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.backing_type().short_name())
    }
}

/// Checks an incoming value against a property's declared type and length, and clamps it if the
/// property asks for that
pub(super) fn accept_incoming(
    property: &(impl PropertyAccessor + ?Sized),
    value: Value,
) -> MapperResult<Value> {
    value.expect_type(property.backing_type())?;
    if let Some(actual) = value.array_len() {
        let expected = property.vector_length();
        if actual != expected {
            return Err(MapperError::VectorLength { expected, actual });
        }
    }
    match property.bounds() {
        Some(bounds) if property.enforce_bounds() => Ok(bounds.clamp_value(value)),
        _ => Ok(value),
    }
}
