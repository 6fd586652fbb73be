use super::*;

/// An owned value of any type, tagged with its runtime type. This is what flows through property
/// accessors and type converters; code that expects a particular type downcasts and gets a type
/// mismatch error if the value is something else.
pub struct Value {
    inner: Box<dyn Any + Send>,
    value_type: ValueType,
}

impl Value {
    pub fn new<T: Any + Send>(value: T) -> Self {
        Self {
            inner: Box::new(value),
            value_type: ValueType::of::<T>(),
        }
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn downcast<T: Any>(self) -> MapperResult<T> {
        let actual = self.value_type.name();
        self.inner
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| MapperError::TypeMismatch {
                expected: type_name::<T>(),
                actual,
            })
    }

    pub fn downcast_ref<T: Any>(&self) -> MapperResult<&T> {
        self.inner
            .downcast_ref::<T>()
            .ok_or_else(|| MapperError::TypeMismatch {
                expected: type_name::<T>(),
                actual: self.value_type.name(),
            })
    }

    pub fn downcast_mut<T: Any>(&mut self) -> MapperResult<&mut T> {
        let actual = self.value_type.name();
        self.inner
            .downcast_mut::<T>()
            .ok_or(MapperError::TypeMismatch {
                expected: type_name::<T>(),
                actual,
            })
    }

    /// Length of a primitive array value, None for scalars and everything else
    pub fn array_len(&self) -> Option<usize> {
        if let Some(v) = self.inner.downcast_ref::<Vec<f32>>() {
            Some(v.len())
        } else if let Some(v) = self.inner.downcast_ref::<Vec<i32>>() {
            Some(v.len())
        } else {
            self.inner.downcast_ref::<Vec<f64>>().map(Vec::len)
        }
    }

    /// Fails with a type mismatch unless this value is of the given type
    pub fn expect_type(&self, expected: ValueType) -> MapperResult<()> {
        if self.value_type == expected {
            Ok(())
        } else {
            Err(MapperError::TypeMismatch {
                expected: expected.name(),
                actual: self.value_type.name(),
            })
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(v) = self.inner.downcast_ref::<f32>() {
            write!(f, "{:?}f32", v)
        } else if let Some(v) = self.inner.downcast_ref::<i32>() {
            write!(f, "{:?}i32", v)
        } else if let Some(v) = self.inner.downcast_ref::<f64>() {
            write!(f, "{:?}f64", v)
        } else if let Some(v) = self.inner.downcast_ref::<Vec<f32>>() {
            write!(f, "{:?}", v)
        } else if let Some(v) = self.inner.downcast_ref::<Vec<i32>>() {
            write!(f, "{:?}", v)
        } else if let Some(v) = self.inner.downcast_ref::<Vec<f64>>() {
            write!(f, "{:?}", v)
        } else if let Some(v) = self.inner.downcast_ref::<bool>() {
            write!(f, "{:?}", v)
        } else {
            write!(f, "<{}>", self.value_type.short_name())
        }
    }
}
