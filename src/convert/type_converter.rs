use super::*;

/// Converts between a composite type and a wire primitive (f32, i32, f64 or a Vec of one of those).
///
/// `create_complex(create_simple(x))` must give back a value equivalent to `x`.
pub trait TypeConverter: Send + Sync + 'static {
    type Complex: Any + Send;
    type Simple: Any + Send;

    /// Number of primitive elements in the simple representation
    fn vector_length(&self) -> usize;

    fn create_simple(&self, complex: Self::Complex) -> Self::Simple;

    /// When `Simple` is a Vec it is guaranteed to have `vector_length()` elements
    fn create_complex(&self, simple: Self::Simple) -> Self::Complex;
}

/// Type erased version of `TypeConverter`, which is what the device stores and what wrapped
/// properties use. Every `TypeConverter` is a `DynConverter`.
pub trait DynConverter: Send + Sync {
    fn vector_length(&self) -> usize;
    fn complex_type(&self) -> ValueType;
    fn simple_type(&self) -> ValueType;
    fn create_simple_value(&self, complex: Value) -> MapperResult<Value>;
    fn create_complex_value(&self, simple: Value) -> MapperResult<Value>;
}

impl<C: TypeConverter> DynConverter for C {
    fn vector_length(&self) -> usize {
        TypeConverter::vector_length(self)
    }

    fn complex_type(&self) -> ValueType {
        ValueType::of::<C::Complex>()
    }

    fn simple_type(&self) -> ValueType {
        ValueType::of::<C::Simple>()
    }

    fn create_simple_value(&self, complex: Value) -> MapperResult<Value> {
        let complex = complex.downcast::<C::Complex>()?;
        Ok(Value::new(self.create_simple(complex)))
    }

    fn create_complex_value(&self, simple: Value) -> MapperResult<Value> {
        if let Some(actual) = simple.array_len() {
            let expected = TypeConverter::vector_length(self);
            if actual != expected {
                return Err(MapperError::VectorLength { expected, actual });
            }
        }
        let simple = simple.downcast::<C::Simple>()?;
        Ok(Value::new(self.create_complex(simple)))
    }
}
