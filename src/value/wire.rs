use super::*;

/// The element types the transport can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    Float,
    Int32,
    Double,
}

impl WireType {
    /// The wire type of a backing type, or None if the type is not a wire primitive. Scalars and
    /// arrays of the same element share a wire type, only the vector length differs.
    pub fn of(value_type: ValueType) -> Option<Self> {
        if value_type.is::<f32>() || value_type.is::<Vec<f32>>() {
            Some(Self::Float)
        } else if value_type.is::<i32>() || value_type.is::<Vec<i32>>() {
            Some(Self::Int32)
        } else if value_type.is::<f64>() || value_type.is::<Vec<f64>>() {
            Some(Self::Double)
        } else {
            None
        }
    }

    pub fn is_primitive(value_type: ValueType) -> bool {
        Self::of(value_type).is_some()
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Float => "float",
            Self::Int32 => "int32",
            Self::Double => "double",
        };
        write!(f, "{}", name)
    }
}

/// A value as handed to and received from the transport. Scalars travel as length 1 vectors.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Float(Vec<f32>),
    Int32(Vec<i32>),
    Double(Vec<f64>),
}

fn check_length(expected: usize, actual: usize) -> MapperResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(MapperError::VectorLength { expected, actual })
    }
}

impl WireValue {
    pub fn wire_type(&self) -> WireType {
        match self {
            Self::Float(_) => WireType::Float,
            Self::Int32(_) => WireType::Int32,
            Self::Double(_) => WireType::Double,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Float(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Double(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Packs a primitive value produced by a property accessor. Arrays must have exactly the
    /// declared vector length.
    pub fn from_value(value: Value, vector_length: usize) -> MapperResult<Self> {
        let value_type = value.value_type();
        let wire = if value.is::<f32>() {
            Self::Float(vec![value.downcast::<f32>()?])
        } else if value.is::<i32>() {
            Self::Int32(vec![value.downcast::<i32>()?])
        } else if value.is::<f64>() {
            Self::Double(vec![value.downcast::<f64>()?])
        } else if value.is::<Vec<f32>>() {
            Self::Float(value.downcast::<Vec<f32>>()?)
        } else if value.is::<Vec<i32>>() {
            Self::Int32(value.downcast::<Vec<i32>>()?)
        } else if value.is::<Vec<f64>>() {
            Self::Double(value.downcast::<Vec<f64>>()?)
        } else {
            return Err(MapperError::TypeMismatch {
                expected: "a wire primitive",
                actual: value_type.name(),
            });
        };
        check_length(vector_length, wire.len())?;
        Ok(wire)
    }

    /// Unpacks into the given primitive backing type, which must agree with this value's wire
    /// type. Scalar backing types take a length 1 vector.
    pub fn into_value(self, backing: ValueType, vector_length: usize) -> MapperResult<Value> {
        check_length(vector_length, self.len())?;
        let mismatch = |wire: &WireValue| MapperError::TypeMismatch {
            expected: backing.name(),
            actual: match wire {
                Self::Float(_) => "Vec<f32>",
                Self::Int32(_) => "Vec<i32>",
                Self::Double(_) => "Vec<f64>",
            },
        };
        match self {
            Self::Float(v) if backing.is::<Vec<f32>>() => Ok(Value::new(v)),
            Self::Float(v) if backing.is::<f32>() && v.len() == 1 => Ok(Value::new(v[0])),
            Self::Int32(v) if backing.is::<Vec<i32>>() => Ok(Value::new(v)),
            Self::Int32(v) if backing.is::<i32>() && v.len() == 1 => Ok(Value::new(v[0])),
            Self::Double(v) if backing.is::<Vec<f64>>() => Ok(Value::new(v)),
            Self::Double(v) if backing.is::<f64>() && v.len() == 1 => Ok(Value::new(v[0])),
            other => Err(mismatch(&other)),
        }
    }

    /// The first element as a float, mostly useful for logging and tests
    pub fn first_as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => v.first().map(|x| f64::from(*x)),
            Self::Int32(v) => v.first().map(|x| f64::from(*x)),
            Self::Double(v) => v.first().copied(),
        }
    }
}
