use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum MapperError {
    /// Tried to register an extractor, converter or component after the device was frozen. String
    /// describes what was being registered.
    Frozen(String),
    /// Tried to replace the generic extractor every component falls back to
    ReservedExtractor,
    /// start() was called on a device that was already started
    AlreadyStarted,
    /// An extractor was handed a component of a type other than the one it was registered for
    ExtractorTypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    /// A property has a type that is not a wire primitive and no converter is registered for it
    MissingConverter(&'static str),
    /// A converter was registered whose simple side is not a wire primitive
    NotPrimitive(&'static str),
    /// A value was of a type other than the declared one
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    /// An array value had a length other than the declared vector length
    VectorLength { expected: usize, actual: usize },
    /// An instance identifier was assigned to a signal spec that already had one
    InstanceAlreadyAssigned(String),
    /// The transport rejected an operation or could not be reached
    Transport(String),
}

pub type MapperResult<T> = Result<T, MapperError>;

impl MapperError {
    /// Errors caused by how the device was set up. These are fatal and are never retried.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Frozen(_)
                | Self::ReservedExtractor
                | Self::AlreadyStarted
                | Self::ExtractorTypeMismatch { .. }
                | Self::MissingConverter(_)
                | Self::NotPrimitive(_)
        )
    }

    /// Errors caused by a caller breaking the contract of an accessor or signal spec
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. } | Self::VectorLength { .. } | Self::InstanceAlreadyAssigned(_)
        )
    }
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Frozen(what) => write!(
                f,
                "can't register {} after freeze(), set use_api to keep registration open",
                what
            ),
            Self::ReservedExtractor => {
                write!(f, "can't override the generic extractor for all components")
            }
            Self::AlreadyStarted => {
                write!(f, "device already started, start() can only be called once")
            }
            Self::ExtractorTypeMismatch { expected, actual } => {
                write!(f, "extractor expected a {}, got a {}", expected, actual)
            }
            Self::MissingConverter(t) => write!(f, "no converter registered for type {}", t),
            Self::NotPrimitive(t) => write!(
                f,
                "converter simple type {} is not a float, int, double or an array of them",
                t
            ),
            Self::TypeMismatch { expected, actual } => {
                write!(f, "expected a value of type {}, got {}", expected, actual)
            }
            Self::VectorLength { expected, actual } => write!(
                f,
                "expected a vector of length {}, got length {}",
                expected, actual
            ),
            Self::InstanceAlreadyAssigned(msg) => {
                write!(f, "instance identifier already assigned: {}", msg)
            }
            Self::Transport(msg) => write!(f, "transport: {}", msg),
        }
    }
}

impl Error for MapperError {}
