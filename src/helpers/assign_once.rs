use super::*;

/// A value that starts empty and can be assigned exactly once. Unlike a lazily initialized cell,
/// a second assignment is always an error, even if the value is the same.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignOnce<T> {
    value: Option<T>,
}

impl<T> Default for AssignOnce<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T: Debug> AssignOnce<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the value. Fails with a contract violation if a value was already assigned, in which
    /// case the original value is kept.
    pub fn assign(&mut self, value: T) -> MapperResult<()> {
        if let Some(prev) = &self.value {
            Err(MapperError::InstanceAlreadyAssigned(format!(
                "{:?} can not be replaced by {:?}",
                prev, value
            )))
        } else {
            self.value = Some(value);
            Ok(())
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_assigned(&self) -> bool {
        self.value.is_some()
    }
}
