use super::*;

/// Accessor over one `Member` of one live component, produced by generic extraction
pub struct FieldProperty {
    name: String,
    member: Member,
    target: ComponentRef,
}

impl FieldProperty {
    pub fn new(member: Member, target: ComponentRef) -> Self {
        Self {
            name: member.property_name(),
            member,
            target,
        }
    }

    pub fn member(&self) -> &Member {
        &self.member
    }
}

impl PropertyAccessor for FieldProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn backing_type(&self) -> ValueType {
        self.member.value_type()
    }

    fn vector_length(&self) -> usize {
        self.member.get_vector_length()
    }

    fn units(&self) -> Option<&str> {
        self.member.get_units()
    }

    fn bounds(&self) -> Option<Bounds> {
        self.member.get_bounds()
    }

    fn enforce_bounds(&self) -> bool {
        self.member.enforces_bounds()
    }

    fn get_value(&self) -> MapperResult<Value> {
        let target = self.target.read().expect("failed to lock component");
        self.member.read(&*target)
    }

    fn set_object(&self, value: Value) -> MapperResult<()> {
        let value = accept_incoming(self, value)?;
        let mut target = self.target.write().expect("failed to lock component");
        self.member.write(&mut *target, value)
    }

    fn reset(&self) -> MapperResult<()> {
        match self.member.default_value() {
            Some(value) => self.set_object(value),
            None => Ok(()),
        }
    }
}
