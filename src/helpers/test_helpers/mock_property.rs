use super::*;

#[derive(Debug, Default)]
pub struct MockPropertyState {
    pub value: f32,
    /// Every value passed to set_object(), in order
    pub sets: Vec<f32>,
    pub gets: usize,
    pub resets: usize,
    /// When set, get_value() and set_object() fail
    pub fail: bool,
}

/// A float property that records how it is used
pub struct MockProperty {
    name: String,
    units: Option<String>,
    bounds: Option<Bounds>,
    state: Arc<Mutex<MockPropertyState>>,
}

impl MockProperty {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            units: None,
            bounds: None,
            state: Arc::new(Mutex::new(MockPropertyState::default())),
        }
    }

    pub fn with_value(self, value: f32) -> Self {
        self.state.lock().expect("failed to lock mock property").value = value;
        self
    }

    pub fn with_units(mut self, units: &str) -> Self {
        self.units = Some(units.to_string());
        self
    }

    pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
        self.bounds = Some(Bounds::new(min, max));
        self
    }

    pub fn state(&self) -> Arc<Mutex<MockPropertyState>> {
        self.state.clone()
    }
}

impl PropertyAccessor for MockProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn backing_type(&self) -> ValueType {
        ValueType::of::<f32>()
    }

    fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    fn get_value(&self) -> MapperResult<Value> {
        let mut state = self.state.lock().expect("failed to lock mock property");
        if state.fail {
            return Err(MapperError::Transport("mock property failure".to_string()));
        }
        state.gets += 1;
        Ok(Value::new(state.value))
    }

    fn set_object(&self, value: Value) -> MapperResult<()> {
        let value = value.downcast::<f32>()?;
        let mut state = self.state.lock().expect("failed to lock mock property");
        if state.fail {
            return Err(MapperError::Transport("mock property failure".to_string()));
        }
        state.value = value;
        state.sets.push(value);
        Ok(())
    }

    fn reset(&self) -> MapperResult<()> {
        self.state.lock().expect("failed to lock mock property").resets += 1;
        Ok(())
    }
}
