use super::*;

type Getter = Arc<dyn Fn(&dyn Component) -> MapperResult<Value> + Send + Sync>;
type Setter = Arc<dyn Fn(&mut dyn Component, Value) -> MapperResult<()> + Send + Sync>;
type DefaultFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Describes one data member of a component type for generic extraction. Components publish a
/// table of these from `Component::members()`, in place of runtime reflection.
#[derive(Clone, derivative::Derivative)]
#[derivative(Debug)]
pub struct Member {
    name: String,
    declaring_type: &'static str,
    value_type: ValueType,
    vector_length: usize,
    public: bool,
    exposed: bool,
    ignored: bool,
    units: Option<String>,
    bounds: Option<Bounds>,
    enforce_bounds: bool,
    #[derivative(Debug = "ignore")]
    default: Option<DefaultFn>,
    #[derivative(Debug = "ignore")]
    getter: Getter,
    #[derivative(Debug = "ignore")]
    setter: Setter,
}

impl Member {
    /// A public field of component type `T` holding a `V`. The getter and setter stand in for
    /// direct field access.
    pub fn field<T, V, G, S>(name: &str, get: G, set: S) -> Self
    where
        T: Component,
        V: Any + Send,
        G: Fn(&T) -> V + Send + Sync + 'static,
        S: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let getter: Getter = Arc::new(move |component: &dyn Component| {
            let target = downcast_component::<T>(component)?;
            Ok(Value::new(get(target)))
        });
        let setter: Setter = Arc::new(move |component: &mut dyn Component, value: Value| {
            let target = downcast_component_mut::<T>(component)?;
            set(target, value.downcast::<V>()?);
            Ok(())
        });
        Self {
            name: name.to_string(),
            declaring_type: short_type_name::<T>(),
            value_type: ValueType::of::<V>(),
            vector_length: 1,
            public: true,
            exposed: false,
            ignored: false,
            units: None,
            bounds: None,
            enforce_bounds: false,
            default: None,
            getter,
            setter,
        }
    }

    /// Marks the member as not public. Private members are skipped unless also `exposed()`.
    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }

    /// Explicitly opts a private member in to extraction
    pub fn exposed(mut self) -> Self {
        self.exposed = true;
        self
    }

    /// Excludes the member from generic extraction regardless of visibility
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    pub fn units(mut self, units: &str) -> Self {
        self.units = Some(units.to_string());
        self
    }

    pub fn bounds(mut self, min: f32, max: f32) -> Self {
        self.bounds = Some(Bounds::new(min, max));
        self
    }

    pub fn enforce_bounds(mut self) -> Self {
        self.enforce_bounds = true;
        self
    }

    /// Length of array members
    pub fn vector_length(mut self, length: usize) -> Self {
        self.vector_length = length;
        self
    }

    /// Value written back when the property is reset
    pub fn with_default<V: Any + Send + Sync + Clone>(mut self, value: V) -> Self {
        self.default = Some(Arc::new(move || Value::new(value.clone())));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declaring_type(&self) -> &'static str {
        self.declaring_type
    }

    /// "<DeclaringType>/<member>"
    pub fn property_name(&self) -> String {
        format!("{}/{}", self.declaring_type, self.name)
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn get_vector_length(&self) -> usize {
        self.vector_length
    }

    pub fn get_units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    pub fn get_bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn enforces_bounds(&self) -> bool {
        self.enforce_bounds
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Public or explicitly exposed, and not ignored
    pub fn is_eligible(&self) -> bool {
        !self.ignored && (self.public || self.exposed)
    }

    pub fn default_value(&self) -> Option<Value> {
        self.default.as_ref().map(|f| f())
    }

    pub fn read(&self, component: &dyn Component) -> MapperResult<Value> {
        (self.getter)(component)
    }

    pub fn write(&self, component: &mut dyn Component, value: Value) -> MapperResult<()> {
        (self.setter)(component, value)
    }
}
