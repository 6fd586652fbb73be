use super::*;

/// A type a configuration entry can hold, along with how to read it from each source
pub trait ConfigValue: Clone + 'static {
    const KIND: &'static str;
    fn from_toml(value: &toml::Value) -> Option<Self>;
    /// None means the argument was given without a value (`--flag`)
    fn from_arg(arg: Option<&str>) -> Option<Self>;
}

impl ConfigValue for bool {
    const KIND: &'static str = "bool";

    fn from_toml(value: &toml::Value) -> Option<Self> {
        value.as_bool()
    }

    fn from_arg(arg: Option<&str>) -> Option<Self> {
        match arg {
            None | Some("true") => Some(true),
            Some("false") => Some(false),
            Some(_) => None,
        }
    }
}

impl ConfigValue for String {
    const KIND: &'static str = "string";

    fn from_toml(value: &toml::Value) -> Option<Self> {
        value.as_str().map(ToOwned::to_owned)
    }

    fn from_arg(arg: Option<&str>) -> Option<Self> {
        arg.map(ToOwned::to_owned)
    }
}

impl ConfigValue for i64 {
    const KIND: &'static str = "int";

    fn from_toml(value: &toml::Value) -> Option<Self> {
        value.as_integer()
    }

    fn from_arg(arg: Option<&str>) -> Option<Self> {
        arg.and_then(|s| s.parse().ok())
    }
}

impl ConfigValue for f64 {
    const KIND: &'static str = "float";

    fn from_toml(value: &toml::Value) -> Option<Self> {
        match value {
            toml::Value::Float(f) => Some(*f),
            toml::Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    fn from_arg(arg: Option<&str>) -> Option<Self> {
        arg.and_then(|s| s.parse().ok())
    }
}

pub trait ConfigEntry {
    fn name(&self) -> &str;
    fn help(&self) -> &str;
    fn kind(&self) -> &'static str;
    fn set_from_toml(&mut self, value: &toml::Value, source: String)
        -> Result<(), Box<dyn Error>>;
    fn set_from_arg(&mut self, value: Option<&str>, source: String) -> Result<(), Box<dyn Error>>;
    fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>>;
}

type ApplyFn<T> = Box<dyn Fn(&mut MasterConfig, T, Option<&str>) -> Result<(), Box<dyn Error>>>;

impl dyn ConfigEntry {
    /// The apply function gets the value and, if it was not the default, a description of where
    /// it was set (for error messages).
    pub fn new<T, F>(name: &str, help: &str, default_value: T, apply: F) -> Box<Self>
    where
        T: ConfigValue,
        F: Fn(&mut MasterConfig, T, Option<&str>) -> Result<(), Box<dyn Error>> + 'static,
    {
        Box::new(ConfigEntryImpl {
            name: name.to_string(),
            help: help.to_string(),
            value: default_value,
            source: None,
            apply_fn: Box::new(apply),
        })
    }

    /// A string entry restricted to the names of the given variants. The first variant is the
    /// default.
    pub fn new_enum(name: &str, help: &str, variants: Vec<ConfigEntryVariant>) -> Box<Self> {
        assert!(!variants.is_empty());
        let mut help = help.to_string();
        for variant in &variants {
            help.push_str(&format!("\n    {}: {}", variant.name, variant.help))
        }
        let default_value = variants[0].name.clone();
        <dyn ConfigEntry>::new(name, &help, default_value, move |conf, value, source| {
            match variants.iter().find(|variant| variant.name == value) {
                Some(variant) => {
                    (variant.apply_fn)(conf);
                    Ok(())
                }
                None => Err(format!(
                    "{} has invalid value {}, valid options are {}",
                    source.unwrap_or("default"),
                    value,
                    variants
                        .iter()
                        .map(|v| v.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                )
                .into()),
            }
        })
    }

    pub fn new_enum_variant<F: Fn(&mut MasterConfig) + 'static>(
        name: &str,
        help: &str,
        apply: F,
    ) -> ConfigEntryVariant {
        ConfigEntryVariant {
            name: name.to_string(),
            help: help.to_string(),
            apply_fn: Box::new(apply),
        }
    }
}

pub struct ConfigEntryVariant {
    pub name: String,
    pub help: String,
    pub apply_fn: Box<dyn Fn(&mut MasterConfig)>,
}

struct ConfigEntryImpl<T> {
    name: String,
    help: String,
    value: T,
    /// Some if the value is not default, describes how it was set
    source: Option<String>,
    apply_fn: ApplyFn<T>,
}

impl<T: ConfigValue> ConfigEntry for ConfigEntryImpl<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn help(&self) -> &str {
        &self.help
    }

    fn kind(&self) -> &'static str {
        T::KIND
    }

    fn set_from_toml(
        &mut self,
        value: &toml::Value,
        source: String,
    ) -> Result<(), Box<dyn Error>> {
        match T::from_toml(value) {
            Some(v) => {
                self.value = v;
                self.source = Some(source);
                Ok(())
            }
            None => Err(format!(
                "{} is not valid for {} (expected: {})",
                value,
                self.name,
                T::KIND
            )
            .into()),
        }
    }

    fn set_from_arg(&mut self, value: Option<&str>, source: String) -> Result<(), Box<dyn Error>> {
        match (T::from_arg(value), value) {
            (Some(v), _) => {
                self.value = v;
                self.source = Some(source);
                Ok(())
            }
            (None, Some(value)) => Err(format!(
                "{} is not valid for {} (expected: {})",
                value,
                source,
                T::KIND
            )
            .into()),
            (None, None) => Err(format!("{} argument is required for {}", T::KIND, source).into()),
        }
    }

    fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>> {
        (self.apply_fn)(target, self.value.clone(), self.source.as_deref())
    }
}

pub struct ConfigBuilder {
    entries: Vec<Box<dyn ConfigEntry>>,
}

impl ConfigBuilder {
    pub fn new(entries: Vec<Box<dyn ConfigEntry>>) -> Self {
        let mut names = std::collections::HashSet::new();
        for entry in &entries {
            if !names.insert(entry.name().to_string()) {
                panic!("duplicate configuration entry {}", entry.name());
            }
        }
        Self { entries }
    }

    pub fn entry(&mut self, name: &str) -> Option<&mut Box<dyn ConfigEntry>> {
        self.entries.iter_mut().find(|entry| entry.name() == name)
    }

    pub fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>> {
        for entry in &self.entries {
            entry
                .apply_to(target)
                .map_err(|e| format!("{} configuration option: {}", entry.name(), e))?;
        }
        Ok(())
    }

    pub fn help_text(&self) -> String {
        let mut text = String::from("options (set in TOML or as --option-name on the command line):");
        for entry in &self.entries {
            text.push_str(&format!(
                "\n  {} ({}): {}",
                entry.name(),
                entry.kind(),
                entry.help()
            ));
        }
        text
    }
}
