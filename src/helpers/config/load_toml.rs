use super::*;

pub const DEFAULT_TOML_PATH: &str = "scene_mapper.toml";

fn try_set(
    builder: &mut ConfigBuilder,
    file: &str,
    name: &str,
    value: &toml::Value,
) -> Result<(), Box<dyn Error>> {
    match builder.entry(name) {
        Some(entry) => entry.set_from_toml(value, format!("{} in {}", name, file)),
        None => Err(format!("{} is not a valid option", name).into()),
    }
}

pub fn load_toml(
    path: &str,
    builder: &mut ConfigBuilder,
    fs: Filesystem,
) -> Result<(), Box<dyn Error>> {
    let contents = fs.read_to_string(path)?;
    let parsed = contents.parse::<toml::Value>()?;
    match parsed {
        toml::Value::Table(table) => {
            for (name, value) in &table {
                try_set(builder, path, name, value).map_err(|e| format!("{}: {}", path, e))?;
            }
            Ok(())
        }
        _ => Err(format!("toplevel value of {} is not a table", path).into()),
    }
}
