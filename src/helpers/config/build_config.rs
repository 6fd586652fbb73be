use super::*;

/// Get the configuration from the default TOML file (if present) and the process arguments.
pub fn build_config() -> Result<MasterConfig, Box<dyn Error>> {
    build_config_with(std::env::args().collect(), real_filesystem())
}

/// Entries set on the command line override the same entries set in the TOML file.
pub fn build_config_with(
    args: Vec<String>,
    fs: Filesystem,
) -> Result<MasterConfig, Box<dyn Error>> {
    let mut builder = ConfigBuilder::new(config_entries());
    if fs.is_file(DEFAULT_TOML_PATH) {
        load_toml(DEFAULT_TOML_PATH, &mut builder, fs)?;
    }
    parse_args(&mut builder, args)?;
    let mut conf = MasterConfig::default();
    builder.apply_to(&mut conf)?;
    if conf.happy_exit {
        println!("{}", builder.help_text());
    }
    Ok(conf)
}
