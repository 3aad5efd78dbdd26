use super::*;

/// Get the current configuration. `args` includes the program name, as given by std::env::args().
pub fn build_config(args: Vec<String>) -> Result<MasterConfig, Box<dyn Error>> {
    build_config_with(real_filesystem(), &stdout_console(), args)
}

/// Like build_config(), but with the filesystem mocked out and help printed to the given console
pub fn build_config_with(
    fs: Filesystem,
    console: &Console,
    args: Vec<String>,
) -> Result<MasterConfig, Box<dyn Error>> {
    let mut builder = ConfigBuilder::new(config_entries());
    if fs.is_file(DEFAULT_TOML_PATH) {
        debug!("loading configuration from {}", DEFAULT_TOML_PATH);
        load_toml(DEFAULT_TOML_PATH, &mut builder, fs)?;
    }
    parse_args(&mut builder, args)?;
    let mut conf = MasterConfig::default();
    builder.apply_to(&mut conf)?;
    if conf.happy_exit {
        for line in builder.help_text().lines() {
            console.print_line(line);
        }
    }
    debug!("configuration: {:?}", conf);
    Ok(conf)
}
