use super::*;

pub const DEFAULT_TOML_PATH: &str = "pattern_pages.toml";

fn try_set(
    builder: &mut ConfigBuilder,
    file: &str,
    name: &str,
    value: toml::Value,
) -> Result<(), Box<dyn Error>> {
    if let Some(mut setter) = builder.entry(name) {
        let message = format!("{} in {}", name, file);
        match &mut setter {
            ConfigEntrySetter::Bool(ref mut s) => {
                if let toml::Value::Boolean(v) = value {
                    return s(v, message);
                }
            }
            ConfigEntrySetter::String(ref mut s) => match value {
                toml::Value::String(v) => return s(v, message),
                // Lists are accepted for the comma separated entries
                toml::Value::Array(ref items) => {
                    let strings: Option<Vec<&str>> = items.iter().map(|i| i.as_str()).collect();
                    if let Some(strings) = strings {
                        return s(strings.join(","), message);
                    }
                }
                _ => (),
            },
            ConfigEntrySetter::Float(ref mut s) => match value {
                toml::Value::Float(v) => return s(v, message),
                toml::Value::Integer(v) => return s(v as f64, message),
                _ => (),
            },
        }
        Err(format!("{} is not valid for {} (expected: {})", value, name, setter).into())
    } else {
        Err(format!("{} is not a valid option", name).into())
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
            for (name, value) in table {
                try_set(builder, path, &name, value).map_err(|e| format!("{}: {}", path, e))?;
            }
            Ok(())
        }
        _ => Err(format!("toplevel value of {} is not a table", path).into()),
    }
}
