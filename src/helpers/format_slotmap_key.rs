use std::fmt::Formatter;

/// Writes a key as `name#index:version`, or `name#null` for the null key
pub fn format_slotmap_key<T: slotmap::Key>(
    f: &mut Formatter,
    type_name: &str,
    key: T,
) -> std::fmt::Result {
    if !key.is_null() {
        let raw_id = key.data().as_ffi();
        // Relies on slotmap packing the version into the high bits
        let version = raw_id >> 32;
        let index = (raw_id << 32) >> 32;
        write!(f, "{}#{}:{}", type_name, index, version)
    } else {
        write!(f, "{}#null", type_name)
    }
}
