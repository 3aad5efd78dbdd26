use std::any::type_name;

/// The name of T without its module path or generic arguments, for log messages
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let name = type_name::<T>();
    let end = name.find('<').unwrap_or(name.len());
    let start = name[..end].rfind(':').map(|i| i + 1).unwrap_or(0);
    &name[start..end]
}
