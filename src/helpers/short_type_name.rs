use std::any::type_name;

/// The last path segment of a type name without generic arguments, used as the declaring type in
/// generated property names ("Lamp" for `my_game::props::Lamp<f32>`).
pub fn short_type_name<T: ?Sized>() -> &'static str {
    trim_type_name(type_name::<T>())
}

pub(crate) fn trim_type_name(name: &'static str) -> &'static str {
    let end = name.find('<').unwrap_or(name.len());
    let start = name[..end].rfind(':').map(|i| i + 1).unwrap_or(0);
    &name[start..end]
}
