/// Lowercase the first character of a member name.
///
/// `ID` is special-cased to `id`; every other name only has its first
/// character lowered.
///
/// # Examples
/// ```
/// use typebridge_core::utils::to_camel_case;
/// assert_eq!(to_camel_case("CustomerName"), "customerName");
/// assert_eq!(to_camel_case("ID"), "id");
/// assert_eq!(to_camel_case("IDList"), "iDList");
/// ```
pub fn to_camel_case(s: &str) -> String {
    if s == "ID" {
        return "id".to_string();
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip a CLR arity suffix: ``List`1`` becomes `List`.
pub fn strip_arity(name: &str) -> &str {
    name.split('`').next().unwrap_or(name)
}

/// Split a full name into namespace and simple name at the last dot.
///
/// Dots inside a generic argument list are ignored.
///
/// # Examples
/// ```
/// use typebridge_core::utils::split_full_name;
/// assert_eq!(split_full_name("System.Collections.List`1"), ("System.Collections", "List`1"));
/// assert_eq!(split_full_name("Widget"), ("", "Widget"));
/// ```
pub fn split_full_name(full_name: &str) -> (&str, &str) {
    let head = full_name.find('<').map_or(full_name, |i| &full_name[..i]);
    match head.rfind('.') {
        Some(dot) => (&full_name[..dot], &full_name[dot + 1..]),
        None => ("", full_name),
    }
}

/// Strip the first matching suffix from a namespace.
pub fn strip_namespace_suffix<'a>(namespace: &'a str, suffixes: &[String]) -> &'a str {
    suffixes
        .iter()
        .find_map(|suffix| namespace.strip_suffix(suffix.as_str()))
        .filter(|stripped| !stripped.is_empty())
        .unwrap_or(namespace)
}
