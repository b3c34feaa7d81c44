//! Markup naming conventions.

/// Convert a PascalCase identifier to lower-hyphenated markup form.
///
/// A hyphen is inserted before every uppercase letter that directly follows a
/// lowercase letter or a digit, then the whole string is lowercased:
/// `AutoCompleteBox` → `auto-complete-box`, `Item2Value` → `item2-value`.
pub fn to_lower_hyphen(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for ch in name.chars() {
        if ch.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
        {
            out.push('-');
        }
        out.extend(ch.to_lowercase());
        prev = Some(ch);
    }
    out
}

/// Strip a trailing `suffix` compared case-insensitively (ASCII).
///
/// A name equal to the suffix is left untouched so the convention never
/// produces an empty tag name.
pub fn strip_convention_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() || name.len() <= suffix.len() {
        return name;
    }
    let split = name.len() - suffix.len();
    match name.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(suffix) => &name[..split],
        _ => name,
    }
}

/// Last segment of a dotted qualified name.
pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}
