// src/core/html.rs
// Tolerant scanning of inline style declarations inside a markup fragment.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Values of every `property: value` declaration in `fragment`, in document
/// order. Case-insensitive on the property name; the value runs up to the
/// next `;`, quote, `}` or `>`.
pub fn declaration_values(fragment: &str, property: &str) -> Vec<String> {
    let lc = to_lower(fragment);
    let prop = to_lower(property);
    let mut out = Vec::new();
    let mut from = 0usize;

    while let Some(rel) = lc.get(from..).and_then(|rest| rest.find(&prop)) {
        let start = from + rel;
        let after = start + prop.len();
        from = after;

        // must be a whole property name, e.g. not "-webkit-background-color-x"
        let boundary_ok = lc[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '-'));
        if !boundary_ok {
            continue;
        }

        let rest = lc[after..].trim_start();
        let Some(value) = rest.strip_prefix(':') else { continue };
        let end = value
            .find(|c: char| matches!(c, ';' | '"' | '\'' | '}' | '>'))
            .unwrap_or(value.len());
        let v = value[..end].trim();
        if !v.is_empty() {
            out.push(v.to_string());
        }
    }
    out
}
