// src/core/sanitize.rs

/// Collapse whitespace runs (incl. NBSP) to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Report cell → positional value. Blank cells and spreadsheet "no value"
/// markers become missing.
pub fn clean_cell(raw: &str) -> Option<String> {
    let v = normalize_ws(raw);
    match v.as_str() {
        "" | "NaN" | "nan" | "NaT" | "None" | "#N/A" => None,
        _ => Some(v),
    }
}
