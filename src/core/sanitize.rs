// src/core/sanitize.rs

/// Make a character name safe as a file-name component.
/// Path separators and characters Windows rejects become `_`; spaces,
/// parentheses and hyphens are kept ("Spider-Man (Peter Parker)").
pub fn sanitize_file_component(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => out.push('_'),
            c if c.is_control() => out.push('_'),
            c => out.push(c),
        }
    }
    let out = out.trim_matches(|c: char| c == '.' || c.is_whitespace()).to_string();
    if out.is_empty() { s!("character") } else { out }
}

/// Collapse runs of whitespace into one space and trim.
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
