use crate::binding::Binding;
use anyhow::Context;
use std::fs;

/// Parse a binding-list file (one binding per line) into bindings.
///
/// Blank lines and `#` comments are skipped. Order and duplicates are kept.
///
/// Example:
/// # restyle marker.size
/// data[0].marker.size
/// data[1].marker.size
pub fn parse_binding_file(path: &str) -> anyhow::Result<Vec<Binding>> {
    let text = fs::read_to_string(path).with_context(|| format!("read binding file {}", path))?;
    parse_bindings(&text, path)
}

/// Parse binding lines from `text`; `origin` names the source in errors.
pub fn parse_bindings(text: &str, origin: &str) -> anyhow::Result<Vec<Binding>> {
    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let binding: Binding = line
            .parse()
            .with_context(|| format!("binding parse error at {}:{}", origin, lno))?;
        out.push(binding);
    }

    Ok(out)
}
