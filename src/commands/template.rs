//! `$name` placeholder substitution for external command arguments.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ConvertError, Result};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\$(?:(?P<escaped>\$)",
        r"|(?P<named>[_A-Za-z][_A-Za-z0-9]*)",
        r"|\{(?P<braced>[_A-Za-z][_A-Za-z0-9]*)\}",
        r"|(?P<invalid>))",
    ))
    .unwrap()
});

/// Substitutes `$name` and `${name}` placeholders; `$$` yields `$`.
///
/// Unknown names and a `$` not starting a placeholder are errors.
pub fn render_template(template: &str, context: &[(&str, &str)]) -> Result<String> {
    let error = |message: String| ConvertError::Template {
        template: template.to_string(),
        message,
    };

    let mut rendered = String::with_capacity(template.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        rendered.push_str(&template[last..whole.start()]);
        last = whole.end();

        if caps.name("escaped").is_some() {
            rendered.push('$');
            continue;
        }
        let name = match caps.name("named").or_else(|| caps.name("braced")) {
            Some(m) => m.as_str(),
            None => return Err(error(format!("invalid placeholder at offset {}", whole.start()))),
        };
        let value = context
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| error(format!("unknown placeholder '{}'", name)))?;
        rendered.push_str(value);
    }
    rendered.push_str(&template[last..]);

    Ok(rendered)
}
