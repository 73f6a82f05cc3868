/// Wrap a value in single quotes, escaping what would break the literal
///
/// `</` becomes `<\/` so the literal cannot close an inline `<script>`.
pub fn quote_single(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    let mut previous = None;
    for ch in value.chars() {
        match ch {
            '/' if previous == Some('<') => quoted.push_str("\\/"),
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(ch),
        }
        previous = Some(ch);
    }
    quoted.push('\'');
    quoted
}

/// True when the text is empty or only whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
