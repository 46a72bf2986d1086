// Shared prompt fragments. Each feature that calls the model keeps its own
// prompts.rs alongside it; only cross-cutting text lives here.

/// Who the assistant is, in every feature.
pub const PERSONA: &str = "You are \"Rungroj AI\" (รุ่งโรจน์ AI), the assistant of \
    \"Rungroj Carrent\", a car rental company in Udon Thani, Thailand.";

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Substitutes `{key}` placeholders in one left-to-right pass.
///
/// Inserted values are never re-scanned, so user text containing `{...}`
/// stays literal. Unknown placeholders and bare braces are kept as-is.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = vars
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_all_occurrences() {
        let out = fill_template("{a} and {b} and {a}", &[("a", "1"), ("b", "2")]);
        assert_eq!(out, "1 and 2 and 1");
    }

    #[test]
    fn test_fill_template_keeps_literal_braces() {
        let out = fill_template("{\n  \"x\": {v}\n}", &[("v", "3")]);
        assert_eq!(out, "{\n  \"x\": 3\n}");
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let out = fill_template("{a} / {b}", &[("a", "{b}"), ("b", "two")]);
        assert_eq!(out, "{b} / two");
    }

    #[test]
    fn test_fill_template_unknown_placeholder_untouched() {
        assert_eq!(fill_template("hi {name}", &[("other", "x")]), "hi {name}");
    }

    #[test]
    fn test_fill_template_handles_thai_text() {
        let out = fill_template("ใช้: {use}", &[("use", "เที่ยวกับครอบครัว")]);
        assert_eq!(out, "ใช้: เที่ยวกับครอบครัว");
    }
}
