//! Blank-aware field helpers shared by the prompt compilers.

/// A trimmed view of an optional field, or `None` when absent or blank.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Trimmed non-blank items of a list, or `None` when nothing remains.
pub(crate) fn non_blank_list(values: &[String]) -> Option<Vec<&str>> {
    let items: Vec<&str> =
        values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()).collect();
    if items.is_empty() { None } else { Some(items) }
}

/// Render a labeled bulleted list block.
pub(crate) fn bulleted(label: &str, items: &[&str]) -> String {
    let mut block = format!("{label}:");
    for item in items {
        block.push_str("\n- ");
        block.push_str(item);
    }
    block
}

/// Render a `## TITLE` section. Callers only pass non-empty bodies.
pub(crate) fn section(title: &str, body: &str) -> String {
    format!("## {title}\n{body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_rejects_whitespace_only() {
        assert_eq!(non_blank(&Some("  ".to_string())), None);
        assert_eq!(non_blank(&Some(" valor ".to_string())), Some("valor"));
        assert_eq!(non_blank(&None), None);
    }

    #[test]
    fn non_blank_list_drops_blank_items() {
        let values = vec!["a".to_string(), "  ".to_string(), " b ".to_string()];
        assert_eq!(non_blank_list(&values), Some(vec!["a", "b"]));
        assert_eq!(non_blank_list(&[" ".to_string()]), None);
    }

    #[test]
    fn bulleted_renders_one_line_per_item() {
        assert_eq!(bulleted("Dores", &["a", "b"]), "Dores:\n- a\n- b");
    }
}
