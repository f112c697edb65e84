//! Small string helpers shared by the projections and list screens.

/// Join the non-blank parts with `separator`, trimming each part.
pub fn join_non_empty<'a, I>(parts: I, separator: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Case-insensitive substring match over several fields.
pub fn any_contains(fields: &[&str], filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Distinct `{{placeholder}}` names in order of first appearance.
pub fn extract_placeholders(template: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let name = after[..end].trim();
        if !name.is_empty() && !found.iter().any(|f| f == name) {
            found.push(name.to_string());
        }
        rest = &after[end + 2..];
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_non_empty() {
        assert_eq!(join_non_empty(["a", " ", "b ", ""], ", "), "a, b");
        assert_eq!(join_non_empty(Vec::<&str>::new(), ", "), "");
    }

    #[test]
    fn test_extract_placeholders() {
        let body = "Hi {{ customer_name }}, your bill of {{amount}} is due {{due_date}}. {{amount}}";
        assert_eq!(
            extract_placeholders(body),
            vec!["customer_name", "amount", "due_date"]
        );
        assert!(extract_placeholders("no tokens {{ unterminated").is_empty());
    }

    #[test]
    fn test_any_contains() {
        assert!(any_contains(&["Juan Dela Cruz", "0917"], "dela"));
        assert!(!any_contains(&["Juan"], "maria"));
        assert!(any_contains(&["x"], "  "));
    }
}
