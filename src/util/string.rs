pub struct StringUtils {}

impl StringUtils {
    pub fn maybe_pluralize((singular, plural) : (&str, &str), qty: usize) -> String {
        format!("{}", if qty == 1 { singular } else { plural })
    }

    pub fn maybe_pluralize_count(count: usize, (singular, plural) : (&str, &str)) -> String {
        format!("{} {}", count, Self::maybe_pluralize((singular, plural), count))
    }

    /// Cut `text` to at most `max` chars, marking the cut with `…`.
    pub fn truncate(text: &str, max: usize) -> String {
        if text.chars().count() <= max {
            return text.to_string();
        }
        let keep = max.saturating_sub(1);
        let mut out: String = text.chars().take(keep).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_count() {
        assert_eq!(StringUtils::maybe_pluralize_count(1, ("node", "nodes")), "1 node");
        assert_eq!(StringUtils::maybe_pluralize_count(3, ("edge", "edges")), "3 edges");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(StringUtils::truncate("short", 10), "short");
        assert_eq!(StringUtils::truncate("Knowledge Graph", 6), "Knowl…");
    }
}
