/// URL-safe identifier for catalog entries.
/// Only ASCII letters, digits, hyphens and underscores are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Validates an explicit slug. Returns `None` when it is empty or holds
    /// characters outside `[-a-zA-Z0-9_]`.
    pub fn parse(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let valid = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then_some(Self(value))
    }

    /// Derives a slug from a display name: lowercased, runs of anything that
    /// is not alphanumeric collapsed into a single hyphen.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut slug = String::with_capacity(name.len());
        let mut pending_hyphen = false;

        for c in name.trim().chars() {
            if c.is_ascii_alphanumeric() || c == '_' {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(c.to_ascii_lowercase());
            } else {
                pending_hyphen = true;
            }
        }

        Self::parse(slug)
    }

    /// Explicit slug when given, otherwise one derived from `name`.
    pub fn resolve(explicit: Option<String>, name: &str) -> Option<Self> {
        match explicit {
            Some(slug) => Self::parse(slug),
            None => Self::from_name(name),
        }
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_valid_slug() {
        let slug = Slug::parse("green-tea_2").unwrap();
        assert_eq!(slug.as_str(), "green-tea_2");
    }

    #[test]
    fn should_reject_empty_slug() {
        assert!(Slug::parse("").is_none());
    }

    #[test]
    fn should_reject_slug_with_spaces_or_symbols() {
        assert!(Slug::parse("green tea").is_none());
        assert!(Slug::parse("tea/leaves").is_none());
        assert!(Slug::parse("thé").is_none());
    }

    #[test]
    fn should_derive_slug_from_name() {
        let slug = Slug::from_name("  Red Tea & Biscuits!! ").unwrap();
        assert_eq!(slug.as_str(), "red-tea-biscuits");
    }

    #[test]
    fn should_not_derive_slug_from_symbols_only() {
        assert!(Slug::from_name("!!! ???").is_none());
    }

    #[test]
    fn should_prefer_explicit_slug_when_resolving() {
        let slug = Slug::resolve(Some("custom".to_string()), "Green Tea").unwrap();
        assert_eq!(slug.as_str(), "custom");

        let derived = Slug::resolve(None, "Green Tea").unwrap();
        assert_eq!(derived.as_str(), "green-tea");
    }

    #[test]
    fn should_display_slug() {
        let slug = Slug::parse("tea").unwrap();
        assert_eq!(format!("{}", slug), "tea");
    }
}
