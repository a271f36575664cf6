//! Shared naming functions for type generation.

/// UID of the built-in account content type provided by the users-permissions plugin.
pub const USER_UID: &str = "plugin::users-permissions.user";

/// Convert a string to PascalCase (e.g., "blog-post" -> "BlogPost").
///
/// Each run of ASCII letters becomes one word; everything else is a separator
/// and is dropped. Words are capitalized and the rest of each word is lowercased.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => std::iter::once(c.to_ascii_uppercase())
                    .chain(chars.map(|c| c.to_ascii_lowercase()))
                    .collect(),
            }
        })
        .collect()
}

/// Get the last dot-separated segment of a UID (e.g., "api::article.article" -> "article").
pub fn last_segment(uid: &str) -> &str {
    uid.rsplit('.').next().unwrap_or(uid)
}

/// Resolve the generated type name for a content-type or component UID.
pub fn type_name_from_uid(uid: &str) -> String {
    if uid == USER_UID {
        return "User".to_string();
    }
    to_pascal_case(last_segment(uid))
}
