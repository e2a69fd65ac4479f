//! Anchor slugs for heading ids and table-of-contents links.

/// Generates an anchor slug from markup-free heading text.
///
/// Lowercases the text, drops every character other than ASCII letters,
/// digits, whitespace and `-`, then turns each whitespace run into a single
/// `-`. Existing hyphens are kept as they are and leading/trailing hyphens
/// are not trimmed; the table of contents and the heading ids both rely on
/// this exact output. Colliding slugs are not disambiguated.
///
/// # Examples
///
/// ```
/// use biobasics_wiki_engine::parsing::slug::slugify;
///
/// assert_eq!(slugify("Heart Attacks"), "heart-attacks");
/// assert_eq!(slugify("What is Angina?"), "what-is-angina");
/// assert_eq!(slugify("Type 2 - Diabetes"), "type-2---diabetes");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug
}
