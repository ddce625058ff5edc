use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug)]
pub struct ContactName(String);

impl ContactName {
    /// Returns `ContactName` only if the input satisfies every constraint
    /// on the name field, an error message otherwise.
    pub fn parse(s: String) -> Result<ContactName, String> {
        let is_empty_or_whitespace = s.trim().is_empty();

        // A grapheme is a "user-perceived" character, which may be composed
        // of several bytes
        let is_too_long = s.graphemes(true).count() > 256;

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters = s
            .chars()
            .any(|c| forbidden_characters.contains(&c));

        if is_empty_or_whitespace || is_too_long || contains_forbidden_characters {
            Err(format!("{} is not a valid contact name.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
