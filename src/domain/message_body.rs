use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn parse(s: String) -> Result<MessageBody, String> {
        if s.trim().is_empty() {
            return Err("A message cannot be empty.".to_string());
        }

        if s.graphemes(true).count() > 5000 {
            return Err("A message cannot be longer than 5000 characters.".to_string());
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
