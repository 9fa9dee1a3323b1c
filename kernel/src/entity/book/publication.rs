#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookPublication(String);

impl BookPublication {
    pub fn new(publication: impl Into<String>) -> Self {
        Self(publication.into())
    }
}

impl AsRef<str> for BookPublication {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BookPublication> for String {
    fn from(value: BookPublication) -> Self {
        value.0
    }
}
