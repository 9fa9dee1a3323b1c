use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub publication: String,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            name,
            author,
            publication,
            ..
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            author: author.into(),
            publication: publication.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookDto {
    pub name: String,
    pub author: String,
    pub publication: String,
}

#[derive(Debug)]
pub struct GetBookDto {
    pub id: i64,
}

#[derive(Debug)]
pub struct DeleteBookDto {
    pub id: i64,
}
