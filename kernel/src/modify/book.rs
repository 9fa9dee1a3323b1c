use crate::entity::{Book, BookId, NewBook};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier<Connection: 'static + Send>: 'static + Sync + Send {
    /// Inserts a validated draft. The store assigns the id and audit
    /// timestamps; the persisted record is returned.
    async fn create(
        &self,
        con: &mut Connection,
        book: &NewBook,
    ) -> error_stack::Result<Book, KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier<Connection: 'static + Send>: 'static + Sync + Send {
    type BookModifier: BookModifier<Connection>;
    fn book_modifier(&self) -> &Self::BookModifier;
}
