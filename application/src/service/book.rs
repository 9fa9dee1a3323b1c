use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{BookAuthor, BookId, BookName, BookPublication, NewBook};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetBookDto};

#[async_trait::async_trait]
pub trait CreateBookService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
    /// Validates the draft before the store is touched.
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let book = NewBook::new(
            BookName::new(dto.name),
            BookAuthor::new(dto.author),
            BookPublication::new(dto.publication),
        );
        book.validate()?;

        let mut connection = self.database_connection().transact().await?;
        let created = self.book_modifier().create(&mut connection, &book).await?;

        Ok(BookDto::from(created))
    }
}

impl<Connection: 'static + Send, T> CreateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetAllBookService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let books = self.book_query().find_all(&mut connection).await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<Connection: 'static + Send, T> GetAllBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait GetBookService<Connection: 'static + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let found = self.book_query().find_by_id(&mut connection, &id).await?;
        let book = found.ok_or_else(|| Report::new(KernelError::NotFound { id: dto.id }))?;

        Ok(BookDto::from(book))
    }
}

impl<Connection: 'static + Send, T> GetBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteBookService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    /// Looks the record up before removal and returns the pre-deletion
    /// field values. A missing id is not-found, not a store failure.
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let found = self.book_query().find_by_id(&mut connection, &id).await?;
        let book = found.ok_or_else(|| Report::new(KernelError::NotFound { id: dto.id }))?;

        self.book_modifier().delete(&mut connection, &id).await?;

        Ok(BookDto::from(book))
    }
}

impl<Connection: 'static + Send, T> DeleteBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use std::sync::{Arc, Mutex};

    use error_stack::Report;
    use time::OffsetDateTime;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::{BookQuery, DependOnBookQuery};
    use kernel::interface::update::{BookModifier, DependOnBookModifier};
    use kernel::prelude::entity::{AuditTimes, Book, BookId, NewBook};
    use kernel::KernelError;

    use crate::service::{
        CreateBookService, DeleteBookService, GetAllBookService, GetBookService,
    };
    use crate::transfer::{CreateBookDto, DeleteBookDto, GetBookDto};

    type Shelf = Arc<Mutex<BTreeMap<i64, Book>>>;

    /// In-memory stand-in for the Postgres driver, wired through the same
    /// kernel traits.
    #[derive(Default)]
    struct MockDatabase {
        books: Shelf,
        sequence: Arc<AtomicI64>,
        closed: AtomicBool,
    }

    impl MockDatabase {
        fn close(&self) {
            self.closed.store(true, Ordering::SeqCst);
        }
    }

    struct MockConnection {
        books: Shelf,
        sequence: Arc<AtomicI64>,
    }

    #[async_trait::async_trait]
    impl DatabaseConnection<MockConnection> for MockDatabase {
        async fn transact(&self) -> error_stack::Result<MockConnection, KernelError> {
            if self.closed.load(Ordering::SeqCst) {
                return Err(
                    Report::new(KernelError::Internal).attach_printable("connection closed")
                );
            }
            Ok(MockConnection {
                books: Arc::clone(&self.books),
                sequence: Arc::clone(&self.sequence),
            })
        }
    }

    struct MockBookRepository;

    #[async_trait::async_trait]
    impl BookQuery<MockConnection> for MockBookRepository {
        async fn find_by_id(
            &self,
            con: &mut MockConnection,
            id: &BookId,
        ) -> error_stack::Result<Option<Book>, KernelError> {
            Ok(con.books.lock().unwrap().get(id.as_ref()).cloned())
        }

        async fn find_all(
            &self,
            con: &mut MockConnection,
        ) -> error_stack::Result<Vec<Book>, KernelError> {
            Ok(con.books.lock().unwrap().values().cloned().collect())
        }
    }

    #[async_trait::async_trait]
    impl BookModifier<MockConnection> for MockBookRepository {
        async fn create(
            &self,
            con: &mut MockConnection,
            book: &NewBook,
        ) -> error_stack::Result<Book, KernelError> {
            let id = con.sequence.fetch_add(1, Ordering::SeqCst) + 1;
            let now = OffsetDateTime::now_utc();
            let created = Book::new(
                BookId::new(id),
                book.name().clone(),
                book.author().clone(),
                book.publication().clone(),
                AuditTimes::new(now, now),
            );
            con.books.lock().unwrap().insert(id, created.clone());
            Ok(created)
        }

        async fn delete(
            &self,
            con: &mut MockConnection,
            id: &BookId,
        ) -> error_stack::Result<(), KernelError> {
            con.books.lock().unwrap().remove(id.as_ref());
            Ok(())
        }
    }

    impl DependOnBookQuery<MockConnection> for MockDatabase {
        type BookQuery = MockBookRepository;
        fn book_query(&self) -> &Self::BookQuery {
            &MockBookRepository
        }
    }

    impl DependOnBookModifier<MockConnection> for MockDatabase {
        type BookModifier = MockBookRepository;
        fn book_modifier(&self) -> &Self::BookModifier {
            &MockBookRepository
        }
    }

    fn create_dto(name: &str, author: &str, publication: &str) -> CreateBookDto {
        CreateBookDto {
            name: name.to_string(),
            author: author.to_string(),
            publication: publication.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_positive_ids() {
        let db = MockDatabase::default();

        let first = db
            .create_book(create_dto("Book1", "Author1", "Publication1"))
            .await
            .unwrap();
        let second = db
            .create_book(create_dto("Book2", "Author2", "Publication2"))
            .await
            .unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(first.name, "Book1");
        assert_eq!(first.author, "Author1");
        assert_eq!(first.publication, "Publication1");
    }

    #[tokio::test]
    async fn create_with_empty_field_persists_nothing() {
        let db = MockDatabase::default();

        let invalid = [
            create_dto("", "Author1", "Publication1"),
            create_dto("Book1", "", "Publication1"),
            create_dto("Book1", "Author1", ""),
        ];
        for dto in invalid {
            let report = db.create_book(dto).await.unwrap_err();
            assert!(matches!(report.current_context(), KernelError::Validation));
        }

        assert!(db.get_all_books().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_all_on_empty_store_returns_empty_vec() {
        let db = MockDatabase::default();
        assert_eq!(db.get_all_books().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn created_book_round_trips_by_id() {
        let db = MockDatabase::default();

        let created = db
            .create_book(create_dto("Book1", "Author1", "Publication1"))
            .await
            .unwrap();
        let fetched = db.get_book(GetBookDto { id: created.id }).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn absent_ids_are_not_found() {
        let db = MockDatabase::default();

        let report = db.get_book(GetBookDto { id: 9999 }).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::NotFound { id: 9999 }
        ));

        let report = db
            .delete_book(DeleteBookDto { id: 9999 })
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::NotFound { id: 9999 }
        ));
    }

    #[tokio::test]
    async fn delete_returns_prior_fields_and_removes_the_record() {
        let db = MockDatabase::default();

        let created = db
            .create_book(create_dto("Book1", "Author1", "Publication1"))
            .await
            .unwrap();
        let deleted = db
            .delete_book(DeleteBookDto { id: created.id })
            .await
            .unwrap();
        assert_eq!(deleted, created);

        let report = db.get_book(GetBookDto { id: created.id }).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn closed_store_surfaces_internal_errors() {
        let db = MockDatabase::default();
        db.close();

        let report = db
            .create_book(create_dto("Book1", "Author1", "Publication1"))
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Internal));

        let report = db.get_book(GetBookDto { id: 1 }).await.unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Internal));
    }
}
