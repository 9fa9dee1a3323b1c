mod author;
mod id;
mod name;
mod publication;

pub use self::{author::*, id::*, name::*, publication::*};

use destructure::Destructure;
use error_stack::Report;

use crate::entity::common::AuditTimes;
use crate::KernelError;

/// A book record as persisted in the store. `id` and `times` are assigned
/// by the store on creation and never change afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Destructure)]
pub struct Book {
    id: BookId,
    name: BookName,
    author: BookAuthor,
    publication: BookPublication,
    times: AuditTimes,
}

impl Book {
    pub fn new(
        id: BookId,
        name: BookName,
        author: BookAuthor,
        publication: BookPublication,
        times: AuditTimes,
    ) -> Self {
        Self {
            id,
            name,
            author,
            publication,
            times,
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn name(&self) -> &BookName {
        &self.name
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn publication(&self) -> &BookPublication {
        &self.publication
    }

    pub fn times(&self) -> &AuditTimes {
        &self.times
    }
}

/// A book that has not been persisted yet. Field values come straight from
/// caller input and must pass [`NewBook::validate`] before they reach the
/// store.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NewBook {
    name: BookName,
    author: BookAuthor,
    publication: BookPublication,
}

impl NewBook {
    pub fn new(name: BookName, author: BookAuthor, publication: BookPublication) -> Self {
        Self {
            name,
            author,
            publication,
        }
    }

    pub fn name(&self) -> &BookName {
        &self.name
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn publication(&self) -> &BookPublication {
        &self.publication
    }

    /// Required-field check. `name`, `author` and `publication` must all be
    /// non-empty.
    pub fn validate(&self) -> error_stack::Result<(), KernelError> {
        if self.name.as_ref().is_empty()
            || self.author.as_ref().is_empty()
            || self.publication.as_ref().is_empty()
        {
            return Err(
                Report::new(KernelError::Validation).attach_printable("missing required fields")
            );
        }
        Ok(())
    }
}
