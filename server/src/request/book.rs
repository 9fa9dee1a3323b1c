use error_stack::Report;
use serde::Deserialize;

use application::transfer::{CreateBookDto, DeleteBookDto, GetBookDto};
use kernel::KernelError;

use crate::controller::{Intake, TryIntake};

// Missing keys decode as empty strings and fall to required-field
// validation, matching the legacy decoder.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    publication: String,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: String,
}

impl GetBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: String,
}

impl DeleteBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

fn parse_id(id: &str) -> error_stack::Result<i64, KernelError> {
    id.parse::<i64>()
        .map_err(|error| Report::new(error).change_context(KernelError::Parse))
}

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            name: input.name,
            author: input.author,
            publication: input.publication,
        }
    }
}

impl TryIntake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: GetBookRequest) -> Result<Self::To, Self::Error> {
        Ok(GetBookDto {
            id: parse_id(&input.id)?,
        })
    }
}

impl TryIntake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: DeleteBookRequest) -> Result<Self::To, Self::Error> {
        Ok(DeleteBookDto {
            id: parse_id(&input.id)?,
        })
    }
}
