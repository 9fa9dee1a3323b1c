use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use application::service::{
    CreateBookService, DeleteBookService, GetAllBookService, GetBookService,
};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{BookTransformer, CreateBookRequest, DeleteBookRequest, GetBookRequest};
use crate::response::{BookPresenter, CreatedBookPresenter};

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books/",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async move { module.pgpool().get_all_books().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 payload: Result<Json<CreateBookRequest>, JsonRejection>| async move {
                    let Json(req) = payload.map_err(ErrorStatus::parse)?;
                    Controller::new(BookTransformer, CreatedBookPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.pgpool().create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(GetBookRequest::new(id))
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| async move { module.pgpool().get_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(DeleteBookRequest::new(id))
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| async move { module.pgpool().delete_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            // Reserved for a future update operation.
            .put(|Path(_id): Path<String>| async { StatusCode::OK }),
        )
    }
}
