#![deny(rust_2018_idioms, unused, unused_import_braces, unused_qualifications, warnings)]

use {
    std::io::{
        self,
        prelude::*
    },
    derive_more::From
};

pub mod card;
pub mod render;

pub use crate::card::Card;

/// Endpoint returning one uniformly random card as a single JSON object.
pub const RANDOM_CARD_URL: &'static str = "https://api.scryfall.com/cards/random";

#[derive(Debug, From)]
pub enum Error {
    #[from(ignore)]
    Annotated(String, Box<Error>),
    Io(io::Error),
    Json(serde_json::Error),
    Reqwest(reqwest::Error)
}

pub trait IntoResultExt {
    type T;

    fn annotate(self, note: impl ToString) -> Self::T;
}

impl<E: Into<Error>> IntoResultExt for E {
    type T = Error;

    fn annotate(self, note: impl ToString) -> Error {
        Error::Annotated(note.to_string(), Box::new(self.into()))
    }
}

impl<T, E: IntoResultExt> IntoResultExt for Result<T, E> {
    type T = Result<T, E::T>;

    fn annotate(self, note: impl ToString) -> Result<T, E::T> {
        self.map_err(|e| e.annotate(note))
    }
}

/// Decodes a card-API response body. Fields absent from the body keep their type's default value.
pub fn parse_card(body: &str) -> Result<Card, Error> {
    Ok(serde_json::from_str(body)?)
}

/// Requests a single card record from the given URL, blocking until the response arrives.
///
/// Any non-2xx status is reported as an error. The response body is read to completion
/// and the response dropped on every exit path, releasing the connection.
pub fn fetch_card(url: &str) -> Result<Card, Error> {
    let mut response = reqwest::get(url)?.error_for_status()?;
    let mut body = String::default();
    response.read_to_string(&mut body).annotate("fetch_card")?;
    parse_card(&body)
}
