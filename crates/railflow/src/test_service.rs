//! Step functions shared by the unit tests. These stand in for the
//! caller-supplied collaborators of the library: plain functions of shape
//! `input -> Outcome` or `input -> future Outcome`.

use crate::{Error, Nothing, Outcome};

pub(crate) const EMPTY_INPUT: &str = "Input value can't be empty";

pub(crate) fn reverse(input: &str) -> Outcome<String> {
    if input.trim().is_empty() {
        return Error::new(EMPTY_INPUT).into();
    }

    Outcome::success(input.chars().rev().collect())
}

pub(crate) fn upper(input: String) -> Outcome<String> {
    if input.trim().is_empty() {
        return Error::new(EMPTY_INPUT).into();
    }

    Outcome::success(input.to_uppercase())
}

pub(crate) fn consume(input: String) -> Outcome<Nothing> {
    if input.trim().is_empty() {
        return Error::new(EMPTY_INPUT).into();
    }

    Outcome::nothing()
}

pub(crate) async fn reverse_async(input: &str) -> Outcome<String> {
    tokio::task::yield_now().await;
    reverse(input)
}

pub(crate) async fn upper_async(input: String) -> Outcome<String> {
    tokio::task::yield_now().await;
    upper(input)
}

pub(crate) async fn consume_async(input: String) -> Outcome<Nothing> {
    tokio::task::yield_now().await;
    consume(input)
}
