//! Entity <-> model mappers

mod comment;
mod profile;
mod reaction;
