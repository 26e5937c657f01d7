//! Canonical record types

mod book;

pub use book::BookRecord;
