//! Train timetable search.
//!
//! A console program that answers: "which trains run from this station
//! to that one, and which are the cheapest or the earliest?"

pub mod console;
pub mod domain;
pub mod query;
pub mod search;
pub mod store;
