//! Database schema and queries
//!
//! Loads return `Option<T>`; absence is the caller's decision. Updates and
//! deletes of a missing row return `Error::NotFound`. Every mutation runs in
//! its own transaction, rolled back when dropped without commit.

pub mod artists;
pub mod init;
pub mod models;
pub mod shows;
pub mod venues;

pub use init::init_database;
pub use models::*;

/// Escape `%`, `_` and the escape character itself so a search term matches
/// literally inside `LIKE ... ESCAPE '\'`
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        match c {
            '\\' | '%' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// `%term%` pattern for case-insensitive substring search
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term.trim()))
}
