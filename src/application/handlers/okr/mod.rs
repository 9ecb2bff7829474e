//! OKR command and query handlers.

mod manage_okr;
mod queries;
#[cfg(test)]
pub(crate) mod test_support;

pub use manage_okr::{
    ArchiveOkrHandler, CreateOkrCommand, CreateOkrHandler, OkrCommandError,
    UpdateProgressCommand, UpdateProgressHandler,
};
pub use queries::{GetOkrHandler, ListOkrsHandler, OkrQueryError};
