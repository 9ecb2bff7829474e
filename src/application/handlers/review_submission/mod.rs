//! Review submission workflow handlers.

mod nominate_peers;
mod queries;
mod save_draft;
mod submit_review;
#[cfg(test)]
pub(crate) mod test_support;

pub use nominate_peers::{NominatePeersCommand, NominatePeersError, NominatePeersHandler};
pub use queries::{GetSubmissionHandler, ListSubmissionsHandler, SubmissionQueryError};
pub use save_draft::{SaveDraftCommand, SaveDraftError, SaveDraftHandler};
pub use submit_review::{SubmitReviewError, SubmitReviewHandler};
