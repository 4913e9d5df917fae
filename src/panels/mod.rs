//! State machines behind the two screens.
//!
//! Panels never talk to the network themselves: they resolve what should be
//! requested and apply whatever the request produced. The container in
//! [`crate::ui`] owns both panels and the requests in between.

pub mod add;
mod feedback;
pub mod search;

pub use add::{AddField, AddPanel, parse_synonyms};
pub use feedback::{Feedback, FeedbackKind};
pub use search::SearchPanel;
