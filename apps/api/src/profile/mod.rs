// Candidate profile: record projection, formatting helpers, and HTTP handlers.
// The projector is pure; all I/O happens in the store behind AppState.

pub mod format;
pub mod handlers;
pub mod projector;
pub mod view;

pub use projector::project;
pub use view::ProfileView;
