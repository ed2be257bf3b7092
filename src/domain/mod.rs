//! Domain layer - Repository records and list invariants

pub mod clock;
pub mod notification;
pub mod record;
pub mod repo_list;

pub use clock::{Clock, FixedClock, SystemClock};
pub use notification::{MasterWarning, Notification, Severity};
pub use record::{RepoId, RepoRecord};
pub use repo_list::{DeleteOutcome, RepoList};
