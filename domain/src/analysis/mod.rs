//! Staged analysis timeline
//!
//! ```text
//!  ┌────────────┐ 3s ┌───────────┐ 4s ┌───────────┐ 3s ┌──────────┐
//!  │ processing │───►│ analyzing │───►│ verifying │───►│ complete │
//!  └────────────┘    └───────────┘    └───────────┘    └──────────┘
//!   progress ≤ 25     progress ≤ 60    progress ≤ 90    progress = 100
//! ```
//!
//! Transitions are driven by time only, never by the content. The
//! classification result is computed up front and revealed on `complete`.

pub mod schedule;
pub mod session;
pub mod stage;

pub use schedule::StageSchedule;
pub use session::{AnalysisSession, AnalysisSnapshot};
pub use stage::AnalysisStage;
