mod celebration;
mod error;
mod form;
mod payload;
mod store;
pub mod time_math;

pub use celebration::CelebrationTrigger;
pub use error::{SubmitError, ValidationError};
pub use form::{age_at, next_anniversary, CountdownDraft, FormController};
pub use payload::{CanvasLayout, CountdownText, DrawItem, ProgressEntry, ProgressPayload, RenderState};
pub use store::CountdownStore;
pub use time_math::{remaining, year_progress, Remaining};
