pub mod annotation;
pub mod models;
pub mod policy;
pub mod selection;
pub mod session;

// Re-export key types for easier usage
pub use annotation::{AnnotationBag, LineRange, RangeSet};
pub use models::{answer::*, profile::*, query::*};
pub use policy::{LineView, QueryRules};
pub use selection::{Mark, MarkKind, Selection, ToggleOptions};
pub use session::{Session, SessionAction, SessionState, next_state};
