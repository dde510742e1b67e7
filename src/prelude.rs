//! Convenient re-exports for pipeline-heavy call sites.

pub use crate::keep::Keep;
pub use crate::non_null::{NonNull, NonNullMut, NonNullRef};
pub use crate::select::Select;
pub use crate::visit::Visit;
pub use crate::Vista;
