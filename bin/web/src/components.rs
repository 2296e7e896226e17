//! Reusable presentation components.

pub mod alert;
pub mod icon;
pub mod spinner;

pub use alert::Alert;
pub use icon::{Icon, IconKind};
pub use spinner::SpinningStar;
