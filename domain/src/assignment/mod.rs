//! Random draws made at session start: speaking order and roles.
//!
//! Both draws use the same technique: every participant gets an
//! independent random key in `[0, 1)` and the roster is sorted by that key.
//! This is not a provably uniform shuffle, which is fine for a
//! non-adversarial rehearsal tool.

pub mod roles;
pub mod shuffle;
pub mod speaking_order;

pub use roles::{Role, RoleMap};
pub use shuffle::order_by_random_keys;
pub use speaking_order::SpeakingOrder;
