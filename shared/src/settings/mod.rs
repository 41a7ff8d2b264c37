//! Headless settings drawer: field controllers and panel state.
//!
//! Rendering lives in the frontend. Everything here works against the
//! [`ConfigStore`] and [`SessionStore`] contracts so it can be driven from
//! tests without a browser.

pub mod fields;
pub mod mask;
pub mod panel;
pub mod scale;
pub mod store;

pub use fields::*;
pub use mask::*;
pub use panel::*;
pub use scale::*;
pub use store::*;
