//! HTTP controllers.
//!
//! A controller holds its services behind `Arc`s, exposes `base_path()` and
//! builds its own `Router` from an `Arc<Self>`. Handlers parse every input
//! through pipes before delegating, so a rejected request never reaches a
//! service.

mod person_controller;

pub use person_controller::PersonController;
