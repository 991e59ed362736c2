//! Desktop admin console for a pair of student and course record services.
//! All network calls run on a background runtime; the GUI polls finished
//! results each frame and never blocks.

pub mod api;
pub mod core;
pub mod gui;
pub mod persistence;
