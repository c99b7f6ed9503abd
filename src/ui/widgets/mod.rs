//! UI widget components
//!
//! This module contains the trigger button and the modal popups.

pub mod button;
pub mod popups;
