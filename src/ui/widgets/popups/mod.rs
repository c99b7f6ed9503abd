//! Modal popup components
//!
//! This module contains all popup/dialog widgets including token entry,
//! result alerts, and the help screen.

pub mod alert;
pub mod help;
pub mod token_prompt;
