//! Pure helper functions shared by the client layers

pub mod format;
