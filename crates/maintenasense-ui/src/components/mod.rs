//! Shared deck chrome: header, footer, icons and the error banner.

pub(crate) mod error_banner;
pub(crate) mod icon;
pub(crate) mod shell;
