//! Small shared view pieces.

pub mod notice_banner;
