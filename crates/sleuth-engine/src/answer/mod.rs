pub mod matcher;
pub mod spoiler;
