// Make common test utilities available
#[cfg(test)]
pub mod common;
