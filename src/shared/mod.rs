pub mod constants;
pub mod flags;
pub mod format;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
