#[cfg(test)]
pub mod test_util;
