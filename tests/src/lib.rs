//! Cross-crate tests for the public surface of `romanus-core`.

#[cfg(test)]
mod conversion;
#[cfg(test)]
mod year;
