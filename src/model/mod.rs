pub mod quad;
pub mod score;

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
