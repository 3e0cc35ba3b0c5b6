/// Floating-point comparison helpers.
///
/// Evaluation results are plain `f64`s, so comparing them against expected
/// values needs a tolerance. This module provides the relative/absolute
/// tolerance check used by the test-suite and by callers that post-process
/// results.
pub mod num;
/// Source text helpers for diagnostics.
///
/// Errors quote a short piece of the source next to the offset they were raised
/// at. This module extracts that snippet without splitting a UTF-8 character.
pub mod text;
