//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best
//! practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - plan: store tests (items, selection, hit testing)
//! - integration: full gesture workflow tests
//! - unit: single-component unit tests

mod helpers;
mod plan;
