//! Conversion from internal analyzer/evaluator types to `dto::v1` views.
//!
//! Stateless and free of `JsValue`, so everything here runs in native tests.

mod analyze;
mod evaluate;
mod shared;

pub struct Converter;
