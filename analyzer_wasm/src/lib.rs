//! WebAssembly bindings for the expression toolchain and game helpers.
//!
//! Every export returns a `dto::v1` view serialised with `serde-wasm-bindgen`.
use wasm_bindgen::prelude::*;

mod converter;
pub mod dto;
mod offsets;
mod span;

use converter::Converter;

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub fn lex(source: String) -> JsValue {
    to_js(&Converter::lex_result(&source))
}

#[wasm_bindgen]
pub fn parse(source: String) -> JsValue {
    to_js(&Converter::parse_result(&source))
}

/// A random target expression. Without a seed the JS `Math.random` picks one.
#[wasm_bindgen]
pub fn generate(min_tokens: usize, max_tokens: usize, seed: Option<u32>) -> String {
    let seed = seed.map_or_else(
        || (js_sys::Math::random() * f64::from(u32::MAX)) as u64,
        u64::from,
    );
    generator::Generator::seeded(seed).generate(min_tokens, max_tokens)
}

#[wasm_bindgen]
pub fn evaluate(source: String, xs: Vec<f64>) -> JsValue {
    to_js(&Converter::evaluate_result(&source, &xs))
}

#[wasm_bindgen]
pub fn hints(guess: String, target: String, samples: Vec<f64>, threshold: f64) -> JsValue {
    to_js(&Converter::hints_result(&guess, &target, &samples, threshold))
}

#[wasm_bindgen]
pub fn sample_points(min: f64, max: f64, count: usize) -> Vec<f64> {
    evaluator::sample_points(min, max, count)
}

#[wasm_bindgen(js_name = acceptInput)]
pub fn accept_input(typed: String) -> JsValue {
    to_js(&Converter::accepted_input(&typed))
}
