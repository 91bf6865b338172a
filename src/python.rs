//! Embedded-Python segmentation engine (only compiled with the "python"
//! feature).
//!
//! Binds the real `thai_tokenizer` Python module as a [`SegmentEngine`]:
//! import the module, instantiate `Tokenizer` with no arguments, then call
//! `split(text)` per request and extract the returned list of strings.

use pyo3::prelude::*;

use crate::engine::SegmentEngine;
use crate::error::TokenizeError;

/// Segmentation engine backed by the Python `thai_tokenizer` module
pub struct PyThaiEngine {
    /// The `thai_tokenizer.Tokenizer` instance, shared across calls
    tokenizer: Py<PyAny>,
}

fn engine_error(context: &str, err: PyErr) -> TokenizeError {
    TokenizeError::Engine {
        engine: "thai_tokenizer".to_string(),
        reason: format!("{context}: {err}"),
    }
}

impl PyThaiEngine {
    /// Import `thai_tokenizer` and instantiate its `Tokenizer`.
    ///
    /// The Python interpreter is initialized on first use. Import or
    /// construction failures surface as [`TokenizeError::Engine`].
    pub fn new() -> Result<Self, TokenizeError> {
        Python::with_gil(|py| {
            let module = PyModule::import_bound(py, "thai_tokenizer")
                .map_err(|e| engine_error("failed to import thai_tokenizer", e))?;
            let class = module
                .getattr("Tokenizer")
                .map_err(|e| engine_error("failed to get Tokenizer class", e))?;
            let instance = class
                .call0()
                .map_err(|e| engine_error("failed to create Tokenizer instance", e))?;
            log::info!("thai_tokenizer engine initialized");
            Ok(PyThaiEngine {
                tokenizer: instance.unbind(),
            })
        })
    }
}

impl SegmentEngine for PyThaiEngine {
    fn name(&self) -> &str {
        "thai_tokenizer"
    }

    fn split(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        Python::with_gil(|py| {
            let result = self
                .tokenizer
                .bind(py)
                .call_method1("split", (text,))
                .map_err(|e| engine_error("split call failed", e))?;
            result
                .extract::<Vec<String>>()
                .map_err(|e| engine_error("split did not return a list of strings", e))
        })
    }
}
