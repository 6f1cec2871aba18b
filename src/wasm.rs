//! WASM bindings for Bench Levelizer.
//!
//! This module provides JavaScript-friendly bindings for inspecting bench
//! netlists in the browser.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmBenchCircuit } from 'bench_levelizer';
//!
//! await init();
//!
//! const bench = `
//!   INPUT(a)
//!   INPUT(b)
//!   c = AND(a, b)
//!   OUTPUT(c)
//! `;
//!
//! const circuit = new WasmBenchCircuit(bench);
//! console.log(circuit.depth, circuit.level_of("c"));
//! console.log(circuit.report());
//! ```

use wasm_bindgen::prelude::*;

use crate::bench::ParseConfig;
use crate::circuit::Circuit;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible levelized circuit.
#[wasm_bindgen]
pub struct WasmBenchCircuit {
    circuit: Circuit,
}

#[wasm_bindgen]
impl WasmBenchCircuit {
    /// Parse and levelize a circuit from bench text.
    ///
    /// # Returns
    /// A new `WasmBenchCircuit` or an error string if the netlist is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(bench: &str) -> Result<WasmBenchCircuit, JsValue> {
        Self::with_config(bench, false)
    }

    /// Parse and levelize with per-kind arity checking switched on or off.
    #[wasm_bindgen]
    pub fn with_config(bench: &str, strict_arity: bool) -> Result<WasmBenchCircuit, JsValue> {
        let config = ParseConfig::new().with_strict_arity(strict_arity);

        let mut circuit = Circuit::parse_with_config(bench, &config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        crate::circuit::validate_circuit(&circuit)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        circuit
            .levelize()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(WasmBenchCircuit { circuit })
    }

    /// The full textual report.
    #[wasm_bindgen]
    pub fn report(&self) -> String {
        self.circuit.to_string()
    }

    /// Largest level in the circuit.
    #[wasm_bindgen(getter)]
    pub fn depth(&self) -> u32 {
        self.circuit.depth().unwrap_or(0) as u32
    }

    /// Level of a named node, or `undefined` if the node doesn't exist.
    #[wasm_bindgen]
    pub fn level_of(&self, node_name: &str) -> Option<u32> {
        self.circuit
            .node_by_name(node_name)
            .and_then(|n| n.level)
            .map(|l| l as u32)
    }

    /// Primary input names, in declaration order.
    #[wasm_bindgen]
    pub fn input_names(&self) -> Vec<String> {
        self.circuit.input_names().map(str::to_string).collect()
    }

    /// Primary output names, in declaration order.
    #[wasm_bindgen]
    pub fn output_names(&self) -> Vec<String> {
        self.circuit.output_names().map(str::to_string).collect()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
