//! WASM bindings for Nodal Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmDcSolver } from 'nodal_core';
//!
//! await init();
//!
//! const solver = new WasmDcSolver(`
//!   V1 1 0 10
//!   R1 1 2 1k
//!   R2 2 0 1k
//! `);
//!
//! solver.node_voltages();   // Float64Array [10, 5]
//! solver.source_currents(); // Float64Array [-0.005]
//! ```

use wasm_bindgen::prelude::*;

use crate::dsl;
use crate::error::NodalError;
use crate::solver::{analyze, Solution};
use crate::NodeId;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: NodalError) -> JsValue {
    let e = NodalError::WasmError {
        message: e.to_string(),
    };
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible DC network solver.
///
/// Parses and solves a netlist once at construction; the accessors read the
/// stored solution.
#[wasm_bindgen]
pub struct WasmDcSolver {
    solution: Solution,
    source_names: Vec<String>,
}

#[wasm_bindgen]
impl WasmDcSolver {
    /// Parse and solve a netlist.
    ///
    /// # Returns
    /// A new `WasmDcSolver` or an error string if parsing or solving fails.
    #[wasm_bindgen(constructor)]
    pub fn new(netlist_text: &str) -> Result<WasmDcSolver, JsValue> {
        let netlist = dsl::parse(netlist_text).map_err(to_js)?;
        let solution = analyze(&netlist).map_err(to_js)?;
        Ok(WasmDcSolver {
            solution,
            source_names: netlist.voltage_source_names(),
        })
    }

    /// Node voltages, node 1 first.
    #[wasm_bindgen]
    pub fn node_voltages(&self) -> Vec<f64> {
        self.solution.node_voltages().to_vec()
    }

    /// Voltage source branch currents, in netlist order.
    #[wasm_bindgen]
    pub fn source_currents(&self) -> Vec<f64> {
        self.solution.source_currents().to_vec()
    }

    /// Name of the voltage source owning `source_currents()[index]`.
    #[wasm_bindgen]
    pub fn source_name(&self, index: usize) -> Option<String> {
        self.source_names.get(index).cloned()
    }

    /// Voltage at a node index (0 is ground), or `undefined` if out of range.
    #[wasm_bindgen]
    pub fn node_voltage(&self, node: usize) -> Option<f64> {
        self.solution.voltage(NodeId(node))
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
