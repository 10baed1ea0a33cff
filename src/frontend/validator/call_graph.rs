//! Call graph between pseudo-functions.
//!
//! Expansion is textual inlining without a runtime stack, so the graph must be a DAG. Acyclicity is checked by
//! repeatedly removing every function that calls nothing still present; whatever survives lies on, or calls into,
//! a cycle.

use std::collections::BTreeSet;

use crate::frontend::ast::{FunctionId, TranslationUnit};
use crate::frontend::diagnostics::{DialectError, ErrorKind};

/// Resolved call edges, indexed by [`FunctionId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallGraph {
    callees: Vec<BTreeSet<FunctionId>>,
    callers: Vec<BTreeSet<FunctionId>>,
}

impl CallGraph {
    /// Build the graph from a unit whose calls are already resolved.
    pub fn build(unit: &TranslationUnit<'_>) -> Self {
        let callees = unit
            .functions
            .iter()
            .map(|func| func.body.calls.iter().filter_map(|call| call.callee).collect())
            .collect();
        let callers = unit.functions.iter().map(|func| func.callers.clone()).collect();
        Self { callees, callers }
    }

    pub fn callees(&self, id: FunctionId) -> &BTreeSet<FunctionId> {
        &self.callees[id.0]
    }

    pub fn callers(&self, id: FunctionId) -> &BTreeSet<FunctionId> {
        &self.callers[id.0]
    }

    /// Order functions so that every callee comes before its callers.
    ///
    /// ## Errors
    /// - The functions that could not be ordered (in id order) if the graph has a cycle.
    pub fn leaves_first(&self) -> Result<Vec<FunctionId>, Vec<FunctionId>> {
        let count = self.callees.len();
        let mut out_degree: Vec<usize> = self.callees.iter().map(BTreeSet::len).collect();
        let mut removed = vec![false; count];
        let mut order = Vec::with_capacity(count);
        loop {
            let leaves: Vec<usize> = (0..count).filter(|&i| !removed[i] && out_degree[i] == 0).collect();
            if leaves.is_empty() {
                break;
            }
            for leaf in leaves {
                removed[leaf] = true;
                order.push(FunctionId(leaf));
                for caller in &self.callers[leaf] {
                    out_degree[caller.0] -= 1;
                }
            }
        }
        if order.len() == count {
            Ok(order)
        } else {
            Err((0..count).filter(|&i| !removed[i]).map(FunctionId).collect())
        }
    }

    /// Reject any cycle of calls.
    ///
    /// ## Errors
    /// - [`ErrorKind::RecursiveCalls`] naming every function left after reduction, reported at the first one.
    pub fn check_acyclic(&self, unit: &TranslationUnit<'_>) -> Result<(), DialectError> {
        let remaining = match self.leaves_first() {
            Ok(_) => return Ok(()),
            Err(remaining) => remaining,
        };
        let names = remaining.iter().map(|&id| unit.function_name(id).to_string()).collect();
        let first = unit.function(remaining[0]);
        Err(DialectError::at_span(ErrorKind::RecursiveCalls(names), &first.name))
    }
}
