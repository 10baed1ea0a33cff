//! Semantic validation of a parsed translation unit.
//!
//! Validates:
//! - Pseudo-function names are unique
//! - All returns of one pseudo-function agree on returning a value or not
//! - Every call names a defined pseudo-function, never its own caller, with the declared number of arguments
//! - A call only assigns a result if the callee returns a value
//! - The call graph between pseudo-functions is acyclic
//!
//! Validation runs once, after parsing, and completes the unit in place: it fills the name table, each call's
//! resolved callee, each function's callers and return arity. The result is a [`ValidatedUnit`], the only input
//! the expander accepts.

mod call_graph;

use std::collections::BTreeSet;
use std::ops::Deref;

use crate::frontend::ast::*;
use crate::frontend::diagnostics::{DialectError, ErrorKind};

pub use call_graph::CallGraph;

/// A translation unit that passed validation. Read-only from here on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUnit<'src> {
    unit: TranslationUnit<'src>,
}

impl<'src> ValidatedUnit<'src> {
    pub fn unit(&self) -> &TranslationUnit<'src> {
        &self.unit
    }

    pub fn into_unit(self) -> TranslationUnit<'src> {
        self.unit
    }
}

impl<'src> Deref for ValidatedUnit<'src> {
    type Target = TranslationUnit<'src>;

    fn deref(&self) -> &Self::Target {
        &self.unit
    }
}

/// Validate a parsed unit.
///
/// ## Errors
/// Returns the first semantic [`DialectError`], in this order of checks: duplicate names, inconsistent returns,
/// call resolution (functions in definition order, then file-scope calls), and finally recursion.
#[tracing::instrument(skip_all, fields(functions = unit.functions.len(), top_calls = unit.top.calls.len()))]
pub fn validate(mut unit: TranslationUnit<'_>) -> Result<ValidatedUnit<'_>, DialectError> {
    register_names(&mut unit)?;
    resolve_arities(&mut unit)?;
    resolve_calls(&mut unit)?;
    CallGraph::build(&unit).check_acyclic(&unit)?;
    warn_unused(&unit);
    Ok(ValidatedUnit { unit })
}

fn register_names(unit: &mut TranslationUnit<'_>) -> Result<(), DialectError> {
    let source = unit.source;
    for (index, func) in unit.functions.iter().enumerate() {
        let name = func.name.text(source);
        if unit.by_name.insert(name, FunctionId(index)).is_some() {
            return Err(DialectError::at_span(ErrorKind::DuplicateFunction(name.to_string()), &func.name));
        }
    }
    Ok(())
}

fn resolve_arities(unit: &mut TranslationUnit<'_>) -> Result<(), DialectError> {
    for func in &mut unit.functions {
        let mut arity = ReturnArity::Unknown;
        for ret in &func.body.returns {
            match arity {
                ReturnArity::Unknown => arity = ret.arity(),
                known if known != ret.arity() => {
                    return Err(DialectError::at_span(ErrorKind::InconsistentReturns, &ret.keyword));
                }
                _ => {}
            }
        }
        func.arity = arity;
    }
    Ok(())
}

/// Check one call site against the name table and its callee's signature.
fn resolve_call(unit: &TranslationUnit<'_>, call: &CallSite, caller: Option<FunctionId>) -> Result<FunctionId, DialectError> {
    let name = call.name.text(unit.source);
    let callee = unit
        .lookup(name)
        .ok_or_else(|| DialectError::at_span(ErrorKind::UndefinedFunction(name.to_string()), &call.name))?;
    if caller == Some(callee) {
        return Err(DialectError::at_span(ErrorKind::SelfCall(name.to_string()), &call.name));
    }
    let def = unit.function(callee);
    if call.args.len() != def.params.len() {
        return Err(DialectError::at_span(
            ErrorKind::ArgumentCount {
                callee: name.to_string(),
                expected: def.params.len(),
                found: call.args.len(),
            },
            &call.name,
        ));
    }
    if call.target.is_some() && !def.returns_value() {
        return Err(DialectError::at_span(ErrorKind::VoidTarget(name.to_string()), &call.name));
    }
    Ok(callee)
}

fn resolve_calls(unit: &mut TranslationUnit<'_>) -> Result<(), DialectError> {
    for index in 0..unit.functions.len() {
        let caller = FunctionId(index);
        let callees = unit
            .function(caller)
            .body
            .calls
            .iter()
            .map(|call| resolve_call(unit, call, Some(caller)))
            .collect::<Result<Vec<_>, _>>()?;
        for (call, callee) in unit.functions[index].body.calls.iter_mut().zip(&callees) {
            call.callee = Some(*callee);
        }
        for callee in callees {
            unit.functions[callee.0].callers.insert(caller);
        }
    }

    let callees = unit
        .top
        .calls
        .iter()
        .map(|call| resolve_call(unit, call, None))
        .collect::<Result<Vec<_>, _>>()?;
    for (call, callee) in unit.top.calls.iter_mut().zip(callees) {
        call.callee = Some(callee);
    }
    Ok(())
}

fn warn_unused(unit: &TranslationUnit<'_>) {
    let called_at_top: BTreeSet<FunctionId> = unit.top.calls.iter().filter_map(|call| call.callee).collect();
    for (index, func) in unit.functions.iter().enumerate() {
        tracing::debug!(
            name = func.name.text(unit.source),
            arity = ?func.arity,
            callers = func.callers.len(),
            "validated pseudo-function"
        );
        if func.callers.is_empty() && !called_at_top.contains(&FunctionId(index)) {
            tracing::warn!(
                name = func.name.text(unit.source),
                row = func.name.position.row,
                "pseudo-function is never called"
            );
        }
    }
}
