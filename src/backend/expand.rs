//! Recursive inlining of pseudo-function calls.
//!
//! Every call is replaced by a single-iteration block holding the callee's body:
//!
//! ```text
//! do {<type> _BLparam<seq>_<name> = <arg>; ... <body> _BLexit<seq>:;}while(0)
//! ```
//!
//! A return becomes "assign the target, jump to the exit label", wrapped in `do{ ... }while(0)` so it stays a
//! single statement. Each expansion takes the next value of a sequence counter that is never reset during one
//! pass; temporaries and the exit label are named after it, so repeated and nested inlining never collides.
//!
//! ## Notes
//! - Arguments and the call target belong to the caller: their parameter references are renamed with the
//!   caller's sequence id, not the callee's.
//! - File-scope text has no parameters, so it is copied through unchanged.

use std::borrow::Cow;

use flatco_core::lang::conventions;

use super::config::ExpandConfig;
use super::include;
use super::writer::OutputWriter;
use crate::frontend::ast::{CallSite, FunctionId, Item, SubstitutableText, TranslationUnit};
use crate::frontend::validator::ValidatedUnit;

/// Generate the expanded text of a validated unit.
#[tracing::instrument(skip_all, fields(file = %config.file_name))]
pub fn generate(unit: &ValidatedUnit<'_>, config: &ExpandConfig) -> String {
    let mut expander = Expander::new(unit.unit(), config);
    expander.emit_top();
    tracing::debug!(expansions = expander.next_seq, "generation finished");
    expander.writer.finish()
}

/// Generation state for one pass.
struct Expander<'u, 'src> {
    unit: &'u TranslationUnit<'src>,
    config: &'u ExpandConfig,
    writer: OutputWriter,
    /// Sequence id of the next expansion.
    next_seq: usize,
}

impl<'u, 'src> Expander<'u, 'src> {
    fn new(unit: &'u TranslationUnit<'src>, config: &'u ExpandConfig) -> Self {
        Self {
            unit,
            config,
            writer: OutputWriter::new(config),
            next_seq: 0,
        }
    }

    fn emit_top(&mut self) {
        let unit = self.unit;
        let mut first_code = true;
        for item in &unit.top.items {
            match item {
                Item::Code(text) => {
                    self.writer.line_marker(text.position().row);
                    if first_code {
                        first_code = false;
                        self.write_leading_chunk(text.text(unit.source));
                    } else {
                        self.writer.write(text.text(unit.source));
                    }
                }
                Item::Function(_) => {}
                Item::Call(id) => {
                    let call = unit.top.call(*id);
                    self.expand_call(call, None);
                }
                Item::Return(_) => unreachable!("INVARIANT: the parser rejects BL_return at file scope"),
            }
        }
    }

    /// Write the first code chunk, commenting out the dialect header include.
    fn write_leading_chunk(&mut self, text: &str) {
        match include::find_header_include(text, &self.config.header_name) {
            Some(at) => {
                tracing::debug!(header = %self.config.header_name, "commenting out dialect header include");
                self.writer.write(&text[..at]);
                self.writer.write(conventions::LINE_COMMENT);
                self.writer.write(&text[at..]);
            }
            None => self.writer.write(text),
        }
    }

    /// Render text of the scope with sequence id `seq` (`None` for file scope).
    fn render(&self, text: &SubstitutableText, seq: Option<usize>) -> Cow<'src, str> {
        match seq {
            Some(seq) => text.render(self.unit.source, &conventions::param_prefix(seq)),
            None => Cow::Borrowed(text.text(self.unit.source)),
        }
    }

    /// Expand `call`, which appears in the scope with sequence id `caller_seq`.
    fn expand_call(&mut self, call: &CallSite, caller_seq: Option<usize>) {
        let callee = call.callee.expect("INVARIANT: validated calls are resolved");
        let target = call.target.as_ref().map(|t| self.render(t, caller_seq));
        let args: Vec<_> = call.args.iter().map(|a| self.render(a, caller_seq)).collect();
        self.expand(callee, target.as_deref(), &args);
    }

    fn expand(&mut self, callee: FunctionId, target: Option<&str>, args: &[Cow<'src, str>]) {
        let unit = self.unit;
        let func = unit.function(callee);
        let seq = self.next_seq;
        self.next_seq += 1;
        tracing::debug!(callee = unit.function_name(callee), seq, "inlining call");

        self.writer.write("do {");
        for (param, arg) in func.params.iter().zip(args) {
            let temp = conventions::param_temp(seq, param.name.text(unit.source));
            self.writer.write(&format!("{} {temp} = {arg};", param.ty.text(unit.source)));
        }

        for item in &func.body.items {
            match item {
                Item::Code(text) => {
                    self.writer.line_marker(text.position().row);
                    let code = self.render(text, Some(seq));
                    self.writer.write(&code);
                }
                Item::Call(id) => self.expand_call(func.body.call(*id), Some(seq)),
                Item::Return(id) => {
                    let value = func.body.return_site(*id).value.as_ref().map(|v| self.render(v, Some(seq)));
                    self.write_return(seq, target, value.as_deref());
                }
                Item::Function(_) => unreachable!("INVARIANT: the parser rejects nested BL_func"),
            }
        }

        self.writer.write(&format!("{}:;}}while(0)", conventions::exit_label(seq)));
    }

    fn write_return(&mut self, seq: usize, target: Option<&str>, value: Option<&str>) {
        let label = conventions::exit_label(seq);
        let statement = match (target, value) {
            (Some(target), Some(value)) => format!("do{{ {target} = {value}; goto {label}; }}while(0)"),
            (None, Some(value)) => format!("do{{ {value}; goto {label}; }}while(0)"),
            (_, None) => format!("do{{ goto {label}; }}while(0)"),
        };
        self.writer.write(&statement);
    }
}
