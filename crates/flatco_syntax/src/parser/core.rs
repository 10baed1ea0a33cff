/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its top-level `parse()` entrypoint, and the
/// [`BlockScope`] that tells the shared block scanner whether it is at file scope or inside a
/// pseudo-function body.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Where a block is being scanned.
#[derive(Debug, Clone, Copy)]
enum BlockScope<'p> {
    /// Outside any pseudo-function. No parameters are in scope.
    File,
    /// Inside a pseudo-function body with the given parameters.
    Function(&'p ParamIndex),
}

impl<'p> BlockScope<'p> {
    fn params(self) -> Option<&'p ParamIndex> {
        match self {
            BlockScope::File => None,
            BlockScope::Function(params) => Some(params),
        }
    }

    /// Error for a keyword that is not allowed in this scope, if any.
    fn violation(self, keyword: KeywordId) -> Option<ErrorKind> {
        let scope = keywords::scope(keyword);
        match self {
            BlockScope::File if !scope.allows_file_scope() => Some(ErrorKind::ReturnOutsideFunction),
            BlockScope::Function(_) if !scope.allows_function_body() => Some(ErrorKind::NestedFunction),
            _ => None,
        }
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and fail-fast: the first error aborts the whole unit.
/// - Pseudo-functions are appended to `functions` in definition order; their index is their [`FunctionId`].
pub struct Parser<'src> {
    source: &'src str,
    functions: Vec<FunctionDef>,
}

impl<'src> Parser<'src> {
    /// Create a new parser for one source buffer.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            functions: Vec::new(),
        }
    }

    /// Parse the whole buffer into a [`TranslationUnit`].
    ///
    /// ## Errors
    /// Returns the first [`DialectError`] found. Semantic checks (name resolution, arity, recursion) are not
    /// performed here.
    pub fn parse(mut self) -> Result<TranslationUnit<'src>, DialectError> {
        let mut scanner = Scanner::new(self.source);
        let top = self.scan_block(&mut scanner, BlockScope::File)?;
        Ok(TranslationUnit::new(self.source, top, self.functions))
    }

    /// Run the hygiene scanner over `span` with the parameters of `scope`.
    fn substitutable(&self, span: Span, scope: BlockScope<'_>) -> Result<SubstitutableText, DialectError> {
        find_param_refs(self.source, span, scope.params())
    }
}
