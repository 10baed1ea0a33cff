/// Call and return sites.
///
/// ## Notes
/// - `BL_call(<target> = <name>(<args>))`: the target is everything before the first unnested `=`.
/// - `BL_return(<expr>)`: an empty or whitespace-only expression is a void return.
impl<'src> Parser<'src> {
    fn parse_call(&self, scanner: &mut Scanner<'src>, scope: BlockScope<'_>) -> Result<CallSite, DialectError> {
        let region = scanner.expect_bracketed(b'(', "after BL_call")?;
        let mut inner = Scanner::inside(self.source, &region);

        let start = inner.mark();
        let target = match inner.read_expression(b'=')? {
            (span, true) if span.is_empty() => {
                return Err(DialectError::new(ErrorKind::MissingCallTarget, span.start, span.position));
            }
            (span, true) => Some(self.substitutable(span, scope)?),
            (_, false) => {
                inner.reset(start);
                None
            }
        };

        let name = inner.skip_to_identifier()?;
        let args_region = inner.expect_bracketed(b'(', "after the callee name")?;
        if inner.skip_trivia()?.is_some() {
            return Err(inner.error(ErrorKind::TrailingCallText));
        }
        let args = self.parse_arguments(&args_region, scope)?;

        Ok(CallSite {
            name,
            target,
            args,
            callee: None,
        })
    }

    /// Split a parenthesized argument list at unnested commas.
    fn parse_arguments(&self, region: &Span, scope: BlockScope<'_>) -> Result<Vec<SubstitutableText>, DialectError> {
        let mut scanner = Scanner::inside(self.source, region);
        let mut args = Vec::new();
        if scanner.skip_trivia()?.is_none() {
            return Ok(args);
        }
        loop {
            let (arg, more) = scanner.read_expression(b',')?;
            if arg.is_empty() {
                return Err(DialectError::new(ErrorKind::EmptyArgument, arg.start, arg.position));
            }
            args.push(self.substitutable(arg, scope)?);
            if !more {
                return Ok(args);
            }
        }
    }

    fn parse_return(
        &self,
        scanner: &mut Scanner<'src>,
        keyword: Span,
        scope: BlockScope<'_>,
    ) -> Result<ReturnSite, DialectError> {
        let region = scanner.expect_bracketed(b'(', "after BL_return")?;
        let value = Scanner::inside(self.source, &region).read_rest()?;
        let value = if value.is_empty() {
            None
        } else {
            Some(self.substitutable(value, scope)?)
        };
        Ok(ReturnSite { keyword, value })
    }
}
