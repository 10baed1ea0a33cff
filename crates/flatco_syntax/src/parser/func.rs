/// Pseudo-function definitions.
///
/// `BL_func(<marker>) <type> <name>(<type> <name>, ...) { <body> }`. The marker is required
/// but ignored.
impl<'src> Parser<'src> {
    fn parse_function(&mut self, scanner: &mut Scanner<'src>, keyword: Span) -> Result<FunctionId, DialectError> {
        scanner.expect_bracketed(b'(', "after BL_func")?;
        let return_type = scanner
            .read_type_expression()?
            .ok_or_else(|| scanner.error(ErrorKind::MissingReturnType))?;
        let name = scanner.skip_to_identifier()?;
        let params_region = scanner.expect_bracketed(b'(', "after the pseudo-function name")?;
        let (params, param_index) = self.parse_params(&params_region)?;

        let body_region = scanner.expect_bracketed(b'{', "after the parameter list")?;
        let mut body_scanner = Scanner::inside(self.source, &body_region);
        let body = self.scan_block(&mut body_scanner, BlockScope::Function(&param_index))?;

        tracing::debug!(
            name = name.text(self.source),
            params = params.len(),
            calls = body.calls.len(),
            returns = body.returns.len(),
            "parsed pseudo-function"
        );

        let id = FunctionId(self.functions.len());
        self.functions.push(FunctionDef {
            keyword,
            return_type,
            name,
            params,
            param_index,
            body,
            callers: Default::default(),
            arity: ReturnArity::Unknown,
        });
        Ok(id)
    }

    /// Parse `<type> <name>, ...` inside the parameter parentheses.
    fn parse_params(&self, region: &Span) -> Result<(Vec<Parameter>, ParamIndex), DialectError> {
        let mut scanner = Scanner::inside(self.source, region);
        let mut params = Vec::new();
        let mut index = ParamIndex::new();
        if scanner.skip_trivia()?.is_none() {
            return Ok((params, index));
        }
        loop {
            let Some(ty) = scanner.read_type_expression()? else {
                let kind = if params.is_empty() {
                    ErrorKind::ExpectedIdentifier
                } else {
                    ErrorKind::ExpectedParameter
                };
                return Err(scanner.error(kind));
            };
            let name = scanner.skip_to_identifier()?;
            let text = name.text(self.source);
            if index.contains_key(text) {
                return Err(DialectError::at_span(ErrorKind::DuplicateParameter(text.to_string()), &name));
            }
            index.insert(text.to_string(), params.len());
            params.push(Parameter { ty, name });

            match scanner.skip_trivia()? {
                None => return Ok((params, index)),
                Some(b',') => {
                    scanner.bump();
                }
                Some(_) => return Err(scanner.error(ErrorKind::MissingComma)),
            }
        }
    }
}
