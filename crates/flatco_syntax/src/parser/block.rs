/// Shared top-to-bottom block scanner.
///
/// The same loop builds the file-scope block and every pseudo-function body: opaque text is
/// collected into code chunks, and each pseudo-keyword flushes the pending chunk before its
/// construct is parsed.
impl<'src> Parser<'src> {
    fn scan_block(&mut self, scanner: &mut Scanner<'src>, scope: BlockScope<'_>) -> Result<Block, DialectError> {
        let mut block = Block::default();
        let mut chunk = scanner.mark();
        while let Some(c) = scanner.skip_trivia()? {
            if c == b'"' || c == b'\'' {
                scanner.read_string_literal()?;
                continue;
            }
            if c.is_ascii_digit() {
                scanner.skip_number();
                continue;
            }
            let Some(ident) = scanner.peek_identifier() else {
                scanner.bump();
                continue;
            };
            scanner.read_identifier()?;
            let Some(keyword) = keywords::from_str(ident.text(self.source)) else {
                continue;
            };
            if let Some(kind) = scope.violation(keyword) {
                return Err(DialectError::at_span(kind, &ident));
            }
            self.flush_code(&mut block, chunk, ident.start, scope)?;
            match keyword {
                KeywordId::Func => {
                    let id = self.parse_function(scanner, ident)?;
                    block.items.push(Item::Function(id));
                }
                KeywordId::Call => {
                    let call = self.parse_call(scanner, scope)?;
                    block.items.push(Item::Call(CallId(block.calls.len())));
                    block.calls.push(call);
                }
                KeywordId::Return => {
                    let ret = self.parse_return(scanner, ident, scope)?;
                    block.items.push(Item::Return(ReturnId(block.returns.len())));
                    block.returns.push(ret);
                }
            }
            chunk = scanner.mark();
        }
        self.flush_code(&mut block, chunk, scanner.offset(), scope)?;
        Ok(block)
    }

    /// Append the opaque text between `chunk` and `end` as a code item. Empty chunks are dropped.
    fn flush_code(&self, block: &mut Block, chunk: Mark, end: usize, scope: BlockScope<'_>) -> Result<(), DialectError> {
        if end <= chunk.offset {
            return Ok(());
        }
        let text = self.substitutable(Span::between(chunk, end), scope)?;
        block.items.push(Item::Code(text));
        Ok(())
    }
}
