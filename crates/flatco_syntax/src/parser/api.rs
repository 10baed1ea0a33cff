/// Parse a source buffer into a [`TranslationUnit`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `source`: the whole host-language file. The unit borrows it for its lifetime.
///
/// ## Errors
/// Returns the first lexical or syntactic [`DialectError`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<TranslationUnit<'_>, DialectError> {
    Parser::new(source).parse()
}
