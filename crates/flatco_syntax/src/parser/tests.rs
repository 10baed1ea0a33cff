#[cfg(test)]
/// Parser unit tests.
///
/// These cover the three keyword forms, the shape of the resulting item sequences, and the
/// position of each syntax error.
mod tests {
    use super::*;

    fn parse_ok(source: &str) -> TranslationUnit<'_> {
        parse(source).unwrap_or_else(|e| panic!("unexpected error {}", e.located()))
    }

    fn parse_err(source: &str) -> DialectError {
        parse(source).expect_err("source should be rejected")
    }

    fn code_texts<'s>(source: &'s str, block: &Block) -> Vec<&'s str> {
        block
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Code(text) => Some(text.text(source)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_plain_text_is_a_single_chunk() {
        let source = "int main() { return 0; }\n";
        let unit = parse_ok(source);
        assert_eq!(code_texts(source, &unit.top), vec![source]);
        assert!(unit.functions.is_empty());
    }

    #[test]
    fn test_empty_source() {
        let unit = parse_ok("");
        assert!(unit.top.items.is_empty());
    }

    #[test]
    fn test_function_definition() {
        let source = "BL_func(x) const char * Pick(int which, std::vector<int> const& v) {\n  BL_return(v[which]);\n}\n";
        let unit = parse_ok(source);
        assert_eq!(unit.functions.len(), 1);
        let func = &unit.functions[0];
        assert_eq!(func.name.text(source), "Pick");
        assert_eq!(func.return_type.text(source), "const char *");
        let params: Vec<_> = func
            .params
            .iter()
            .map(|p| (p.ty.text(source), p.name.text(source)))
            .collect();
        assert_eq!(params, vec![("int", "which"), ("std::vector<int> const&", "v")]);
        assert_eq!(func.param_index.get("v"), Some(&1));
        assert_eq!(func.body.returns.len(), 1);
        assert_eq!(unit.top.items[0], Item::Function(FunctionId(0)));
        assert_eq!(code_texts(source, &unit.top), vec!["\n"]);
    }

    #[test]
    fn test_body_chunks_are_hygiene_scanned() {
        let source = "BL_func(x) void Log(int n) { printf(\"%d n\", n); BL_return(); }";
        let unit = parse_ok(source);
        let body = &unit.functions[0].body;
        let Item::Code(chunk) = &body.items[0] else {
            panic!("expected a code chunk first");
        };
        assert_eq!(chunk.render(source, "T_"), " printf(\"%d n\", T_n); ");
        assert!(matches!(body.items[1], Item::Return(ReturnId(0))));
        assert_eq!(body.returns[0].value, None);
    }

    #[test]
    fn test_call_with_target_and_arguments() {
        let source = "BL_call(arr[i] = Max(f(a, b), \"x,y\", (c)));";
        let unit = parse_ok(source);
        let call = &unit.top.calls[0];
        assert_eq!(call.name.text(source), "Max");
        assert_eq!(call.target.as_ref().map(|t| t.text(source)), Some("arr[i]"));
        let args: Vec<_> = call.args.iter().map(|a| a.text(source)).collect();
        assert_eq!(args, vec!["f(a, b)", "\"x,y\"", "(c)"]);
        assert_eq!(call.callee, None);
        assert_eq!(code_texts(source, &unit.top), vec![";"]);
    }

    #[test]
    fn test_call_without_target_or_arguments() {
        let source = "BL_call( Tick ( ) )";
        let unit = parse_ok(source);
        let call = &unit.top.calls[0];
        assert_eq!(call.name.text(source), "Tick");
        assert!(call.target.is_none());
        assert!(call.args.is_empty());
        assert!(unit.top.items.len() == 1);
    }

    #[test]
    fn test_call_arguments_substitute_enclosing_parameters() {
        let source = "BL_func(x) int Outer(int a) { BL_call(a = Inner(a + 1, obj.a)); BL_return(a); }";
        let unit = parse_ok(source);
        let call = &unit.functions[0].body.calls[0];
        assert_eq!(call.target.as_ref().unwrap().render(source, "T_"), "T_a");
        assert_eq!(call.args[0].render(source, "T_"), "T_a + 1");
        assert_eq!(call.args[1].render(source, "T_"), "obj.a");
    }

    #[test]
    fn test_return_forms() {
        let source = "BL_func(x) int F(int a) { if (a) BL_return( a * 2 ); BL_return(0); }";
        let unit = parse_ok(source);
        let returns = &unit.functions[0].body.returns;
        assert_eq!(returns[0].value.as_ref().unwrap().text(source), "a * 2");
        assert_eq!(returns[0].arity(), ReturnArity::Value);
        assert_eq!(returns[1].value.as_ref().unwrap().refs, Vec::<usize>::new());

        let source = "BL_func(x) void G() { BL_return(  ); }";
        let unit = parse_ok(source);
        assert_eq!(unit.functions[0].body.returns[0].arity(), ReturnArity::Void);
    }

    #[test]
    fn test_keywords_in_literals_and_comments_are_ignored() {
        let source = "puts(\"BL_call(x())\"); /* BL_return(1) */ // BL_func\nint BL_callx;";
        let unit = parse_ok(source);
        assert_eq!(unit.top.items.len(), 1);
    }

    #[test]
    fn test_return_outside_function() {
        let err = parse_err("int x;\n  BL_return(1);");
        assert_eq!(err.kind, ErrorKind::ReturnOutsideFunction);
        assert_eq!(err.position(), Position::new(2, 3));
    }

    #[test]
    fn test_nested_function() {
        let err = parse_err("BL_func(x) void F() { BL_func(y) void G() {} }");
        assert_eq!(err.kind, ErrorKind::NestedFunction);
        assert_eq!(err.position(), Position::new(1, 23));
    }

    #[test]
    fn test_duplicate_parameter() {
        let err = parse_err("BL_func(x) void F(int a, char a) {}");
        assert_eq!(err.kind, ErrorKind::DuplicateParameter("a".to_string()));
        assert_eq!(err.position(), Position::new(1, 31));
    }

    #[test]
    fn test_parameter_list_errors() {
        assert_eq!(parse_err("BL_func(x) void F(int a,) {}").kind, ErrorKind::ExpectedParameter);
        assert_eq!(parse_err("BL_func(x) void F(int a int b) {}").kind, ErrorKind::MissingComma);
        assert_eq!(parse_err("BL_func(x) void F(int) {}").kind, ErrorKind::ExpectedIdentifier);
        assert_eq!(parse_err("BL_func(x) F() {}").kind, ErrorKind::ExpectedIdentifier);
        assert_eq!(parse_err("BL_func(x) * F() {}").kind, ErrorKind::MissingReturnType);
    }

    #[test]
    fn test_missing_delimiters() {
        let err = parse_err("BL_func void F() {}");
        assert_eq!(
            err.kind,
            ErrorKind::Expected {
                expected: '(',
                context: "after BL_func"
            }
        );
        assert_eq!(err.position(), Position::new(1, 9));

        let err = parse_err("BL_func(x) void F() ;");
        assert!(matches!(err.kind, ErrorKind::Expected { expected: '{', .. }));

        let err = parse_err("BL_call(F);");
        assert!(matches!(err.kind, ErrorKind::Expected { expected: '(', .. }));
    }

    #[test]
    fn test_call_errors() {
        assert_eq!(parse_err("BL_call( = F());").kind, ErrorKind::MissingCallTarget);
        assert_eq!(parse_err("BL_call(F() + 1);").kind, ErrorKind::TrailingCallText);
        assert_eq!(parse_err("BL_call(r = 1());").kind, ErrorKind::ExpectedIdentifier);
    }

    #[test]
    fn test_empty_arguments_are_rejected() {
        for source in ["BL_call(F(a,));", "BL_call(F(,a));", "BL_call(F(a,,b));"] {
            assert_eq!(parse_err(source).kind, ErrorKind::EmptyArgument, "{source}");
        }
        let err = parse_err("BL_call(F(a, ));");
        assert_eq!(err.position(), Position::new(1, 14));
    }

    #[test]
    fn test_unclosed_body() {
        let err = parse_err("BL_func(x) void F() {\n  if (x) {\n}\n");
        assert_eq!(err.kind, ErrorKind::UnclosedBracket('}'));
        assert_eq!(err.position().row, 4);
    }

    #[test]
    fn test_lexical_errors_in_opaque_text() {
        assert_eq!(parse_err("char *s = \"abc;\n").kind, ErrorKind::StringCrossesLine);
        assert_eq!(parse_err("int x; /* open").kind, ErrorKind::UnterminatedComment);
    }

    #[test]
    fn test_definition_order_is_preserved() {
        let source = "BL_func(x) void A() {}\nint g;\nBL_func(x) void B() {}\n";
        let unit = parse_ok(source);
        assert_eq!(unit.functions[1].name.text(source), "B");
        assert_eq!(
            unit.top.items,
            vec![
                Item::Function(FunctionId(0)),
                Item::Code(SubstitutableText::plain(Span::new(22, 8, Position::new(1, 23)))),
                Item::Function(FunctionId(1)),
                Item::Code(SubstitutableText::plain(Span::new(52, 1, Position::new(3, 23)))),
            ]
        );
    }
}
