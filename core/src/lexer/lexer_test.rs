use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .expect("tokenize failed")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_empty_source_is_just_eof() {
    let tokens = tokenize("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
}

#[test]
fn test_declaration() {
    use TokenKind::*;
    assert_eq!(
        kinds("let servings = 4;"),
        vec![Let, Identifier, Assign, Number, Semicolon, Eof]
    );
    assert_eq!(kinds("const x = 1"), vec![Const, Identifier, Assign, Number, Eof]);
}

#[test]
fn test_call_with_operators() {
    use TokenKind::*;
    assert_eq!(
        kinds(r#"add("flour", (200 + 1) * servings / 2 - 3)"#),
        vec![
            Identifier, LParen, String, Comma, LParen, Number, Plus, Number, RParen, Multiply,
            Identifier, Divide, Number, Minus, Number, RParen, Eof
        ]
    );
}

#[test]
fn test_positions_are_one_based() {
    let tokens = tokenize("let x = 1;\n  add(\"salt\", x);").unwrap();
    let positions: Vec<_> = tokens.iter().map(|t| (t.kind, t.line, t.column)).collect();
    assert_eq!(
        positions,
        vec![
            (TokenKind::Let, 1, 1),
            (TokenKind::Identifier, 1, 5),
            (TokenKind::Assign, 1, 7),
            (TokenKind::Number, 1, 9),
            (TokenKind::Semicolon, 1, 10),
            (TokenKind::Newline, 1, 11),
            (TokenKind::Identifier, 2, 3),
            (TokenKind::LParen, 2, 6),
            (TokenKind::String, 2, 7),
            (TokenKind::Comma, 2, 13),
            (TokenKind::Identifier, 2, 15),
            (TokenKind::RParen, 2, 16),
            (TokenKind::Semicolon, 2, 17),
            (TokenKind::Eof, 2, 18),
        ]
    );
}

#[test]
fn test_start_line_offset() {
    let tokens = Lexer::with_start_line("flip();", 7).tokenize().unwrap();
    assert!(tokens.iter().all(|t| t.line == 7));
}

#[test]
fn test_comment_is_trimmed() {
    let tokens = tokenize("//   Dry ingredients  \nmix();").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].text(), "Dry ingredients");
    assert_eq!(tokens[1].kind, TokenKind::Newline);
}

#[test]
fn test_trailing_comment_after_statement() {
    use TokenKind::*;
    assert_eq!(
        kinds("let x = 2; // two"),
        vec![Let, Identifier, Assign, Number, Semicolon, Comment, Eof]
    );
}

#[test]
fn test_numbers() {
    let tokens = tokenize("200 2.5 7.").unwrap();
    let values: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Number)
        .map(|t| t.value.clone())
        .collect();
    assert_eq!(
        values,
        vec![
            TokenValue::Number(200.0),
            TokenValue::Number(2.5),
            TokenValue::Number(7.0)
        ]
    );
}

#[test]
fn test_unusual_number_shapes_still_tokenize() {
    let source = "007 0.000 123456789012345678901234567890.5 3.";
    let values: Vec<_> = tokenize(source)
        .unwrap()
        .into_iter()
        .filter(|t| t.kind == TokenKind::Number)
        .map(|t| t.value)
        .collect();
    assert_eq!(
        values,
        vec![
            TokenValue::Number(7.0),
            TokenValue::Number(0.0),
            TokenValue::Number(123456789012345678901234567890.5),
            TokenValue::Number(3.0),
        ]
    );
}

#[test]
fn test_number_takes_one_decimal_point() {
    let tokens = tokenize("1.2.3").unwrap();
    assert_eq!(tokens[0].value, TokenValue::Number(1.2));
    // The second dot is not a recognized character and is skipped.
    assert_eq!(tokens[1].value, TokenValue::Number(3.0));
    assert_eq!(tokens[1].column, 5);
}

#[test]
fn test_minus_is_an_operator_not_a_sign() {
    use TokenKind::*;
    assert_eq!(kinds("-5"), vec![Minus, Number, Eof]);
}

#[test]
fn test_strings_with_both_quotes() {
    let tokens = tokenize(r#""double" 'single'"#).unwrap();
    assert_eq!(tokens[0].text(), "double");
    assert_eq!(tokens[1].text(), "single");
}

#[test]
fn test_escaped_quote() {
    let tokens = tokenize(r#"'chef\'s knife' "say \"hi\"" "a\\b""#).unwrap();
    assert_eq!(tokens[0].text(), "chef's knife");
    assert_eq!(tokens[1].text(), "say \"hi\"");
    // Only the matching quote can be escaped.
    assert_eq!(tokens[2].text(), "a\\\\b");
}

#[test]
fn test_other_quote_inside_string() {
    let tokens = tokenize(r#""it's""#).unwrap();
    assert_eq!(tokens[0].text(), "it's");
}

#[test]
fn test_unterminated_string() {
    let err = tokenize("add(\"flour, 200);").unwrap_err();
    assert_eq!(err, LexError::UnterminatedString { line: 1, column: 5 });
}

#[test]
fn test_multiline_string_keeps_start_line() {
    let tokens = tokenize("\"a\nb\" x").unwrap();
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_keywords_are_exact() {
    use TokenKind::*;
    assert_eq!(kinds("let letter const constant"), vec![Let, Identifier, Const, Identifier, Eof]);
}

#[test]
fn test_unknown_characters_are_skipped() {
    use TokenKind::*;
    assert_eq!(
        kinds("let x = 5 % 2; @ # $ add(\"é\", 1) 🥞"),
        vec![
            Let, Identifier, Assign, Number, Number, Semicolon, Identifier, LParen, String, Comma,
            Number, RParen, Eof
        ]
    );
}

#[test]
fn test_carriage_returns_are_whitespace() {
    use TokenKind::*;
    assert_eq!(kinds("flip();\r\nserve();\r\n"), vec![
        Identifier, LParen, RParen, Semicolon, Newline, Identifier, LParen, RParen, Semicolon,
        Newline, Eof
    ]);
}
