use runecomb::prelude::*;
use runecomb::{ParseError, Source};

fn apply(op: char, left: i64, right: i64) -> i64 {
    match op {
        '+' => left + right,
        '-' => left - right,
        '*' => left * right,
        '/' => left / right,
        _ => unreachable!("operator parser only accepts + - * /"),
    }
}

fn integer() -> impl Parser<Output = i64> + Clone {
    token(number()).map(|digits: String| digits.parse::<i64>().unwrap())
}

fn expression() -> BoxedParser<'static, i64> {
    let factor = integer().or(between(
        token(is_char('(')),
        lazy(expression),
        token(is_char(')')),
    ));
    let term = x_chain_left(token(chars_in(['*', '/'])), factor, apply);
    x_chain_left(token(chars_in(['+', '-'])), term, apply).boxed()
}

fn evaluate(text: &str) -> Result<i64, ParseError> {
    runecomb::parse(expression(), text)
}

#[test]
fn test_arithmetic_precedence() {
    assert_eq!(evaluate("1 + 2 * 3").unwrap(), 7);
    assert_eq!(evaluate("(1 + 2) * 3").unwrap(), 9);
    assert_eq!(evaluate("10 - 4 - 3").unwrap(), 3);
    assert_eq!(evaluate("  2 * (3 + 4) - 5  ").unwrap(), 9);
    assert_eq!(evaluate("100 / 10 / 5").unwrap(), 2);
}

#[test]
fn test_arithmetic_nesting() {
    assert_eq!(evaluate("((((1))))").unwrap(), 1);
    assert_eq!(evaluate("(1 + (2 * (3 + (4 - 1))))").unwrap(), 13);
}

#[test]
fn test_arithmetic_grammar_is_reusable() {
    let grammar = expression();
    for (text, expected) in [("1+1", 2), ("2*2*2", 8), ("(9)", 9)] {
        let source = Source::new(text);
        let (value, rest) = grammar.parse(source.cursor()).unwrap();
        assert_eq!(value, expected);
        assert!(rest.is_end());
    }
}

#[test]
fn test_arithmetic_missing_operand() {
    let error = evaluate("1 + * 2").unwrap_err();

    assert_eq!(error.message, "unexpected '*'");
    assert_eq!(error.position, 4);
    assert_eq!(error.line, 1);
    assert_eq!(error.column, 5);
    assert!(error.expectations.contains(&"numeric character".to_string()));
    assert!(error.expectations.contains(&"(".to_string()));
}

#[test]
fn test_arithmetic_unclosed_parenthesis() {
    let error = evaluate("(1 + 2").unwrap_err();

    assert_eq!(error.message, "unexpected end of input");
    assert_eq!(error.position, 6);
    assert!(error.expectations.contains(&")".to_string()));
}

#[test]
fn test_arithmetic_trailing_input() {
    let error = evaluate("1 + 2 x").unwrap_err();

    // reported where the whole expression started
    assert_eq!(error.position, 0);
    assert_eq!(
        error.to_string(),
        "unexpected 'x' at line 1, column 1; expected one of: end of input"
    );
}

fn inline_space() -> impl Parser<Output = Vec<char>> + Clone {
    many(chars_in([' ', '\t']))
}

fn record() -> impl Parser<Output = (String, String)> + Clone {
    let key = letter()
        .once()
        .concat(many(letter_or_digit().or(is_char('_'))))
        .text()
        .named("key");
    key.select_many(
        |_| {
            between(inline_space(), is_char('='), inline_space())
                .then(|_| text(at_least_once(char_except('\n'))).named("value"))
        },
        |key, value| (key, value),
    )
}

fn document() -> impl Parser<Output = Vec<(String, String)>> {
    record().x_separated_by(at_least_once(is_char('\n')))
}

#[test]
fn test_records_parse() {
    let records = runecomb::parse(document(), "name = alice\nage=30\n\ncity =  Zürich").unwrap();

    assert_eq!(
        records,
        vec![
            ("name".to_string(), "alice".to_string()),
            ("age".to_string(), "30".to_string()),
            ("city".to_string(), "Zürich".to_string()),
        ]
    );
}

#[test]
fn test_records_error_location() {
    let text = "name = alice\nage 30\ncity = Oslo";
    let error = runecomb::parse(document(), text).unwrap_err();

    assert_eq!(error.message, "unexpected '3'");
    assert_eq!(error.expectations, vec!["=".to_string()]);
    assert_eq!(error.line, 2);
    assert_eq!(error.column, 5);

    let report = error.report();
    assert!(report.starts_with("unexpected '3' at line 2, column 5; expected one of: ="));
    assert!(report.contains("    1 | name = alice"));
    assert!(report.contains("  > 2 | age 30"));
    assert!(report.contains("            ^--- here"));
    assert!(report.contains("    3 | city = Oslo"));
}

#[test]
fn test_records_missing_value() {
    let error = runecomb::parse(document(), "name =").unwrap_err();

    assert_eq!(error.message, "unexpected end of input");
    assert_eq!(error.expectations, vec!["value".to_string()]);
    assert_eq!(error.column, 7);
}

#[test]
fn test_records_dangling_separator() {
    let error = runecomb::parse(document(), "a = 1\n").unwrap_err();

    assert_eq!(error.line, 2);
    assert_eq!(error.column, 1);
    assert_eq!(error.expectations, vec!["key".to_string()]);
}

#[test]
fn test_keyword_boundaries() {
    let keyword = |word: &'static str| {
        literal(word).select_many(|_| not(letter_or_digit()), |word, ()| word)
    };
    let statement = keyword("let")
        .or(keyword("letter"))
        .or(text(at_least_once(letter())))
        .token();

    assert_eq!(runecomb::parse(&statement, "let").unwrap(), "let");
    assert_eq!(runecomb::parse(&statement, "letter").unwrap(), "letter");
    assert_eq!(runecomb::parse(&statement, " lettuce ").unwrap(), "lettuce");
}

#[test]
fn test_block_comment() {
    let comment = literal("/*")
        .then(|_| any_char().until(literal("*/")))
        .text();

    assert_eq!(runecomb::parse(&comment, "/* a * b */").unwrap(), " a * b ");

    let error = runecomb::parse(&comment, "/* open").unwrap_err();
    assert_eq!(error.message, "unexpected end of input");
}
