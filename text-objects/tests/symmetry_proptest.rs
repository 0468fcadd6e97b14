//! Property tests: lexing forward and lexing backward agree.

use common_framework::{Buffer, BufferView, Cursor, ScanDirection};
use proptest::prelude::*;
use text_objects::{tokenize, LexerOptions, Token, TokenKind};

fn identifier() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,6}"
}

fn punctuation() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "{", "}", "[", "]", "(", ")", ",", ";", ":", "*", "<", ">", "->", "-", "/", "=", "&",
    ])
    .prop_map(str::to_owned)
}

fn string_literal() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => "[a-z /]".prop_map(|s: String| s),
            1 => Just("\\\"".to_owned()),
            1 => Just("\\n".to_owned()),
        ],
        0..6,
    )
    .prop_map(|parts| format!("\"{}\"", parts.concat()))
}

/// Rows after the first start inside the comment, so they stay free of `/`.
fn block_comment() -> impl Strategy<Value = String> {
    ("[a-z /]{0,8}", "(\n[a-z ]{0,4}){0,2}")
        .prop_map(|(first, rest)| format!("/*{first}{rest}*/"))
}

fn line_comment() -> impl Strategy<Value = String> {
    "[a-z /\"]{0,10}".prop_map(|text| format!("//{text}"))
}

/// Whitespace-separated pieces; a line comment always ends its line.
fn source() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        4 => identifier().prop_map(|s| (s, false)),
        3 => punctuation().prop_map(|s| (s, false)),
        1 => string_literal().prop_map(|s| (s, false)),
        1 => block_comment().prop_map(|s| (s, false)),
        1 => line_comment().prop_map(|s| (s, true)),
    ];
    let separator = prop::sample::select(vec![" ", "  ", "\n", " \n "]);
    prop::collection::vec((piece, separator), 0..24).prop_map(|pieces| {
        let mut text = String::new();
        for ((piece, ends_line), separator) in pieces {
            text.push_str(&piece);
            text.push_str(if ends_line { "\n" } else { separator });
        }
        text
    })
}

fn without_end(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| token.kind != TokenKind::End)
        .collect()
}

proptest! {
    #[test]
    fn test_forward_equals_reversed_backward(text in source()) {
        let buffer = Buffer::new(&text);
        let options = LexerOptions::default();
        let forward = tokenize(&buffer, Cursor::origin(), ScanDirection::Forward, options);
        let backward = tokenize(&buffer, buffer.last_cursor(), ScanDirection::Backward, options);
        let forward = without_end(forward);
        let mut backward = without_end(backward);
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn test_exactly_one_end_token(text in source()) {
        let buffer = Buffer::new(&text);
        for (direction, start) in [
            (ScanDirection::Forward, Cursor::origin()),
            (ScanDirection::Backward, buffer.last_cursor()),
        ] {
            let tokens = tokenize(&buffer, start, direction, LexerOptions::default());
            let ends = tokens.iter().filter(|token| token.kind == TokenKind::End).count();
            prop_assert_eq!(ends, 1);
            prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::End));
        }
    }

    #[test]
    fn test_identifier_spans_materialise_as_words(text in source()) {
        let buffer = Buffer::new(&text);
        let options = LexerOptions::default();
        let tokens = tokenize(&buffer, Cursor::origin(), ScanDirection::Forward, options);
        for token in tokens.iter().filter(|token| token.kind == TokenKind::Identifier) {
            let word = buffer.text(&token.span);
            prop_assert!(!word.is_empty());
            prop_assert!(word.chars().all(|ch| ch.is_alphanumeric() || ch == '_'));
            prop_assert!(TokenKind::keyword(&word).is_none());
        }
    }
}
