use common_framework::{Buffer, BufferView, Cursor, ScanDirection, TextSpan};
use lexer_framework::{Action, Lexer, Matcher, Token, TransitionTable};
use parser_framework::{ParseTable, Parser, SideChannel, Termination, Transition};
use pipeline_core::{parse_text, Pipeline, ScanReport};
use rstest::rstest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum LexState {
    Default,
    Word,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Kind {
    Word,
    Plus,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ParseState {
    Words,
}

fn lexer_table() -> TransitionTable<LexState, Kind> {
    TransitionTable::new(LexState::Default, LexState::Done)
        .rule(LexState::Default, Matcher::EndOfStream, Action::Finish(Kind::End))
        .rule(LexState::Default, Matcher::Class(char::is_alphabetic), Action::Enter(LexState::Word))
        .rule(LexState::Default, Matcher::Char('+'), Action::Emit(Kind::Plus))
        .rule(LexState::Default, Matcher::Any, Action::Discard)
        .rule(LexState::Word, Matcher::Class(char::is_alphabetic), Action::Extend)
        .rule(LexState::Word, Matcher::Any, Action::EmitBefore(Kind::Word, LexState::Default))
}

fn words_until_plus<D>() -> ParseTable<ParseState, Kind, D> {
    let mut table = ParseTable::new();
    table.on(ParseState::Words, Kind::Word, Transition::Join);
    table
}

#[rstest]
#[case::forward(Cursor::origin(), ScanDirection::Forward, TextSpan::on_row(0, 0, 5))]
#[case::backward(Cursor::new(0, 9), ScanDirection::Backward, TextSpan::on_row(0, 8, 10))]
fn test_scan_stops_at_plus(
    #[case] start: Cursor,
    #[case] direction: ScanDirection,
    #[case] expected: TextSpan,
) {
    let buffer = Buffer::new("ab cd + ef");
    let lexer_table = lexer_table();
    let parser_table = words_until_plus::<()>();
    let mut lexer = Lexer::new(&lexer_table, direction);
    let mut parser = Parser::new(&parser_table, ParseState::Words, ());
    let report = parse_text(&mut lexer, &mut parser, &buffer, start);
    assert_eq!(
        report,
        ScanReport {
            span: Some(expected),
            termination: Termination::NoTransition,
        }
    );
}

#[test]
fn test_scan_reports_exhausted_lexer() {
    let buffer = Buffer::new("ab cd");
    let lexer_table = lexer_table();
    let mut parser_table = words_until_plus::<()>();
    parser_table.on(ParseState::Words, Kind::End, Transition::Join);
    let mut lexer = Lexer::new(&lexer_table, ScanDirection::Backward);
    let mut parser = Parser::new(&parser_table, ParseState::Words, ());
    let report = parse_text(&mut lexer, &mut parser, &buffer, buffer.last_cursor());
    assert_eq!(report.termination, Termination::Exhausted);
    assert_eq!(
        report.span,
        Some(TextSpan::new(Cursor::BeforeStart, Cursor::new(0, 5)))
    );
}

#[test]
fn test_scan_across_lines() {
    let buffer = Buffer::new("ab\ncd\n+");
    let lexer_table = lexer_table();
    let parser_table = words_until_plus::<()>();
    let mut lexer = Lexer::new(&lexer_table, ScanDirection::Forward);
    let mut parser = Parser::new(&parser_table, ParseState::Words, ());
    let report = parse_text(&mut lexer, &mut parser, &buffer, Cursor::origin());
    assert_eq!(
        report.span,
        Some(TextSpan::new(Cursor::origin(), Cursor::new(1, 2)))
    );
    assert_eq!(buffer.text(&report.span.unwrap_or(TextSpan::empty(Cursor::origin()))), "ab\ncd");
}

#[derive(Debug, Default)]
struct Count(usize);

impl SideChannel<Kind> for Count {
    fn observe(&mut self, _token: &Token<Kind>) {
        self.0 += 1;
    }
}

#[test]
fn test_pipeline_exposes_parser_after_run() {
    let buffer = Buffer::new("one two three + four");
    let lexer_table = lexer_table();
    let parser_table = words_until_plus::<Count>();
    let mut pipeline = Pipeline::new(
        Lexer::new(&lexer_table, ScanDirection::Forward),
        Parser::new(&parser_table, ParseState::Words, Count::default()),
    );
    let report = pipeline.run(&buffer, Cursor::new(0, 4));
    assert_eq!(report.span, Some(TextSpan::on_row(0, 4, 13)));
    assert_eq!(pipeline.parser().data().0, 2);
    assert_eq!(pipeline.into_parser().state(), ParseState::Words);
}

#[rstest]
#[case::forward(Cursor::origin(), ScanDirection::Forward)]
#[case::backward(Cursor::new(0, 1), ScanDirection::Backward)]
fn test_scan_ends_when_cursor_stops_moving(
    #[case] start: Cursor,
    #[case] direction: ScanDirection,
) {
    // Words never end: no rule for the end of stream.
    let lexer_table: TransitionTable<LexState, Kind> =
        TransitionTable::new(LexState::Default, LexState::Done)
            .rule(
                LexState::Default,
                Matcher::Class(char::is_alphabetic),
                Action::Enter(LexState::Word),
            )
            .rule(LexState::Word, Matcher::Class(char::is_alphabetic), Action::Extend);
    let buffer = Buffer::new("ab");
    let parser_table = words_until_plus::<()>();
    let mut lexer = Lexer::new(&lexer_table, direction);
    let mut parser = Parser::new(&parser_table, ParseState::Words, ());
    let report = parse_text(&mut lexer, &mut parser, &buffer, start);
    assert_eq!(
        report,
        ScanReport {
            span: None,
            termination: Termination::Exhausted,
        }
    );
    assert!(!lexer.is_finished());
}
