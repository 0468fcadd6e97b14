use common_framework::{Cursor, TextSpan};
use lexer_framework::Token;
use parser_framework::{
    ParseContext, ParseStep, ParseTable, Parser, SideChannel, Termination, Transition,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum State {
    Start,
    Inside,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Kind {
    Word,
    Open,
    Close,
    Comma,
    End,
}

const ALL: [Kind; 5] = [Kind::Word, Kind::Open, Kind::Close, Kind::Comma, Kind::End];

fn token(kind: Kind, start: usize, end: usize) -> Token<Kind> {
    Token::new(TextSpan::on_row(0, start, end), kind)
}

fn feed<D: SideChannel<Kind>>(
    parser: &mut Parser<'_, State, Kind, D>,
    tokens: &[Token<Kind>],
) -> Option<Termination> {
    for token in tokens {
        if let ParseStep::Stop(termination) = parser.parse_token(token) {
            return Some(termination);
        }
    }
    None
}

fn bracket_table() -> ParseTable<State, Kind, ()> {
    let mut table = ParseTable::new();
    table
        .on(State::Start, Kind::Open, Transition::JoinTo(State::Inside))
        .on_all_except(State::Inside, &ALL, &[Kind::End], Transition::Join)
        .on(State::Inside, Kind::Open, Transition::Open)
        .on(State::Inside, Kind::Close, Transition::Close(State::Done));
    table
}

#[test]
fn test_missing_transition_terminates() {
    let table = bracket_table();
    let mut parser = Parser::new(&table, State::Start, ());
    assert_eq!(
        parser.parse_token(&token(Kind::Word, 0, 1)),
        ParseStep::Stop(Termination::NoTransition)
    );
    assert_eq!(parser.span(), None);
    assert_eq!(parser.state(), State::Start);
}

#[test]
fn test_nested_brackets_reach_end_state() {
    let table = bracket_table();
    let mut parser = Parser::new(&table, State::Start, ()).with_end_state(State::Done);
    // ( a ( b ) c )
    let tokens = [
        token(Kind::Open, 0, 1),
        token(Kind::Word, 2, 3),
        token(Kind::Open, 4, 5),
        token(Kind::Word, 6, 7),
        token(Kind::Close, 8, 9),
        token(Kind::Word, 10, 11),
        token(Kind::Close, 12, 13),
        token(Kind::Word, 14, 15),
    ];
    assert_eq!(feed(&mut parser, &tokens), Some(Termination::EndState));
    assert_eq!(parser.span(), Some(TextSpan::on_row(0, 0, 13)));
    assert_eq!(parser.level(), 0);
}

#[test]
fn test_close_at_level_zero_does_not_decrement() {
    let mut context = ParseContext::new(());
    assert!(context.close());
    assert_eq!(context.level(), 0);
    context.open();
    assert!(!context.close());
    assert!(context.close());
}

#[test]
fn test_without_end_state_parser_runs_until_no_transition() {
    let table = bracket_table();
    let mut parser = Parser::new(&table, State::Start, ());
    let tokens = [token(Kind::Open, 0, 1), token(Kind::Close, 1, 2), token(Kind::Word, 3, 4)];
    assert_eq!(feed(&mut parser, &tokens), Some(Termination::NoTransition));
    assert_eq!(parser.state(), State::Done);
    assert_eq!(parser.span(), Some(TextSpan::on_row(0, 0, 2)));
}

#[test]
fn test_skip_transitions_do_not_join() {
    let mut table: ParseTable<State, Kind, ()> = ParseTable::new();
    table
        .on(State::Start, Kind::Comma, Transition::SkipTo(State::Inside))
        .on(State::Inside, Kind::Comma, Transition::Skip)
        .on(State::Inside, Kind::Word, Transition::Join);
    let mut parser = Parser::new(&table, State::Start, ());
    let tokens = [token(Kind::Comma, 0, 1), token(Kind::Comma, 1, 2), token(Kind::Word, 3, 6)];
    assert_eq!(feed(&mut parser, &tokens), None);
    assert_eq!(parser.span(), Some(TextSpan::on_row(0, 3, 6)));
}

#[test]
fn test_later_entries_override_earlier_ones() {
    let mut table: ParseTable<State, Kind, ()> = ParseTable::new();
    table
        .on_each(State::Start, &ALL, Transition::Join)
        .on(State::Start, Kind::Comma, Transition::SkipTo(State::Done));
    assert_eq!(table.len(), ALL.len());
    let mut parser = Parser::new(&table, State::Start, ()).with_end_state(State::Done);
    let tokens = [token(Kind::Word, 0, 2), token(Kind::Comma, 2, 3)];
    assert_eq!(feed(&mut parser, &tokens), Some(Termination::EndState));
    assert_eq!(parser.span(), Some(TextSpan::on_row(0, 0, 2)));
}

#[derive(Debug, Default)]
struct Recorder {
    seen: Vec<Kind>,
}

impl SideChannel<Kind> for Recorder {
    fn observe(&mut self, token: &Token<Kind>) {
        self.seen.push(token.kind);
    }
}

#[test]
fn test_side_channel_sees_accepted_tokens_only() {
    let mut table: ParseTable<State, Kind, Recorder> = ParseTable::new();
    table.on_each(State::Start, &[Kind::Word, Kind::Comma], Transition::Join);
    let mut parser = Parser::new(&table, State::Start, Recorder::default());
    let tokens = [token(Kind::Word, 0, 1), token(Kind::Comma, 1, 2), token(Kind::End, 2, 2)];
    assert_eq!(feed(&mut parser, &tokens), Some(Termination::NoTransition));
    assert_eq!(parser.data().seen, vec![Kind::Word, Kind::Comma]);
}

fn count_words(context: &mut ParseContext<usize>, token: &Token<Kind>) -> Option<State> {
    context.data += 1;
    context.join(&token.span);
    (context.data == 2).then_some(State::Done)
}

impl SideChannel<Kind> for usize {}

#[test]
fn test_custom_transition() {
    let mut table: ParseTable<State, Kind, usize> = ParseTable::new();
    table.on(State::Start, Kind::Word, Transition::Custom(count_words));
    let mut parser = Parser::new(&table, State::Start, 0).with_end_state(State::Done);
    let tokens = [token(Kind::Word, 0, 1), token(Kind::Word, 2, 3), token(Kind::Word, 4, 5)];
    assert_eq!(feed(&mut parser, &tokens), Some(Termination::EndState));
    assert_eq!(*parser.data(), 2);
    assert_eq!(
        parser.into_context().span(),
        Some(TextSpan::new(Cursor::origin(), Cursor::new(0, 3)))
    );
}
