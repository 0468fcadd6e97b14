use common_framework::{Buffer, Cursor, TextSpan};
use rstest::rstest;
use text_objects::type_expr::detect_type;

#[rstest]
#[case::builtin(2, "int test", 0, 3)]
#[case::qualified(2, "std::string test", 0, 11)]
#[case::template(2, "std::map<int, int> test", 0, 18)]
#[case::template_argument(11, "std::map<int, int> test", 9, 12)]
#[case::nested_templates(2, "std::map<pair<a, b>, pair<a, pair<d, e>, c>> test", 0, 44)]
#[case::reference(2, "SomeType& test", 0, 8)]
#[case::after_const(9, "const SomeType& test", 6, 14)]
#[case::global_namespace(9, "const ::SomeType& test", 6, 16)]
#[case::pointer_arguments(3, "std::pair<A*, B*> test", 0, 17)]
#[case::right_of_assignment(11, "auto var = SomeType()", 11, 19)]
#[case::underscore(2, "some_type test", 0, 9)]
fn test_type(#[case] column: usize, #[case] text: &str, #[case] start: usize, #[case] end: usize) {
    let buffer = Buffer::new(text);
    assert_eq!(
        detect_type(Cursor::new(0, column), &buffer),
        Some(TextSpan::on_row(0, start, end))
    );
}

#[test]
fn test_type_stops_at_line_break() {
    let buffer = Buffer::new("std::string\ntest");
    assert_eq!(
        detect_type(Cursor::new(0, 2), &buffer),
        Some(TextSpan::on_row(0, 0, 11))
    );
}

#[rstest]
#[case::qualified("std::string test", 0, 11)]
#[case::global_namespace("const ::SomeType& test", 6, 16)]
#[case::trailing_comment("std::string s; // name", 0, 11)]
fn test_every_cursor(#[case] text: &str, #[case] start: usize, #[case] end: usize) {
    let buffer = Buffer::new(text);
    let expected = TextSpan::on_row(0, start, end);
    for cursor in expected.iter(&buffer) {
        assert_eq!(detect_type(cursor, &buffer), Some(expected), "cursor {cursor} in {text:?}");
    }
}
