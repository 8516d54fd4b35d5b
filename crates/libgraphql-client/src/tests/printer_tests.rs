use crate::PrintOptions;
use crate::Printer;

#[test]
fn pretty_block_indents_each_item() {
    let options = PrintOptions::pretty();
    let mut printer = Printer::new(&options);
    printer.push_block(["a", "b"], |printer, item| printer.push_str(item));
    assert_eq!(printer.finish(), "{\n  a\n  b\n}");
}

#[test]
fn nested_blocks_accumulate_indentation() {
    let options = PrintOptions::pretty().with_indent_width(4);
    let mut printer = Printer::new(&options);
    printer.push_block([1], |printer, _| {
        printer.push_str("outer ");
        printer.push_block([2], |printer, _| printer.push_str("inner"));
    });
    assert_eq!(printer.finish(), "{\n    outer {\n        inner\n    }\n}");
}

#[test]
fn compact_block_uses_single_spaces() {
    let options = PrintOptions::compact();
    let mut printer = Printer::new(&options);
    printer.push_block(["a", "b"], |printer, item| printer.push_str(item));
    assert_eq!(printer.finish(), "{ a b }");
}

#[test]
fn empty_block() {
    let options = PrintOptions::pretty();
    let mut printer = Printer::new(&options);
    printer.push_block(Vec::<&str>::new(), |printer, item| printer.push_str(item));
    assert_eq!(printer.finish(), "{\n}");
}

#[test]
fn separated_items() {
    let options = PrintOptions::default();
    let mut printer = Printer::new(&options);
    printer.push_separated(["x", "y", "z"], ", ", |printer, item| printer.push_str(item));
    assert_eq!(printer.finish(), "x, y, z");
}

#[test]
fn definition_separator_depends_on_style() {
    let pretty = PrintOptions::pretty();
    let mut printer = Printer::new(&pretty);
    printer.push_definition_separator();
    assert_eq!(printer.finish(), "\n\n");

    let compact = PrintOptions::compact();
    let mut printer = Printer::new(&compact);
    printer.push_definition_separator();
    assert_eq!(printer.finish(), "\n");
}
