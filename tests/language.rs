use std::{
    fs,
    io::{self, BufRead, Read, Write},
};

use scopelang::{
    error::RuntimeError,
    interpreter::{evaluator::core::Context, scope::ScopeStack},
    run,
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "sl"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let output = output_of(&script);
        assert_eq!(output, expected, "Script {path:?} produced unexpected output");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn output_of(src: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run(src.as_bytes(), &mut output) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(output).expect("output is UTF-8")
}

fn assert_output(src: &str, expected: &[&str]) {
    let output = output_of(src);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, expected, "Unexpected output for script:\n{src}");
}

fn assert_failure(src: &str) -> String {
    let mut output = Vec::new();
    match run(src.as_bytes(), &mut output) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => {
            assert!(e.downcast_ref::<RuntimeError>().is_some(),
                    "Expected a runtime error, got: {e}");
            String::from_utf8(output).expect("output is UTF-8")
        },
    }
}

#[test]
fn shadowing_restores_outer_value() {
    assert_output("x = 1\nscope {\nx = 2\nprint x\n}\nprint x", &["2", "1"]);
}

#[test]
fn outer_variables_are_visible_until_rebound() {
    assert_output("g = 4\nscope {\nprint g\nscope {\nprint g\ng = 5\nprint g\n}\nprint g\n}",
                  &["4", "4", "5", "4"]);
}

#[test]
fn unbound_print_is_consistent() {
    assert_output("print y\nprint y\nprint y", &["None", "None", "None"]);
}

#[test]
fn assignment_from_unbound_variable_is_skipped() {
    assert_output("x = y\nprint x", &["None"]);
    assert_output("x = 1\nx = y\nprint x", &["1"]);
}

#[test]
fn invalid_lines_are_reported_and_isolated() {
    assert_output("print\nx = 3\nprint x", &["Invalid syntax", "3"]);
    assert_output("=\nfoo bar baz\nprint 1", &["Invalid syntax", "Invalid syntax", "1"]);
    assert_output("scope\nprint 1", &["Invalid syntax", "1"]);
    assert_output("\n   \nprint 2", &["Invalid syntax", "Invalid syntax", "2"]);
}

#[test]
fn tokens_are_separated_by_whitespace_only() {
    assert_output("x=5\nprint x", &["Invalid syntax", "None"]);
    assert_output("  x \t=   5  \nprint\tx", &["5"]);
    assert_output("scope{", &["Invalid syntax"]);
}

#[test]
fn keywords_cannot_be_assigned() {
    assert_output("print = 1\nscope = 2\n= = 3\nprint 4", &["Invalid syntax",
                                                            "Invalid syntax",
                                                            "Invalid syntax",
                                                            "4"]);
}

#[test]
fn keywords_and_braces_are_names_in_value_position() {
    assert_output("x = print\nprint x", &["None"]);
    assert_output("print print\nprint scope\nprint }\nprint =", &["None", "None", "None", "None"]);
}

#[test]
fn braces_can_be_assigned() {
    assert_output("{ = 5\n} = 6\nprint {\nprint }", &["5", "6"]);
    assert_output("{ = 5\nx = {\nprint x", &["5"]);
}

#[test]
fn literal_assignments_round_trip() {
    assert_output("x = 5\nprint x", &["5"]);
    assert_output("x = -3\nprint x", &["-3"]);
    assert_output("x = 0\nprint x", &["0"]);
    assert_output("x = 9223372036854775807\nprint x", &["9223372036854775807"]);
    assert_output("x = -9223372036854775808\nprint x", &["-9223372036854775808"]);
    assert_output("print -42", &["-42"]);
}

#[test]
fn rebinding_in_the_same_scope_overwrites() {
    assert_output("x = 1\nx = 2\nprint x", &["2"]);
    assert_output("scope {\nx = 1\nx = 2\nprint x\n}\nprint x", &["2", "None"]);
}

#[test]
fn scopes_balance() {
    let mut context = Context::new();
    context.scopes.bind("keep", 1);
    let before = context.scopes.clone();

    for depth in 1..=3 {
        context.eval_line("scope {", depth).unwrap();
        context.eval_line(&format!("inner{depth} = {depth}"), depth).unwrap();
        context.eval_line("keep = 0", depth).unwrap();
    }
    assert_eq!(context.scopes.depth(), 4);
    assert_eq!(context.eval_line("print keep", 4).unwrap(), Some("0".to_string()));

    for line in 5..=7 {
        context.eval_line("}", line).unwrap();
    }

    assert_eq!(context.scopes, before);
    assert_eq!(context.eval_line("print inner1", 8).unwrap(), Some("None".to_string()));
    assert_eq!(context.eval_line("print keep", 9).unwrap(), Some("1".to_string()));
}

#[test]
fn invalid_line_leaves_scopes_unchanged() {
    let mut context = Context::new();
    context.eval_line("x = 1", 1).unwrap();
    context.eval_line("scope {", 2).unwrap();
    let before = context.scopes.clone();

    for (line, source) in ["print", "=", "foo bar baz", "x = = 2", "} }"].iter().enumerate() {
        assert_eq!(context.eval_line(source, line + 3).unwrap(),
                   Some("Invalid syntax".to_string()));
    }

    assert_eq!(context.scopes, before);
}

#[test]
fn closing_global_scope_is_error() {
    assert_failure("}");

    let output = assert_failure("print 1\nscope {\n}\n}\nprint 2");
    assert_eq!(output, "1\n");

    let mut context = Context::new();
    assert_eq!(context.eval_line("}", 7), Err(RuntimeError::ScopeUnderflow { line: 7 }));
    assert_eq!(context.scopes, ScopeStack::new());
}

#[test]
fn output_follows_input_order() {
    let src = "a = 1\nprint a\nbad line here\nscope {\nprint a\nb = 2\n}\nprint b\nprint 3";
    assert_output(src, &["1", "Invalid syntax", "1", "None", "3"]);
}

#[test]
fn crlf_line_endings_are_accepted() {
    assert_output("x = 8\r\nprint x\r\n", &["8"]);
}

struct FlushCounter {
    written: Vec<u8>,
    flushes: Vec<usize>,
}

impl Write for FlushCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes.push(self.written.len());
        Ok(())
    }
}

#[test]
fn every_output_line_is_flushed_at_once() {
    let mut output = FlushCounter { written: Vec::new(),
                                    flushes: Vec::new(), };
    let src = "x = 1\nprint x\nscope {\nbad\n}\nprint 22\ny = 3";

    run(src.as_bytes(), &mut output).unwrap();

    assert_eq!(String::from_utf8(output.written).unwrap(), "1\nInvalid syntax\n22\n");
    // One flush per output line, each right after that line was written.
    assert_eq!(output.flushes, vec![2, 17, 20]);
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("input went away"))
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::other("input went away"))
    }

    fn consume(&mut self, _amt: usize) {}
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("output went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("output went away"))
    }
}

fn assert_io_failure(result: Result<(), Box<dyn std::error::Error>>) {
    match result {
        Ok(()) => panic!("Run succeeded but was expected to fail"),
        Err(e) => assert!(e.downcast_ref::<io::Error>().is_some(), "Expected an I/O error, got: {e}"),
    }
}

#[test]
fn unreadable_input_is_error() {
    assert_io_failure(run(FailingReader, &mut Vec::new()));

    let mut output = Vec::new();
    let input: &[u8] = b"print 1\nprint \xff\xfe\nprint 2\n";
    assert_io_failure(run(input, &mut output));
    assert_eq!(output, b"1\n");
}

#[test]
fn unwritable_output_is_error() {
    assert_io_failure(run("print 1".as_bytes(), &mut FailingWriter));
    assert!(run("x = 1\nscope {\n}".as_bytes(), &mut FailingWriter).is_ok());
}
