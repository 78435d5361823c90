//! Tests for stack trace formatting

use spyglass_core::types::{StackFrameRecord, StackTrace};
use spyglass_core::{Introspector, LineSink, RenderConfig, WriterSink};

fn frames(texts: &[&str]) -> Vec<StackFrameRecord>
{
    texts.iter().copied().map(StackFrameRecord::from).collect()
}

#[test]
fn test_indentation_flips_between_groups()
{
    let lines = Introspector::new().format_stack(&frames(&["a.b.Foo.m1", "a.b.Foo.m2", "c.d.Bar.m3", "a.b.Foo.m4"]));
    assert_eq!(lines, ["a.b.Foo.m1", "a.b.Foo.m2", "\tc.d.Bar.m3", "a.b.Foo.m4"]);
}

#[test]
fn test_grouping_compares_with_previous_frame_only()
{
    // The key is compared with the frame directly above, not the first one.
    let lines = Introspector::new().format_stack(&frames(&[
        "java.lang.Thread.run(Thread.java:748)",
        "com.acme.Worker.loop(Worker.java:40)",
        "com.acme.Worker.step(Worker.java:52)",
        "com.acme.Task.call(Task.java:9)",
        "org.junit.Runner.run(Runner.java:1)",
    ]));
    assert_eq!(
        lines,
        [
            "java.lang.Thread.run(Thread.java:748)",
            "\tcom.acme.Worker.loop(Worker.java:40)",
            "\tcom.acme.Worker.step(Worker.java:52)",
            "\tcom.acme.Task.call(Task.java:9)",
            "org.junit.Runner.run(Runner.java:1)",
        ]
    );
}

#[test]
fn test_single_dot_frames_group_on_first_qualifier()
{
    let lines = Introspector::new().format_stack(&frames(&["Main.main", "Main.helper", "Util.run"]));
    assert_eq!(lines, ["Main.main", "Main.helper", "\tUtil.run"]);
}

#[test]
fn test_frames_without_separator()
{
    let lines = Introspector::new().format_stack(&frames(&["main", "main", "start"]));
    assert_eq!(lines, ["main", "main", "\tstart"]);
}

#[test]
fn test_rust_paths_with_custom_separator()
{
    let introspector = Introspector::with_config(RenderConfig::default().with_qualifier_separator("::"));
    let lines = introspector.format_stack(&frames(&[
        "spyglass_core::introspector::Introspector::format_stack",
        "spyglass_core::introspector::Introspector::write_stack",
        "spyglass::main",
        "std::rt::lang_start",
    ]));
    assert_eq!(
        lines,
        [
            "spyglass_core::introspector::Introspector::format_stack",
            "spyglass_core::introspector::Introspector::write_stack",
            "\tspyglass::main",
            "std::rt::lang_start",
        ]
    );
}

#[test]
fn test_custom_indent()
{
    let introspector = Introspector::with_config(RenderConfig::default().with_indent("  "));
    let lines = introspector.format_stack(&frames(&["a.b.X.m", "c.d.Y.m"]));
    assert_eq!(lines, ["a.b.X.m", "  c.d.Y.m"]);
}

#[test]
fn test_state_does_not_leak_between_calls()
{
    let introspector = Introspector::new();
    let input = frames(&["a.b.X.m", "c.d.Y.m"]);

    let first = introspector.format_stack(&input);
    let second = introspector.format_stack(&input);
    assert_eq!(first, second);
    assert_eq!(second, ["a.b.X.m", "\tc.d.Y.m"]);
}

#[test]
fn test_write_stack_exact_bytes()
{
    let mut sink = WriterSink::new(Vec::new());
    Introspector::new()
        .write_stack(&frames(&["a.b.X.m", "c.d.Y.m"]), Some(&mut sink))
        .unwrap();

    assert_eq!(sink.into_inner(), b"--- starta.b.X.m\tc.d.Y.m--- end\n");
}

#[test]
fn test_write_stack_line_sink()
{
    let mut sink = LineSink::new(Vec::new());
    Introspector::new()
        .write_stack(&frames(&["a.b.X.m", "c.d.Y.m"]), Some(&mut sink))
        .unwrap();

    assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "--- start\na.b.X.m\n\tc.d.Y.m\n--- end\n");
}

#[test]
fn test_write_stack_empty_frames()
{
    let mut sink: Vec<String> = Vec::new();
    Introspector::new().write_stack(&[], Some(&mut sink)).unwrap();
    assert_eq!(sink, ["--- start", "--- end", "\n"]);
}

#[test]
fn test_write_stack_without_sink()
{
    assert!(Introspector::new().write_stack(&frames(&["a.b.X.m"]), None).is_ok());
}

#[test]
fn test_demangled_frames_group_by_path()
{
    let trace: StackTrace = [
        "_ZN4core3fmt5write17h0123456789abcdefE",
        "_ZN4core3fmt9Formatter3pad17h0123456789abcdefE",
        "_ZN3std2io5stdio6_print17h0123456789abcdefE",
    ]
    .into_iter()
    .map(|text| StackFrameRecord::new(text).demangled())
    .collect();

    let introspector = Introspector::with_config(RenderConfig::default().with_qualifier_separator("::"));
    let lines = introspector.format_stack(trace.frames());
    assert_eq!(lines, ["core::fmt::write", "core::fmt::Formatter::pad", "\tstd::io::stdio::_print"]);
}
