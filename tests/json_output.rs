//! Tests for JSON line output.

use regex::Regex;
use std::sync::Arc;
use taglog::{ColorMode, Context, FixedClock, Format, Logger, MemorySink, Value};

const TS: &str = "2020-02-02T02:02:02Z";

fn setup() -> (Arc<Context>, MemorySink) {
    let sink = MemorySink::new();
    let context = Context::builder()
        .clock(FixedClock::parse(TS).unwrap())
        .format(Format::Json)
        .colors(ColorMode::Never)
        .sink(sink.clone())
        .build();
    (context, sink)
}

#[test]
fn message_only() {
    let (context, sink) = setup();
    let logger = Logger::new(context);

    logger.log().msg("hello");

    assert_eq!(
        sink.contents(),
        "{\"time\":\"2020-02-02T02:02:02Z\",\"message\":\"hello\"}\n"
    );
}

#[test]
fn msgf_formats_arguments() {
    let (context, sink) = setup();
    let logger = Logger::new(context);

    logger.log().msgf(format_args!("now i have {} fingers", 2));

    assert_eq!(
        sink.contents(),
        "{\"time\":\"2020-02-02T02:02:02Z\",\"message\":\"now i have 2 fingers\"}\n"
    );
}

#[test]
#[allow(clippy::approx_constant)]
fn all_value_kinds_in_attachment_order() {
    let (context, sink) = setup();
    let logger = Logger::new(context);
    let err = std::io::Error::other("something happened");

    logger
        .log()
        .str("service", "hello-service")
        .int("items", 12)
        .float("pi", 3.14)
        .err(&err)
        .msg("hello");

    assert_eq!(
        sink.contents(),
        "{\"time\":\"2020-02-02T02:02:02Z\",\"service\":\"hello-service\",\"items\":12,\
         \"pi\":3.14,\"error\":\"something happened\",\"message\":\"hello\"}\n"
    );
}

#[test]
fn duplicate_keys_are_both_written() {
    let (context, sink) = setup();
    let logger = Logger::new(context);

    logger
        .log()
        .str("service", "hello-service")
        .str("service", "same-tag")
        .msg("hello");

    assert_eq!(
        sink.contents(),
        "{\"time\":\"2020-02-02T02:02:02Z\",\"service\":\"hello-service\",\
         \"service\":\"same-tag\",\"message\":\"hello\"}\n"
    );
}

#[test]
fn empty_message_is_empty_string() {
    let (context, sink) = setup();
    Logger::new(context).log().msg("");

    assert_eq!(
        sink.contents(),
        "{\"time\":\"2020-02-02T02:02:02Z\",\"message\":\"\"}\n"
    );
}

#[test]
fn floats_have_no_trailing_zeros() {
    let (context, sink) = setup();
    Logger::new(context)
        .log()
        .float("whole", 12.0)
        .float("tenth", 0.1)
        .float("neg", -2.5)
        .msg("m");

    assert!(
        sink.contents()
            .contains("\"whole\":12,\"tenth\":0.1,\"neg\":-2.5,"),
        "got {}",
        sink.contents()
    );
}

#[test]
fn non_finite_float_degrades_to_placeholder() {
    let (context, sink) = setup();
    Logger::new(context)
        .log()
        .float("ratio", f64::NAN)
        .float("limit", f64::INFINITY)
        .msg("m");

    assert_eq!(
        sink.contents(),
        "{\"time\":\"2020-02-02T02:02:02Z\",\"ratio\":\"<?>\",\"limit\":\"<?>\",\"message\":\"m\"}\n"
    );
}

#[test]
fn generic_tag_accepts_any_value_kind() {
    let (context, sink) = setup();
    Logger::new(context)
        .log()
        .tag("port", 8080_u16)
        .tag("name", "db")
        .tag("err", Value::Error("boom".to_string()))
        .msg("m");

    assert_eq!(
        sink.contents(),
        "{\"time\":\"2020-02-02T02:02:02Z\",\"port\":8080,\"name\":\"db\",\"err\":\"boom\",\"message\":\"m\"}\n"
    );
}

#[test]
fn output_parses_as_strict_json() {
    let (context, sink) = setup();
    let err = std::io::Error::other("bad \"input\"\nline two");

    Logger::new(context)
        .log()
        .str("path", "C:\\temp\\x")
        .str("quote\"key", "tab\there")
        .int("count", -7)
        .float("ratio", 0.25)
        .err(&err)
        .msg("say \"hi\"\u{1}");

    let line = sink.contents();
    assert!(line.ends_with('\n'));
    assert_eq!(line.matches('\n').count(), 1);

    let parsed: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(parsed["time"], TS);
    assert_eq!(parsed["path"], "C:\\temp\\x");
    assert_eq!(parsed["quote\"key"], "tab\there");
    assert_eq!(parsed["count"], -7);
    assert_eq!(parsed["ratio"], 0.25);
    assert_eq!(parsed["error"], "bad \"input\"\nline two");
    assert_eq!(parsed["message"], "say \"hi\"\u{1}");
    assert_eq!(parsed.as_object().unwrap().len(), 7);
}

#[test]
fn base_tags_come_first() {
    let (context, sink) = setup();
    let logger = Logger::builder(context)
        .tag("service", "api")
        .tag("shard", 3)
        .build();

    logger.log().str("user", "ada").msg("login");

    assert_eq!(
        sink.contents(),
        "{\"time\":\"2020-02-02T02:02:02Z\",\"service\":\"api\",\"shard\":3,\
         \"user\":\"ada\",\"message\":\"login\"}\n"
    );
}

#[test]
fn debug_logger_appends_caller_last() {
    let (context, sink) = setup();
    let logger = Logger::builder(context).debug(true).build();

    logger.log().str("k", "v").msg("hello");

    let re = Regex::new(
        r#"^\{"time":"2020-02-02T02:02:02Z","k":"v","message":"hello","caller":"([^"]+\.rs):\d+"\}\n$"#,
    )
    .unwrap();
    let contents = sink.contents();
    let caps = re.captures(&contents).unwrap_or_else(|| panic!("got {contents}"));
    assert_eq!(&caps[1], file!());
}

#[test]
fn debug_entry_matches_normal_entry_plus_caller() {
    let (context, sink) = setup();
    let logger = Logger::builder(context).debug(true).build();

    logger.log().int("n", 1).msg("same");
    logger.debug().int("n", 1).msg("same");

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    let strip = Regex::new(r#","caller":"[^"]+"\}$"#).unwrap();
    assert_eq!(strip.replace(&lines[0], "}"), strip.replace(&lines[1], "}"));
    assert_eq!(
        strip.replace(&lines[1], "}"),
        "{\"time\":\"2020-02-02T02:02:02Z\",\"n\":1,\"message\":\"same\"}"
    );
}

#[test]
fn custom_date_format() {
    let sink = MemorySink::new();
    let context = Context::builder()
        .clock(FixedClock::parse("2020-02-02T02:02:02+01:00").unwrap())
        .date_format(taglog::DateFormat::custom("%Y/%m/%d %H:%M").unwrap())
        .sink(sink.clone())
        .build();

    Logger::new(context).log().msg("x");

    assert_eq!(
        sink.contents(),
        "{\"time\":\"2020/02/02 02:02\",\"message\":\"x\"}\n"
    );
}

#[test]
fn each_record_is_one_line() {
    let (context, sink) = setup();
    let logger = Logger::new(context);

    logger.log().msg("one");
    logger.log().msg("two");
    logger.log().msg("three");

    let lines = sink.lines();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(parsed.get("time").is_some(), "missing time field");
        assert!(parsed.get("message").is_some(), "missing message field");
    }
}
