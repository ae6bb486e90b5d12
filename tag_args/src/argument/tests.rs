//! Unit tests for the `arg` tag grammar.

use rstest::rstest;

use super::{ArgOptions, Argument, derive_long_name, parse_arg_from_field};
use crate::error::TagError;
use crate::field::FieldSpec;

fn parse(name: &'static str, tag: &'static str) -> Result<Argument, TagError> {
    parse_arg_from_field(&FieldSpec::new(name, tag, ""))
}

#[rstest]
#[case("UserName", "userName")]
#[case("port", "port")]
#[case("ID", "iD")]
#[case("Ünits", "ünits")]
#[case("user_name", "user_name")]
fn long_name_lowercases_first_character(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(derive_long_name(name).as_deref(), Ok(expected));
}

#[rstest]
#[case("")]
#[case("X")]
#[case("é")]
fn short_field_names_are_rejected(#[case] name: &'static str) {
    assert_eq!(
        parse(name, "required=true"),
        Err(TagError::FieldNameTooShort {
            field: name.to_owned()
        })
    );
}

#[test]
fn field_name_is_checked_before_tag() {
    assert!(matches!(
        parse("X", "garbage"),
        Err(TagError::FieldNameTooShort { .. })
    ));
}

#[test]
fn user_name_scenario() {
    let argument = parse("UserName", "required=true,shortname=u");
    assert_eq!(
        argument,
        Ok(Argument {
            required: true,
            long_name: "userName".into(),
            short_name: Some('u'),
            default_value: None,
        })
    );
}

#[rstest]
#[case::empty_tag("", 0)]
#[case::no_equals("required", 0)]
#[case::two_equals("longname=a=b", 0)]
#[case::second_item("required=true,shortname", 1)]
#[case::trailing_comma("required=true,", 1)]
#[case::third_item("required=true,longname=x,,", 2)]
fn malformed_items_report_their_index(#[case] tag: &'static str, #[case] index: usize) {
    assert_eq!(
        parse("Port", tag),
        Err(TagError::MalformedTagItem {
            field: "Port".into(),
            index,
        })
    );
}

#[rstest]
#[case("required=true", true)]
#[case("required=1", true)]
#[case("REQUIRED=T", true)]
#[case("required=false", false)]
#[case("required=true,required=0", false)]
fn required_parses_boolean_literals(#[case] tag: &'static str, #[case] expected: bool) {
    assert_eq!(parse("Name", tag).map(|arg| arg.required), Ok(expected));
}

#[test]
fn required_rejects_non_booleans() {
    assert_eq!(
        parse("Name", "Required=notabool"),
        Err(TagError::InvalidBooleanValue {
            field: "Name".into(),
            key: "Required".into(),
            value: "notabool".into(),
        })
    );
}

#[rstest]
#[case("longname=foo", "foo")]
#[case("longname=foo,longname=bar", "bar")]
#[case("longname=", "name")]
#[case("longname=foo,longname=", "foo")]
#[case("LongName=Host-Name", "Host-Name")]
fn long_name_overrides_apply_in_order(#[case] tag: &'static str, #[case] expected: &str) {
    assert_eq!(
        parse("Name", tag).map(|arg| arg.long_name),
        Ok(expected.to_owned())
    );
}

#[rstest]
#[case("shortname=A", Some('a'))]
#[case("shortname=x", Some('x'))]
#[case("shortname=", None)]
#[case("shortname=a,shortname=", None)]
#[case("ShortName=Ü", Some('ü'))]
fn short_names_are_lowercased(#[case] tag: &'static str, #[case] expected: Option<char>) {
    assert_eq!(parse("Name", tag).map(|arg| arg.short_name), Ok(expected));
}

#[test]
fn short_names_longer_than_one_character_fail() {
    assert_eq!(
        parse("Name", "shortname=ab"),
        Err(TagError::ShortNameTooLong {
            field: "Name".into(),
            key: "shortname".into(),
            value: "ab".into(),
        })
    );
}

#[rstest]
#[case("defaultvalue=", Some(""))]
#[case("defaultvalue=8080", Some("8080"))]
#[case("DefaultValue= spaced ", Some(" spaced "))]
#[case("required=false", None)]
fn default_value_presence_is_tracked(#[case] tag: &'static str, #[case] expected: Option<&str>) {
    let argument = parse("Name", tag);
    assert_eq!(
        argument.as_ref().map(|arg| arg.default_value.as_deref()),
        Ok(expected)
    );
    assert_eq!(
        argument.map(|arg| arg.has_default_value()),
        Ok(expected.is_some())
    );
}

#[test]
fn unknown_keys_are_ignored() {
    assert_eq!(
        parse("Name", "colour=blue,shortname=n"),
        Ok(Argument {
            long_name: "name".into(),
            short_name: Some('n'),
            ..Argument::default()
        })
    );
}

#[test]
fn error_stops_at_first_bad_item() {
    assert!(matches!(
        parse("Name", "shortname=ab,required=maybe"),
        Err(TagError::ShortNameTooLong { .. })
    ));
}

#[test]
fn options_builder_matches_tag() {
    let from_tag = parse("Port", "longname=listen,shortname=P,defaultvalue=80");
    let options = ArgOptions::new()
        .long_name("listen")
        .short_name('P')
        .default_value("80");
    assert_eq!(from_tag, Argument::from_options("Port", &options));
}

#[test]
fn options_with_empty_long_name_keep_derived_name() {
    let options = ArgOptions::new().long_name("");
    assert_eq!(
        Argument::from_options("Port", &options).map(|arg| arg.long_name),
        Ok("port".to_owned())
    );
}

#[test]
fn options_still_validate_field_name() {
    assert!(matches!(
        Argument::from_options("p", &ArgOptions::new()),
        Err(TagError::FieldNameTooShort { .. })
    ));
}
