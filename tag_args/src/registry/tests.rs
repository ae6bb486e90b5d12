//! Unit tests for the `clap::Command` registry and the `Flag` handle.

use clap::Command;
use clap::error::ErrorKind;
use rstest::{fixture, rstest};

use super::{Flag, FlagDefinition, FlagRegistry};
use crate::error::RegistryError;

#[fixture]
fn command() -> Command {
    Command::new("demo").no_binary_name(true)
}

fn definition<T>(
    long_name: &str,
    short_name: Option<char>,
    default: Option<T>,
) -> FlagDefinition<T> {
    FlagDefinition {
        long_name: long_name.to_owned(),
        short_name,
        default,
        help: format!("optional: {long_name}"),
    }
}

#[rstest]
fn string_flag_reads_long_and_short_forms(mut command: Command) {
    assert_eq!(
        command.add_string_flag(definition("userName", Some('u'), None)),
        Ok(())
    );
    let flag = Flag::<String>::new("userName".into(), Some('u'), false, None);

    let long = command.clone().try_get_matches_from(["--userName", "alice"]);
    assert_eq!(long.ok().and_then(|m| flag.get(&m)), Some("alice".to_owned()));

    let short = command.clone().try_get_matches_from(["-u", "bob"]);
    assert_eq!(short.ok().and_then(|m| flag.get(&m)), Some("bob".to_owned()));

    let absent = command.try_get_matches_from(Vec::<String>::new());
    assert_eq!(absent.ok().map(|m| flag.value(&m)), Some(String::new()));
}

#[rstest]
#[case::absent(&[], Some(8080))]
#[case::explicit(&["--port", "9090"], Some(9090))]
#[case::negative(&["--port", "-1"], Some(-1))]
fn int_flag_uses_default_until_given(
    mut command: Command,
    #[case] args: &[&str],
    #[case] expected: Option<i64>,
) {
    assert_eq!(command.add_int_flag(definition("port", None, Some(8080))), Ok(()));
    let flag = Flag::new("port".into(), None, false, Some(8080_i64));
    let matches = command.try_get_matches_from(args.iter().copied());
    assert_eq!(matches.ok().and_then(|m| flag.get(&m)), expected);
}

#[rstest]
#[case::absent(&[], false)]
#[case::bare(&["--verbose"], true)]
#[case::short(&["-v"], true)]
#[case::explicit_false(&["--verbose=false"], false)]
#[case::literal_one(&["--verbose=1"], true)]
fn bool_flag_accepts_bare_and_literal_forms(
    mut command: Command,
    #[case] args: &[&str],
    #[case] expected: bool,
) {
    assert_eq!(
        command.add_bool_flag(definition("verbose", Some('v'), Some(false))),
        Ok(())
    );
    let flag = Flag::<bool>::new("verbose".into(), Some('v'), false, Some(false));
    let matches = command.try_get_matches_from(args.iter().copied());
    assert_eq!(matches.ok().map(|m| flag.value(&m)), Some(expected));
}

#[rstest]
fn bool_flag_rejects_unknown_literals(mut command: Command) {
    assert_eq!(command.add_bool_flag(definition("verbose", None, None)), Ok(()));
    let err = command.try_get_matches_from(["--verbose=yes"]).err();
    assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::ValueValidation));
}

#[rstest]
fn duplicate_long_names_are_rejected(mut command: Command) {
    assert_eq!(command.add_int_flag(definition("port", None, None)), Ok(()));
    assert_eq!(
        command.add_string_flag(definition("port", None, None)),
        Err(RegistryError::DuplicateLongName {
            long_name: "port".into()
        })
    );
}

#[rstest]
fn duplicate_short_names_are_rejected(mut command: Command) {
    assert_eq!(command.add_int_flag(definition("port", Some('p'), None)), Ok(()));
    assert_eq!(
        command.add_string_flag(definition("path", Some('p'), None)),
        Err(RegistryError::DuplicateShortName {
            long_name: "path".into(),
            short_name: 'p',
        })
    );
}

#[rstest]
fn mark_required_needs_a_registered_flag(mut command: Command) {
    assert_eq!(
        command.mark_flag_required("missing"),
        Err(RegistryError::UnknownFlag {
            long_name: "missing".into()
        })
    );
}

#[rstest]
fn required_flags_must_be_supplied(mut command: Command) {
    assert_eq!(
        command.add_string_flag(definition("token", None, Some("unused".to_owned()))),
        Ok(())
    );
    assert_eq!(command.mark_flag_required("token"), Ok(()));
    let required = command
        .get_arguments()
        .find(|arg| arg.get_id().as_str() == "token")
        .map(clap::Arg::is_required_set);
    assert_eq!(required, Some(true));

    let err = command.try_get_matches_from(Vec::<String>::new()).err();
    assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::MissingRequiredArgument));
}

#[rstest]
fn assign_writes_into_target(mut command: Command) {
    assert_eq!(
        command.add_string_flag(definition("host", None, Some("localhost".to_owned()))),
        Ok(())
    );
    let flag = Flag::new("host".into(), None, false, Some("localhost".to_owned()));
    let mut host = String::from("stale");
    if let Ok(matches) = command.try_get_matches_from(Vec::<String>::new()) {
        flag.assign(&matches, &mut host);
    }
    assert_eq!(host, "localhost");
    assert_eq!(flag.default_value().map(String::as_str), Some("localhost"));
}

#[rstest]
fn short_h_keeps_long_help(mut command: Command) {
    assert_eq!(command.add_string_flag(definition("host", Some('h'), None)), Ok(()));
    let flag = Flag::<String>::new("host".into(), Some('h'), false, None);

    let short = command.clone().try_get_matches_from(["-h", "db"]);
    assert_eq!(short.ok().and_then(|m| flag.get(&m)), Some("db".to_owned()));

    let help = command.try_get_matches_from(["--help"]).err();
    assert_eq!(help.map(|e| e.kind()), Some(ErrorKind::DisplayHelp));
}

#[rstest]
fn long_help_flag_replaces_built_in(mut command: Command) {
    assert_eq!(command.add_bool_flag(definition("help", None, Some(false))), Ok(()));
    let flag = Flag::<bool>::new("help".into(), None, false, Some(false));

    let long = command.clone().try_get_matches_from(["--help"]);
    assert_eq!(long.ok().map(|m| flag.value(&m)), Some(true));

    let short = command.try_get_matches_from(["-h"]).err();
    assert_eq!(short.map(|e| e.kind()), Some(ErrorKind::UnknownArgument));
}

#[rstest]
fn long_help_flag_replaces_stand_in(mut command: Command) {
    assert_eq!(command.add_string_flag(definition("host", Some('h'), None)), Ok(()));
    assert_eq!(command.add_bool_flag(definition("help", None, None)), Ok(()));
    let help_args = command
        .get_arguments()
        .filter(|arg| arg.get_id().as_str() == "help")
        .count();
    assert_eq!(help_args, 1);

    let flag = Flag::<bool>::new("help".into(), None, false, None);
    let matches = command.try_get_matches_from(["-h", "db", "--help=false"]);
    assert_eq!(matches.ok().map(|m| flag.value(&m)), Some(false));
}

#[rstest]
fn second_short_h_is_a_duplicate(mut command: Command) {
    assert_eq!(command.add_string_flag(definition("host", Some('h'), None)), Ok(()));
    assert_eq!(
        command.add_string_flag(definition("hint", Some('h'), None)),
        Err(RegistryError::DuplicateShortName {
            long_name: "hint".into(),
            short_name: 'h',
        })
    );
}

#[test]
fn short_capital_v_keeps_long_version() {
    let mut command = Command::new("demo").no_binary_name(true).version("1.2.3");
    assert_eq!(command.add_bool_flag(definition("verify", Some('V'), None)), Ok(()));
    let flag = Flag::<bool>::new("verify".into(), Some('V'), false, None);

    let short = command.clone().try_get_matches_from(["-V"]);
    assert_eq!(short.ok().map(|m| flag.value(&m)), Some(true));

    let version = command.try_get_matches_from(["--version"]).err();
    assert_eq!(version.map(|e| e.kind()), Some(ErrorKind::DisplayVersion));
}

#[rstest]
fn version_flag_is_free_without_a_version(mut command: Command) {
    assert_eq!(command.add_bool_flag(definition("version", Some('V'), None)), Ok(()));
    let flag = Flag::<bool>::new("version".into(), Some('V'), false, None);
    let matches = command.try_get_matches_from(["--version"]);
    assert_eq!(matches.ok().map(|m| flag.value(&m)), Some(true));
}
