//! Binds a small login configuration to command-line flags.
//!
//! ```text
//! cargo run -p tag_args --example login -- --user ada --port 2222 -v
//! ```
//!
//! Set `RUST_LOG=tag_args=debug` to see each flag as it is bound.

use clap::Command;
use tag_args::{
    AbortOnMisconfiguration, TaggedFields, attach_bool_arg, attach_int_arg, attach_string_arg,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, TaggedFields)]
struct LoginArgs {
    #[flag(arg = "required=true,longname=user,shortname=u", help = "account to log in as")]
    user_name: String,
    #[flag(arg = "defaultvalue=example.org,shortname=s", help = "server to contact")]
    host: String,
    #[flag(arg = "defaultvalue=22,shortname=p", help = "ssh port")]
    port: i64,
    #[flag(arg = "defaultvalue=false,shortname=v", help = "print every step")]
    verbose: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut command = Command::new("login").about("Log in to a remote host");
    let user = attach_string_arg::<LoginArgs, _>(&mut command, "user_name", None).or_abort();
    let host = attach_string_arg::<LoginArgs, _>(&mut command, "host", None).or_abort();
    let port = attach_int_arg::<LoginArgs, _>(&mut command, "port").or_abort();
    let verbose = attach_bool_arg::<LoginArgs, _>(&mut command, "verbose").or_abort();

    let matches = command.get_matches();
    let mut args = LoginArgs::default();
    user.assign(&matches, &mut args.user_name);
    host.assign(&matches, &mut args.host);
    port.assign(&matches, &mut args.port);
    verbose.assign(&matches, &mut args.verbose);

    tracing::info!(?args, "parsed login arguments");
}
