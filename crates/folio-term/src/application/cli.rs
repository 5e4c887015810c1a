use clap::Arg;
use clap::Command;

use crate::configuration::parse_millis;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

fn millis(val: &str) -> Result<String, std::num::ParseIntError> {
    parse_millis(val)?;
    return Ok(val.trim().to_string());
}

fn arg(key: ConfigKey, env: &str, help: &str) -> Arg {
    let mut arg = Arg::new(key.to_string())
        .long(key.to_string())
        .env(env.to_string())
        .num_args(1)
        .help(format!("{help} [default: {}]", Config::default(key)));

    if key.is_duration() {
        arg = arg.value_parser(millis);
    }

    return arg;
}

/// Console flags, one per `ConfigKey`. Binaries extend this command with
/// their own flags.
pub fn build() -> Command {
    return Command::new("folio")
        .about("A terminal-styled portfolio console")
        .arg(
            arg(
                ConfigKey::ConfigFile,
                "FOLIO_CONFIG_FILE",
                "Path to the TOML configuration file",
            )
            .short('c'),
        )
        .arg(
            arg(
                ConfigKey::DocumentUrl,
                "FOLIO_DOCUMENT_URL",
                "Where the portfolio document is read from: an http(s) URL or a file path",
            )
            .short('u'),
        )
        .arg(arg(
            ConfigKey::TypingDelay,
            "FOLIO_TYPING_DELAY",
            "Delay between typed characters, in milliseconds",
        ))
        .arg(arg(
            ConfigKey::ProgressDelay,
            "FOLIO_PROGRESS_DELAY",
            "Delay between progress dots while the portfolio loads, in milliseconds",
        ))
        .arg(arg(
            ConfigKey::FetchTimeout,
            "FOLIO_FETCH_TIMEOUT",
            "Request timeout for fetching the portfolio, in milliseconds",
        ));
}
