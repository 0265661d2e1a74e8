use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: keyflux [--config <path>]

Options:
  -c, --config <path>  Firebase config file (default: $KEYFLUX_CONFIG or
                       <config dir>/keyflux/firebase.json)
  -h, --help           Print this help
  -V, --version        Print version";

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Run { config_path: Option<PathBuf> },
    Help,
    Version,
}

/// Parse `std::env::args()`; the first element is the program name.
pub fn parse(args: &[String]) -> Result<CliAction, String> {
    let mut config_path = None;
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliAction::Help),
            "-V" | "--version" => return Ok(CliAction::Version),
            "-c" | "--config" => {
                let path = rest
                    .next()
                    .ok_or_else(|| format!("{} requires a path", arg))?;
                config_path = Some(PathBuf::from(path));
            }
            other => {
                if let Some(path) = other.strip_prefix("--config=") {
                    config_path = Some(PathBuf::from(path));
                } else {
                    return Err(format!("Unexpected argument: {}", other));
                }
            }
        }
    }

    Ok(CliAction::Run { config_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("keyflux")
            .chain(list.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn no_arguments_uses_default_config() {
        assert_eq!(
            parse(&args(&[])),
            Ok(CliAction::Run { config_path: None })
        );
    }

    #[test]
    fn config_flag_accepts_both_forms() {
        let expected = Ok(CliAction::Run {
            config_path: Some(PathBuf::from("/etc/fb.json")),
        });

        assert_eq!(parse(&args(&["--config", "/etc/fb.json"])), expected);
        assert_eq!(parse(&args(&["-c", "/etc/fb.json"])), expected);
        assert_eq!(parse(&args(&["--config=/etc/fb.json"])), expected);
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(parse(&args(&["--help", "--bogus"])), Ok(CliAction::Help));
        assert_eq!(parse(&args(&["-V"])), Ok(CliAction::Version));
    }

    #[test]
    fn rejects_missing_path_and_unknown_flags() {
        assert!(parse(&args(&["--config"])).is_err());
        assert!(parse(&args(&["--verbose"])).is_err());
    }
}
