use clap::Parser;

/// Command-line surface for the drill.
///
/// The drill itself takes no flags, environment variables, or files; clap
/// still provides `--help` and `--version`.
#[derive(Parser)]
#[command(name = "typedrill")]
#[command(about = "A quick interactive console drill for revising primitive data types")]
#[command(version)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_parses() {
        let result = Cli::try_parse_from(["typedrill"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = Cli::try_parse_from(["typedrill", "--interactive"]);
        assert!(result.is_err());
    }
}
