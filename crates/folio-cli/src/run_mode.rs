use std::net::SocketAddr;

use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Embedded,
    ServerOnly,
    TerminalOnly,
}

impl RunMode {
    /// Resolves the mode flags. No flag means embedded; more than one is an
    /// error.
    pub fn from_flags(embedded: bool, server_only: bool, terminal_only: bool) -> Result<RunMode> {
        let flags_count = [embedded, server_only, terminal_only]
            .iter()
            .filter(|&&x| x)
            .count();
        if flags_count > 1 {
            anyhow::bail!("Conflicting mode flags specified. Only one of --embedded, --server-only, or --terminal-only can be used at a time.");
        }

        if server_only {
            Ok(RunMode::ServerOnly)
        } else if terminal_only {
            Ok(RunMode::TerminalOnly)
        } else {
            Ok(RunMode::Embedded)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RunMode::Embedded => "embedded",
            RunMode::ServerOnly => "server-only",
            RunMode::TerminalOnly => "terminal-only",
        }
    }

    /// Whether the console owns the terminal, so logs must go to a file.
    pub fn has_ui(&self) -> bool {
        !matches!(self, RunMode::ServerOnly)
    }
}

/// Document location for embedded mode. A source configured away from the
/// default wins; otherwise the console reads from the in-process server.
pub fn embedded_document_url(configured: &str, default: &str, addr: SocketAddr) -> String {
    if configured != default {
        return configured.to_string();
    }

    format!("http://{}{}", addr, folio_server::DOCUMENT_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_embedded() {
        assert_eq!(
            RunMode::from_flags(false, false, false).unwrap(),
            RunMode::Embedded
        );
        assert_eq!(
            RunMode::from_flags(false, true, false).unwrap(),
            RunMode::ServerOnly
        );
        assert_eq!(
            RunMode::from_flags(false, false, true).unwrap(),
            RunMode::TerminalOnly
        );
    }

    #[test]
    fn test_conflicting_flags() {
        assert!(RunMode::from_flags(true, true, false).is_err());
        assert!(RunMode::from_flags(false, true, true).is_err());
    }

    #[test]
    fn test_only_server_mode_runs_headless() {
        assert!(RunMode::Embedded.has_ui());
        assert!(RunMode::TerminalOnly.has_ui());
        assert!(!RunMode::ServerOnly.has_ui());
    }

    #[test]
    fn test_embedded_document_url() {
        let default = "http://127.0.0.1:5000/static/portfolio.json";
        let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();

        assert_eq!(
            embedded_document_url(default, default, addr),
            "http://127.0.0.1:8080/static/portfolio.json"
        );
        assert_eq!(
            embedded_document_url("./portfolio.json", default, addr),
            "./portfolio.json"
        );
    }
}
