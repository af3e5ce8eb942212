//! `cyberwatch-api` entrypoint.
//!
//! Prints control and data URLs for the dashboard backend and reads or
//! changes the selected data environment. The environment persists in a
//! small TOML store under the platform data directory unless `--store`
//! names another file.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use cyberwatch::{
    ApiBase, ConfigError, EnvironmentSelector, FileStore, SharedConfig, StoreError, UrlBuilder,
};
use thiserror::Error;

/// Compose Cyberwatch API URLs and manage the selected environment.
#[derive(Parser, Debug)]
#[command(name = "cyberwatch-api")]
#[command(version, about)]
#[command(after_help = concat!(
    "The API base is taken from VITE_API_URL, then `api_base` in ",
    "cyberwatch.toml, then http://127.0.0.1:3001.\n\n",
    "EXAMPLES:\n",
    "    $ cyberwatch-api control /health\n",
    "    $ cyberwatch-api env dev\n",
    "    $ cyberwatch-api data /hosts",
))]
struct ApiCli {
    /// Store file holding the selected environment [default: platform data directory].
    #[arg(long, value_name = "FILE", global = true)]
    store: Option<Utf8PathBuf>,

    /// Project root holding `cyberwatch.toml`.
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    root: Utf8PathBuf,

    #[command(subcommand)]
    command: ApiCommand,
}

#[derive(Subcommand, Debug)]
enum ApiCommand {
    /// Print the selected environment, or select VALUE.
    Env {
        /// Environment to select.
        value: Option<String>,
    },

    /// Print the control-namespace URL for PATH.
    Control {
        /// Path below the API base.
        path: String,
    },

    /// Print the data-namespace URL for PATH.
    Data {
        /// Path below the environment segment.
        path: String,

        /// Environment to use instead of the selected one.
        #[arg(long, value_name = "ENV")]
        env: Option<String>,
    },
}

/// Errors returned by the URL CLI.
#[derive(Debug, Error)]
enum ApiCliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

fn main() {
    let cli = ApiCli::parse();
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = run(&cli, &mut stdout) {
        let mut stderr = std::io::stderr();
        if writeln!(stderr, "{err}").is_err() {
            // Best-effort logging; ignore write failures.
        }
        std::process::exit(1);
    }
}

fn open_store(cli: &ApiCli) -> Result<FileStore, StoreError> {
    match &cli.store {
        Some(path) => Ok(FileStore::at(path.clone())),
        None => FileStore::in_data_dir(),
    }
}

fn run(cli: &ApiCli, stdout: &mut dyn Write) -> Result<(), ApiCliError> {
    let line = match &cli.command {
        ApiCommand::Env { value } => {
            let mut selector = EnvironmentSelector::new(open_store(cli)?);
            match value {
                Some(environment) => selector.select(environment)?,
                None => selector.selected(),
            }
        }
        ApiCommand::Control { path } => urls(cli)?.control_url(path),
        ApiCommand::Data { path, env } => {
            let urls = urls(cli)?;
            match env {
                Some(environment) => urls.data_url(path, environment),
                None => urls.data_url_for(path, &EnvironmentSelector::new(open_store(cli)?)),
            }
        }
    };
    writeln!(stdout, "{line}")?;
    Ok(())
}

fn urls(cli: &ApiCli) -> Result<UrlBuilder, ConfigError> {
    let config = SharedConfig::load_from(&cli.root)?;
    Ok(UrlBuilder::new(ApiBase::from_process(config.api_base())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn run_with(args: &[&str]) -> String {
        let cli = ApiCli::parse_from(args);
        let mut out = Vec::new();
        temp_env::with_var_unset("VITE_API_URL", || run(&cli, &mut out))
            .expect("command succeeds");
        String::from_utf8(out).expect("UTF-8 output")
    }

    #[rstest]
    fn environment_defaults_to_prod_and_persists() {
        let dir = TempDir::new().expect("temp dir");
        let store = dir.path().join("storage.toml");
        let store = store.to_str().expect("UTF-8 path");

        assert_eq!(run_with(&["cyberwatch-api", "--store", store, "env"]), "prod\n");
        assert_eq!(run_with(&["cyberwatch-api", "--store", store, "env", "dev"]), "dev\n");
        assert_eq!(
            run_with(&["cyberwatch-api", "--store", store, "data", "/hosts"]),
            "http://127.0.0.1:3001/data/dev/hosts\n"
        );
    }

    #[rstest]
    #[case(&["cyberwatch-api", "control", "health"], "http://127.0.0.1:3001/health\n")]
    #[case(
        &["cyberwatch-api", "data", "/hosts", "--env", "pre prod"],
        "http://127.0.0.1:3001/data/pre%20prod/hosts\n"
    )]
    fn prints_composed_urls(#[case] args: &[&str], #[case] expected: &str) {
        let dir = TempDir::new().expect("temp dir");
        let root = dir.path().to_str().expect("UTF-8 path");
        let mut argv = args.to_vec();
        argv.extend(["--root", root]);

        assert_eq!(run_with(&argv), expected);
    }

    #[rstest]
    fn configured_base_applies_when_variable_is_unset() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(
            dir.path().join("cyberwatch.toml"),
            "api_base = \"https://api.example.test/\"\n",
        )
        .expect("write config");
        let root = dir.path().to_str().expect("UTF-8 path");

        assert_eq!(
            run_with(&["cyberwatch-api", "--root", root, "control", "/status"]),
            "https://api.example.test/status\n"
        );
    }

    #[rstest]
    fn unwritable_store_is_reported_by_the_api_tool() {
        let dir = TempDir::new().expect("temp dir");
        let store = dir.path().to_str().expect("UTF-8 path");
        let cli = ApiCli::parse_from(["cyberwatch-api", "--store", store, "env", "dev"]);

        let result = run(&cli, &mut Vec::new());

        assert!(matches!(result, Err(ApiCliError::Store(StoreError::Write { .. }))));
    }
}
