//! Behaviour-driven tests for configuration loading and URL composition.

use std::cell::RefCell;

use camino::Utf8Path;
use cyberwatch::{
    ApiBase, CONFIG_FILE_NAME, EnvironmentSelector, FileStore, KeyValueStore, SharedConfig,
    UrlBuilder,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

struct UrlWorld {
    dir: TempDir,
    result: RefCell<Option<Result<String, String>>>,
}

impl UrlWorld {
    fn root(&self) -> &Utf8Path {
        Utf8Path::from_path(self.dir.path()).expect("temp dir should be UTF-8")
    }

    fn store(&self) -> FileStore {
        FileStore::at(self.root().join("storage.toml"))
    }

    fn builder(&self) -> Result<UrlBuilder, String> {
        let config = SharedConfig::load_from(self.root()).map_err(|error| error.to_string())?;
        Ok(UrlBuilder::new(ApiBase::resolve(None, config.api_base())))
    }

    fn record(&self, result: Result<String, String>) {
        self.result.replace(Some(result));
    }

    fn url(&self) -> String {
        match self.result.borrow().as_ref() {
            Some(Ok(url)) => url.clone(),
            Some(Err(error)) => panic!("URL composition failed: {error}"),
            None => panic!("no URL was requested"),
        }
    }
}

#[fixture]
fn world() -> UrlWorld {
    UrlWorld {
        dir: TempDir::new().expect("create temp dir"),
        result: RefCell::new(None),
    }
}

#[given("no stored environment")]
fn given_no_environment(world: &UrlWorld) {
    assert!(world.store().get("cw.env").is_none());
}

#[given("the stored environment \"{environment}\"")]
fn given_environment(world: &UrlWorld, environment: String) {
    let mut selector = EnvironmentSelector::new(world.store());
    selector.select(&environment).expect("environment persists");
}

#[given("a configuration file containing \"{text}\"")]
fn given_configuration(world: &UrlWorld, text: String) {
    std::fs::write(world.root().join(CONFIG_FILE_NAME), text).expect("write configuration");
}

#[when("I request the data URL for \"{path}\"")]
fn when_data_url(world: &UrlWorld, path: String) {
    let selector = EnvironmentSelector::new(world.store());
    let result = world
        .builder()
        .map(|urls| urls.data_url_for(&path, &selector));
    world.record(result);
}

#[when("I request the control URL for \"{path}\"")]
fn when_control_url(world: &UrlWorld, path: String) {
    let result = world.builder().map(|urls| urls.control_url(&path));
    world.record(result);
}

#[then("the URL is \"{expected}\"")]
fn then_url(world: &UrlWorld, expected: String) {
    assert_eq!(world.url(), expected);
}

#[then("configuration loading fails with \"{snippet}\"")]
fn then_fails(world: &UrlWorld, snippet: String) {
    match world.result.borrow().as_ref() {
        Some(Err(error)) => assert!(error.contains(&snippet), "unexpected error: {error}"),
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[scenario(path = "tests/features/url_builder.feature", index = 0)]
fn scenario_default_environment(world: UrlWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/url_builder.feature", index = 1)]
fn scenario_selected_environment(world: UrlWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/url_builder.feature", index = 2)]
fn scenario_configured_base(world: UrlWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/url_builder.feature", index = 3)]
fn scenario_malformed_configuration(world: UrlWorld) {
    let _ = world;
}
