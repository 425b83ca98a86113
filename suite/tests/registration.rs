//! Behaviour-driven tests for linter name resolution.

use std::cell::RefCell;

use common::LintResult;
use gs1syntax::{GcpConfig, SyntaxConfig};
use gs1syntax_suite::{Linter, Registry};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|stripped| stripped.strip_suffix('"'))
        .unwrap_or(value)
}

struct RegistryWorld {
    config: RefCell<SyntaxConfig>,
    resolved: RefCell<Option<Option<Linter>>>,
    outcome: RefCell<Option<LintResult>>,
}

impl RegistryWorld {
    fn new() -> Self {
        Self {
            config: RefCell::new(SyntaxConfig::default()),
            resolved: RefCell::new(None),
            outcome: RefCell::new(None),
        }
    }

    fn registry(&self) -> Registry {
        Registry::from_config(&self.config.borrow())
    }

    fn resolved(&self) -> Option<Linter> {
        self.resolved
            .borrow()
            .expect("a linter should have been resolved")
    }
}

#[fixture]
fn world() -> RegistryWorld {
    RegistryWorld::new()
}

#[given("the default configuration")]
fn default_configuration(world: &RegistryWorld) {
    *world.config.borrow_mut() = SyntaxConfig::default();
}

#[given("a configuration that excludes deprecated linters")]
fn without_deprecated(world: &RegistryWorld) {
    world.config.borrow_mut().include_deprecated = false;
}

#[given("a configuration listing the GCP {prefix}")]
fn listing_prefix(world: &RegistryWorld, prefix: String) {
    world.config.borrow_mut().gcp = GcpConfig {
        known_prefixes: vec![unquote(&prefix).to_owned()],
        offline: false,
    };
}

#[when("the linter {name} is resolved")]
fn resolve(world: &RegistryWorld, name: String) {
    let linter = world.registry().resolve(unquote(&name));
    world.resolved.borrow_mut().replace(linter);
}

#[when("{data} is linted with {name}")]
fn lint(world: &RegistryWorld, data: String, name: String) {
    let outcome = world
        .registry()
        .lint(unquote(&name), unquote(&data).as_bytes())
        .expect("the linter should be registered");
    world.outcome.borrow_mut().replace(outcome);
}

#[then("a linter named {name} is returned")]
fn assert_resolved(world: &RegistryWorld, name: String) {
    let linter = world.resolved().expect("expected the name to resolve");

    assert_eq!(linter.name(), unquote(&name));
}

#[then("no linter is returned")]
fn assert_unresolved(world: &RegistryWorld) {
    let resolved = world.resolved();

    assert!(resolved.is_none(), "expected no linter, got {resolved:?}");
}

#[then("the linter is marked deprecated")]
fn assert_deprecated(world: &RegistryWorld) {
    let linter = world.resolved().expect("expected the name to resolve");

    assert!(linter.is_deprecated());
}

#[then("the lint fails with {kind} at offset {offset}")]
fn assert_failure(world: &RegistryWorld, kind: String, offset: usize) {
    let outcome = world.outcome.borrow();
    let Some(Err(error)) = outcome.as_ref() else {
        panic!("expected the lint to fail, got {outcome:?}");
    };

    assert_eq!(format!("{:?}", error.kind()), unquote(&kind));
    assert_eq!(error.span().offset(), offset);
}

#[scenario("tests/features/registry.feature", index = 0)]
fn scenario_resolves_registered_names(world: RegistryWorld) {
    let _ = world;
}

#[scenario("tests/features/registry.feature", index = 1)]
fn scenario_rejects_unknown_names(world: RegistryWorld) {
    let _ = world;
}

#[scenario("tests/features/registry.feature", index = 2)]
fn scenario_resolves_deprecated_names(world: RegistryWorld) {
    let _ = world;
}

#[scenario("tests/features/registry.feature", index = 3)]
fn scenario_hides_deprecated_names(world: RegistryWorld) {
    let _ = world;
}

#[scenario("tests/features/registry.feature", index = 4)]
fn scenario_consults_configured_gcps(world: RegistryWorld) {
    let _ = world;
}

#[scenario("tests/features/registry.feature", index = 5)]
fn scenario_keeps_failure_spans(world: RegistryWorld) {
    let _ = world;
}
