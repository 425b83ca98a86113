//! Behaviour-driven coverage for the stable error catalogue.

use std::cell::{Cell, RefCell};

use common::{LintError, LintErrorKind, error_string};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|stripped| stripped.strip_suffix('"'))
        .unwrap_or(value)
}

struct CatalogueWorld {
    ordinal: Cell<u16>,
    kind: RefCell<Option<Option<LintErrorKind>>>,
    error: RefCell<Option<LintError>>,
}

impl CatalogueWorld {
    fn new() -> Self {
        Self {
            ordinal: Cell::new(0),
            kind: RefCell::new(None),
            error: RefCell::new(None),
        }
    }

    fn resolved(&self) -> Option<LintErrorKind> {
        self.kind.borrow().expect("the ordinal should be resolved")
    }
}

#[fixture]
fn world() -> CatalogueWorld {
    CatalogueWorld::new()
}

#[given("the error ordinal {ordinal}")]
fn error_ordinal(world: &CatalogueWorld, ordinal: u16) {
    world.ordinal.set(ordinal);
}

#[when("the ordinal is resolved")]
fn resolve_ordinal(world: &CatalogueWorld) {
    let kind = LintErrorKind::from_ordinal(world.ordinal.get());
    world.kind.borrow_mut().replace(kind);
}

#[when("an error is raised at offset {offset} with length {length}")]
fn raise_error(world: &CatalogueWorld, offset: usize, length: usize) {
    let kind = LintErrorKind::from_ordinal(world.ordinal.get()).expect("ordinal has a kind");
    world
        .error
        .borrow_mut()
        .replace(LintError::new(kind, offset, length));
}

#[then("the kind is {name}")]
fn assert_kind(world: &CatalogueWorld, name: String) {
    let kind = world.resolved().expect("expected the ordinal to name a kind");

    assert_eq!(format!("{kind:?}"), unquote(&name));
    assert_eq!(kind.ordinal(), world.ordinal.get());
}

#[then("no kind is returned")]
fn assert_no_kind(world: &CatalogueWorld) {
    let kind = world.resolved();

    assert!(kind.is_none(), "expected no kind, got {kind:?}");
}

#[then("the description is {text}")]
fn assert_description(world: &CatalogueWorld, text: String) {
    let kind = world.resolved().expect("expected the ordinal to name a kind");

    assert_eq!(kind.description(), unquote(&text));
    assert_eq!(
        error_string(usize::from(world.ordinal.get())),
        Some(kind.description())
    );
}

#[then("the error string is empty")]
fn assert_empty_string(world: &CatalogueWorld) {
    assert_eq!(error_string(usize::from(world.ordinal.get())), Some(""));
}

#[then("the error string reads {text}")]
fn assert_error_string(world: &CatalogueWorld, text: String) {
    assert_eq!(
        error_string(usize::from(world.ordinal.get())),
        Some(unquote(&text))
    );
}

#[then("the error reads {text}")]
fn assert_rendering(world: &CatalogueWorld, text: String) {
    let error = world.error.borrow().expect("an error should be raised");

    assert_eq!(error.to_string(), unquote(&text));
}

#[scenario("tests/features/error_catalogue.feature", index = 0)]
fn scenario_ordinals_resolve(world: CatalogueWorld) {
    let _ = world;
}

#[scenario("tests/features/error_catalogue.feature", index = 1)]
fn scenario_retired_ordinals(world: CatalogueWorld) {
    let _ = world;
}

#[scenario("tests/features/error_catalogue.feature", index = 2)]
fn scenario_success_ordinal(world: CatalogueWorld) {
    let _ = world;
}

#[scenario("tests/features/error_catalogue.feature", index = 3)]
fn scenario_error_rendering(world: CatalogueWorld) {
    let _ = world;
}
