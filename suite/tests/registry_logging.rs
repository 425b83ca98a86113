//! Log output of the registry.
//!
//! `logtest` installs a process-wide logger, so every expectation lives in a
//! single test.

use gs1syntax::SyntaxConfig;
use gs1syntax_suite::Registry;
use log::Level;
use logtest::Logger;

#[test]
fn registry_logs_unknown_and_deprecated_names() {
    let mut logger = Logger::start();
    let registry = Registry::default();

    assert!(registry.resolve("dummy").is_none());
    assert!(registry.resolve("yymmddhh").is_some());
    assert!(registry.resolve("csum").is_some());

    let records: Vec<_> = std::iter::from_fn(|| logger.pop())
        .filter(|record| record.target() == "gs1syntax::registry")
        .map(|record| (record.level(), record.args().to_owned()))
        .collect();

    assert_eq!(
        records,
        vec![
            (Level::Debug, String::from("no linter is registered as `dummy`")),
            (Level::Warn, String::from("linter `yymmddhh` is deprecated")),
        ]
    );

    let config = SyntaxConfig {
        include_deprecated: false,
        ..SyntaxConfig::default()
    };
    assert!(Registry::from_config(&config).resolve("hhmm").is_none());

    let hidden = std::iter::from_fn(|| logger.pop()).any(|record| {
        record.level() == Level::Debug
            && record.args() == "linter `hhmm` is deprecated and disabled by configuration"
    });
    assert!(hidden, "expected the disabled deprecated linter to be logged");
}
