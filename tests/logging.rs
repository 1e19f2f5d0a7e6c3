//! The file logger records resolver warnings and fallbacks.

use log::LevelFilter;
use themekit::log_init::init_logger;
use themekit::{ThemeRegistry, TokenResolver, resolve_or_default};

#[test]
fn test_fallback_is_logged_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("themekit.log");
    init_logger(&path, LevelFilter::Debug).unwrap();

    let registry = ThemeRegistry::builtin().unwrap();
    let selection = resolve_or_default(&registry, &TokenResolver::default(), "nonexistent-id").unwrap();
    assert!(selection.fell_back);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[WARN] themekit: Theme pack `nonexistent-id` not found"));
    assert!(contents.contains("Falling back to default theme `abyssal-blue`"));
    assert!(contents.contains("[DEBUG] tokens::resolver: Resolved theme pack `abyssal-blue`"));

    // A second logger cannot be installed.
    assert!(init_logger(&path, LevelFilter::Info).is_err());
}
