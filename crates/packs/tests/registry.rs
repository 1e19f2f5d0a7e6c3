//! Integration tests for the theme pack registry.
//!
//! - Loading registry documents from disk
//! - Resolving every built-in pack
//! - Hot reload through `RegistryHandle`

use packs::{RegistryError, RegistryHandle, ThemeRegistry};
use std::io::Write;
use tokens::types::Lenient;
use tokens::{Color, TokenResolver};

const DOCUMENT: &str = r##"{
    "defaultThemeId": "paper",
    "themePacks": [
        {
            "id": "paper",
            "name": "Paper",
            "palette": {
                "background": "#f4f4f0", "surface": "#e8e8e0", "paper": "#ffffff",
                "textPrimary": "#1a1a1a", "textSecondary": "#555555",
                "accent": "#8a5cf6", "accentStrong": "#4c1d95"
            },
            "typography": {
                "heading": ["Georgia", "serif"], "body": "Inter, sans-serif",
                "weightHeading": 600, "weightBody": 400
            },
            "spacing": { "scale": [2, 4, 8, 16, 24, 32], "density": "compact" },
            "radii": { "none": "0px", "sm": "2px", "md": "4px", "lg": "8px" },
            "shadows": ["0 1px 1px rgba(0, 0, 0, 0.1)", "0 4px 12px rgba(0, 0, 0, 0.2)"],
            "grid": { "columns": 4, "columnGap": 12, "rowUnit": 4 },
            "components": {
                "card": { "background": "paper", "shadow": "md", "gap": "xl" }
            }
        }
    ]
}"##;

// ============================================================================
// LOADING FROM DISK
// ============================================================================

#[test]
fn test_from_path_reads_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOCUMENT.as_bytes()).unwrap();

    let registry = ThemeRegistry::from_path(file.path()).unwrap();
    assert_eq!(registry.len(), 1);

    let pack = registry.default_pack().unwrap();
    let typography = pack.typography().unwrap();
    let heading = typography.heading.as_ref().and_then(Lenient::valid).unwrap();
    let body = typography.body.as_ref().and_then(Lenient::valid).unwrap();
    assert_eq!(heading, &["Georgia", "serif"]);
    assert_eq!(body, &["Inter", "sans-serif"]);
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ThemeRegistry::from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, RegistryError::Io(_)));
}

#[test]
fn test_loaded_pack_resolves() {
    let registry = ThemeRegistry::from_json(DOCUMENT).unwrap();
    let theme = TokenResolver::default()
        .resolve(registry.default_pack().unwrap())
        .unwrap();

    let card = theme.component("card").unwrap();
    assert_eq!(card.color("background"), Some(Color::white()));
    assert_eq!(card.length("gap").unwrap().to_string(), "24px");
    assert_eq!(
        card.shadow("shadow").flatten().unwrap().to_string(),
        "0 4px 12px rgba(0, 0, 0, 0.2)"
    );
}

// ============================================================================
// BUILT-IN PACKS
// ============================================================================

#[test]
fn test_every_builtin_pack_resolves() {
    let registry = ThemeRegistry::builtin().unwrap();
    let resolver = TokenResolver::default();

    for pack in registry.all() {
        let issues = tokens::validate(pack);
        assert!(issues.is_empty(), "{}: {}", pack.id, tokens::format_report(&issues));

        let theme = resolver.resolve(pack).unwrap();
        assert_eq!(theme.id, pack.id);
        assert_eq!(theme.shadows.len(), 3);
    }
}

#[test]
fn test_mistyped_pack_does_not_affect_its_neighbours() {
    let mut document: serde_json::Value = serde_json::from_str(DOCUMENT).unwrap();
    let packs = document["themePacks"].as_array_mut().unwrap();
    packs.push(serde_json::json!({
        "id": "bad",
        "name": "Bad",
        "typography": { "weightBody": "400" }
    }));
    packs.push(serde_json::json!(42));

    let registry = ThemeRegistry::from_json(&document.to_string()).unwrap();
    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["paper", "bad"]);

    let resolver = TokenResolver::default();
    assert!(resolver.resolve(registry.get("paper").unwrap()).is_ok());

    let errors = resolver.resolve(registry.get("bad").unwrap()).unwrap_err();
    assert!(errors.iter().any(|e| e.path == "typography.weightBody"
        && matches!(e.kind, tokens::ValidationErrorKind::WrongType { .. })));
}

#[test]
fn test_get_nonexistent_id() {
    let registry = ThemeRegistry::builtin().unwrap();
    assert!(matches!(
        registry.get("nonexistent-id"),
        Err(RegistryError::NotFound(_))
    ));
}

// ============================================================================
// HOT RELOAD
// ============================================================================

#[test]
fn test_reload_from_disk_publishes_new_snapshot() {
    let handle = RegistryHandle::new(ThemeRegistry::builtin().unwrap());
    let held = handle.snapshot();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOCUMENT.as_bytes()).unwrap();
    handle.publish(ThemeRegistry::from_path(file.path()).unwrap());

    assert_eq!(held.len(), 3);
    assert_eq!(held.default_id(), "abyssal-blue");
    assert_eq!(handle.snapshot().default_id(), "paper");
}
