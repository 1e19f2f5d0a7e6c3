//! Integration tests for theme pack resolution.
//!
//! - Alias resolution end to end, from JSON
//! - Idempotence and totality of resolved output
//! - Validation completeness and abort behavior

use tokens::error::IssueClass;
use tokens::types::{Color, ResolvedValue, ThemePack};
use tokens::{TokenResolver, ValidationErrorKind, format_report, validate};

const PACK: &str = r##"{
    "id": "harbor",
    "name": "Harbor",
    "palette": {
        "background": "#0e3a5a",
        "surface": "#0f2840",
        "paper": "#ffffff",
        "textPrimary": "#0b1f2c",
        "textSecondary": "#4a6478",
        "accent": "#2e69a1",
        "accentStrong": "#0c3250",
        "highlight": "#fde047"
    },
    "typography": {
        "heading": "'Poppins', Arial, sans-serif",
        "body": "system-ui, sans-serif",
        "weightHeading": 700,
        "weightBody": 400
    },
    "spacing": { "scale": [4, 8, 12, 18, 26, 36], "density": "standard" },
    "radii": { "none": "0px", "sm": "8px", "md": "14px", "lg": "18px" },
    "shadows": [
        "0 1px 2px rgba(0, 0, 0, 0.12)",
        "0 10px 30px rgba(0, 0, 0, 0.18)",
        "0 18px 50px rgba(0, 0, 0, 0.25)"
    ],
    "grid": { "columns": 3, "columnGap": 18, "rowUnit": 2 },
    "components": {
        "block": {
            "background": "paper-muted",
            "borderWidth": 1,
            "borderStyle": "solid",
            "borderColor": "auto",
            "radius": "md",
            "shadow": "none",
            "paddingToken": "md",
            "darkFillBackground": "accentStrong",
            "darkFillText": "onAccentStrong"
        },
        "badge": {
            "background": "highlight",
            "color": "onHighlight",
            "radius": "lg",
            "elevation": 1,
            "gap": 6
        }
    }
}"##;

fn pack() -> ThemePack {
    serde_json::from_str(PACK).unwrap()
}

// ============================================================================
// ALIAS RESOLUTION
// ============================================================================

#[test]
fn test_block_resolves_to_concrete_values() {
    let theme = TokenResolver::default().resolve(&pack()).unwrap();
    let block = theme.component("block").unwrap();

    assert_eq!(block.length("radius").unwrap().to_string(), "14px");
    assert_eq!(block.length("paddingToken").unwrap().to_string(), "12px");
    assert_eq!(block.shadow("shadow"), Some(None));
    assert_eq!(block.get("borderWidth"), Some(&ResolvedValue::Number(1.0)));
    assert_eq!(block.color("darkFillBackground"), Some(Color::rgb(0x0c, 0x32, 0x50)));
    assert_eq!(block.color("darkFillText"), Some(Color::white()));

    let border = block.color("borderColor").unwrap();
    assert!(!border.is_opaque());
}

#[test]
fn test_extra_palette_roles_are_alias_targets() {
    let theme = TokenResolver::default().resolve(&pack()).unwrap();
    let badge = theme.component("badge").unwrap();

    assert_eq!(theme.palette.get("highlight"), Some(Color::rgb(0xfd, 0xe0, 0x47)));
    assert_eq!(badge.color("color"), Some(Color::black()));
    assert_eq!(badge.length("gap").unwrap().to_string(), "6px");
    assert_eq!(
        badge.shadow("elevation").flatten().unwrap().to_string(),
        "0 10px 30px rgba(0, 0, 0, 0.18)"
    );
}

#[test]
fn test_serialized_shape() {
    let theme = TokenResolver::default().resolve(&pack()).unwrap();
    let json = serde_json::to_value(&theme).unwrap();

    assert_eq!(json["palette"]["accentStrong"], "#0c3250");
    assert_eq!(json["palette"]["highlight"], "#fde047");
    assert_eq!(json["radii"]["none"], "0px");
    assert_eq!(json["spacing"]["density"], "standard");
    assert_eq!(json["typography"]["heading"][0], "Poppins");
    assert_eq!(json["grid"]["columnGap"], 18);
    assert_eq!(json["components"]["block"]["shadow"], "none");
    assert_eq!(json["components"]["block"]["borderStyle"], "solid");
    assert_eq!(json["shadows"][2], "0 18px 50px rgba(0, 0, 0, 0.25)");
}

// ============================================================================
// IDEMPOTENCE AND TOTALITY
// ============================================================================

#[test]
fn test_resolution_is_idempotent() {
    let resolver = TokenResolver::default();
    let first = resolver.resolve(&pack()).unwrap();
    let second = resolver.resolve(&pack()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_no_alias_survives_resolution() {
    let theme = TokenResolver::default().resolve(&pack()).unwrap();
    let aliases = ["auto", "paper-muted", "onAccentStrong", "onHighlight", "accentStrong", "md", "lg"];

    for (name, component) in &theme.components {
        for (field, value) in component.fields() {
            let rendered = serde_json::to_string(value).unwrap();
            let rendered = rendered.trim_matches('"');
            assert!(
                !aliases.contains(&rendered),
                "components.{name}.{field} still holds `{rendered}`"
            );
        }
    }
}

#[test]
fn test_radii_order_is_preserved() {
    let theme = TokenResolver::default().resolve(&pack()).unwrap();
    assert!(theme.radii.none <= theme.radii.sm);
    assert!(theme.radii.sm <= theme.radii.md);
    assert!(theme.radii.md <= theme.radii.lg);
    assert_eq!(theme.radii.sm.to_string(), "8px");
    assert_eq!(theme.radii.lg.to_string(), "18px");
}

// ============================================================================
// VALIDATION FAILURES
// ============================================================================

#[test]
fn test_non_increasing_scale_produces_no_theme() {
    let mut pack = pack();
    pack.spacing_mut().unwrap().scale = Some([4, 8, 8, 18].into_iter().collect());

    let errors = TokenResolver::default().resolve(&pack).unwrap_err();
    assert!(errors.iter().any(|e| matches!(
        e.kind,
        ValidationErrorKind::ScaleNotIncreasing { previous: 8, current: 8 }
    )));
}

#[test]
fn test_two_missing_fields_reported_together() {
    let mut pack = pack();
    pack.palette_mut().unwrap().remove("accent");
    pack.grid_mut().unwrap().columns = None;

    let errors = TokenResolver::default().resolve(&pack).unwrap_err();
    let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
    assert!(paths.contains(&"palette.accent"));
    assert!(paths.contains(&"grid.columns"));
}

#[test]
fn test_type_mismatch_reported_with_missing_role() {
    let mut json: serde_json::Value = serde_json::from_str(PACK).unwrap();
    json["palette"].as_object_mut().unwrap().remove("accent");
    json["grid"]["columns"] = "three".into();
    let pack: ThemePack = serde_json::from_value(json).unwrap();

    let errors = TokenResolver::default().resolve(&pack).unwrap_err();
    insta::assert_snapshot!(format_report(&errors), @r#"
    error: palette.accent: required field is missing
    error: grid.columns: expected an integer, found `"three"`
    "#);
}

#[test]
fn test_non_scalar_component_value_is_reported() {
    let mut json: serde_json::Value = serde_json::from_str(PACK).unwrap();
    json["components"]["badge"]["gap"] = serde_json::Value::Null;
    json["components"]["block"]["radius"] = true.into();
    let pack: ThemePack = serde_json::from_value(json).unwrap();

    let errors = TokenResolver::default().resolve(&pack).unwrap_err();
    let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["components.badge.gap", "components.block.radius"]);
    assert!(errors.iter().all(|e| e.class() == IssueClass::TYPE_MISMATCH));
}

#[test]
fn test_alias_in_untyped_field_produces_no_theme() {
    let mut pack = pack();
    pack.component_mut("block")
        .unwrap()
        .insert("hoverFill".into(), "accent-muted".into());

    let resolver = TokenResolver::default().abort_on(IssueClass::empty());
    let errors = resolver.resolve(&pack).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "components.block.hoverFill");
    assert_eq!(
        errors[0].kind,
        ValidationErrorKind::AliasInUntypedField("accent-muted".into())
    );
}

#[test]
fn test_radius_ordering_violation() {
    let mut pack = pack();
    let radii = pack.radii_mut().unwrap();
    radii.insert("sm".into(), "20px".into());
    radii.insert("lg".into(), "10px".into());

    let errors = TokenResolver::default().resolve(&pack).unwrap_err();
    assert!(errors.iter().all(|e| e.class() == IssueClass::CONSTRAINT));
    insta::assert_snapshot!(format_report(&errors), @r"
    error: radii.md: radius `sm` (20px) is larger than `md` (14px)
    error: radii.lg: radius `md` (14px) is larger than `lg` (10px)
    ");
}

#[test]
fn test_report_for_broken_pack() {
    let json = r##"{
        "id": "broken",
        "name": "Broken",
        "palette": { "background": "#000", "surface": "#111111" },
        "spacing": { "scale": [], "density": "airy" },
        "radii": { "none": "0px", "sm": "4px", "md": "8px", "lg": "12px" },
        "shadows": ["huge"],
        "grid": { "columns": 0, "columnGap": 4, "rowUnit": 4 },
        "components": { "block": { "radius": "xl", "background": "brand-muted" } }
    }"##;
    let pack: ThemePack = serde_json::from_str(json).unwrap();

    insta::assert_snapshot!(format_report(&validate(&pack)), @r"
    error: palette.background: invalid color `#000`, expected #rrggbb
    error: palette.paper: required field is missing
    error: palette.textPrimary: required field is missing
    error: palette.textSecondary: required field is missing
    error: palette.accent: required field is missing
    error: palette.accentStrong: required field is missing
    error: typography: required field is missing
    error: spacing.scale: scale must not be empty
    error: spacing.density: unknown density `airy`, expected compact, standard or comfortable
    error: shadows[0]: invalid shadow descriptor `huge`
    error: grid.columns: must be positive, got 0
    error: components.block.background: alias `brand-muted` does not name an existing palette role
    error: components.block.radius: alias `xl` does not name an existing radius
    ");
}
