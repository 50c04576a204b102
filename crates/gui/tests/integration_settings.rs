//! Integration tests for the settings document format.
//!
//! Pins down what an exported file looks like on disk: key order,
//! casing and content, so documents exchanged with other tools keep
//! working.

use serde_json::Value;
use shared::{EditorSnapshot, ShadowLevel};
use vitrine_gui_lib::fixtures;
use vitrine_gui_lib::harness::StudioHarness;

const TOP_LEVEL_KEYS: [&str; 8] = [
    "\"typography\":",
    "\"layout\":",
    "\"gallery\":",
    "\"theme\":",
    "\"currentLayout\":",
    "\"button\":",
    "\"materials\":",
    "\"selectedMaterial\":",
];

#[test]
fn test_export_keeps_the_document_key_order() {
    let json = StudioHarness::new().export_json();

    let mut last = 0;
    for key in TOP_LEVEL_KEYS {
        let pos = json.find(key).unwrap_or_else(|| panic!("missing {key}"));
        assert!(pos > last, "{key} out of order");
        last = pos;
    }
}

#[test]
fn test_export_uses_camel_case_keys() {
    let json = StudioHarness::new().export_json();

    for key in [
        "fontSizes",
        "selectedFontSizeType",
        "fontWeight",
        "bgColor",
        "textColor",
        "cardRadius",
        "borderEnabled",
        "borderColor",
        "borderRadius",
        "primaryColor",
        "secondaryColor",
        "selectedButton",
    ] {
        assert!(json.contains(key), "missing {key}");
    }
    assert!(!json.contains("font_sizes"));
    assert!(!json.contains("current_layout"));
}

#[test]
fn test_default_document_content() {
    let json = StudioHarness::new().export_json();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["currentLayout"], "layout1");
    assert_eq!(value["button"]["selectedButton"], "addToCart");
    assert_eq!(value["selectedMaterial"], "leather");

    let buttons = value["button"]["buttons"].as_object().unwrap();
    assert_eq!(buttons.len(), 6);
    for id in [
        "addToCart",
        "fixedArms",
        "movableArms",
        "viewInRoom",
        "galleryThumbnail",
        "controlButton",
    ] {
        assert!(buttons.contains_key(id), "missing button {id}");
    }

    let materials = value["materials"].as_object().unwrap();
    assert_eq!(materials.len(), 3);
    for slot in ["leather", "silicon", "aluminum"] {
        assert!(materials[slot]["color"].is_string(), "missing {slot}");
    }
}

#[test]
fn test_custom_document_round_trips() {
    let mut h = StudioHarness::new();
    h.import_json(&fixtures::settings_json()).unwrap();
    let exported = h.export_json();

    let a: Value = serde_json::from_str(&fixtures::settings_json()).unwrap();
    let b: Value = serde_json::from_str(&exported).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_enum_wire_values() {
    assert_eq!(
        serde_json::to_string(&ShadowLevel::Sm).unwrap(),
        "\"sm\""
    );
    assert_eq!(
        serde_json::to_string(&ShadowLevel::None).unwrap(),
        "\"none\""
    );

    let snapshot: EditorSnapshot = serde_json::from_str(
        r#"{"gallery":{"alignment":"right","spacing":1,"borderRadius":2},
            "typography":{"fontFamily":"Arial, sans-serif",
                "fontSizes":{"heading":18.0,"body":16.0,"small":14.0,"button":16.0},
                "selectedFontSizeType":"button","fontWeight":400},
            "layout":{"bgColor":"#fff","padding":1,"cardRadius":2,
                "borderEnabled":true,"borderWidth":1,"borderColor":"#000"},
            "theme":{"primaryColor":"#111","secondaryColor":"#222"},
            "currentLayout":"layout2",
            "button":{"buttons":{},"selectedButton":"x"},
            "materials":{"leather":{"color":"#111"},"silicon":{"color":"#222"},
                "aluminum":{"color":"#333"}},
            "selectedMaterial":"silicon"}"#,
    )
    .unwrap();
    assert_eq!(snapshot.current_layout, shared::LayoutVariant::Layout2);
    assert_eq!(snapshot.selected_material, shared::MaterialSlot::Silicon);
    assert_eq!(
        snapshot.typography.selected_font_size_type,
        shared::FontRole::Button
    );
}
