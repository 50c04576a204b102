//! Integration tests for the model pipeline.
//!
//! Takes GLB bytes the whole way the app does: through the parser into
//! renderer meshes, through the background loader, and into the bounds
//! the camera frames against.

use std::path::PathBuf;
use std::time::Duration;

use serde_json::json;
use vitrine_gui_lib::fixtures::{floats_to_bytes, glb_container, u16s_to_bytes};
use vitrine_gui_lib::gltf::parse_glb;
use vitrine_gui_lib::loader::{LoadResult, ModelLoader, ModelSource};
use vitrine_gui_lib::viewport::mesh::Aabb;

/// One triangle mesh instanced by two nodes, the second shifted +4 in x.
fn two_part_model() -> Vec<u8> {
    let mut bin = floats_to_bytes(&[
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0,
    ]);
    bin.extend(floats_to_bytes(&[
        0.0, 0.0, 1.0, //
        0.0, 0.0, 1.0, //
        0.0, 0.0, 1.0,
    ]));
    bin.extend(u16s_to_bytes(&[0, 1, 2]));

    let doc = json!({
        "asset": {"version": "2.0"},
        "scene": 0,
        "scenes": [{"nodes": [0, 1]}],
        "nodes": [
            {"mesh": 0},
            {"mesh": 0, "translation": [4.0, 0.0, 0.0]}
        ],
        "meshes": [{"primitives": [{
            "attributes": {"POSITION": 0, "NORMAL": 1},
            "indices": 2
        }]}],
        "accessors": [
            {"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3"},
            {"bufferView": 1, "componentType": 5126, "count": 3, "type": "VEC3"},
            {"bufferView": 2, "componentType": 5123, "count": 3, "type": "SCALAR"}
        ],
        "bufferViews": [
            {"buffer": 0, "byteOffset": 0, "byteLength": 36},
            {"buffer": 0, "byteOffset": 36, "byteLength": 36},
            {"buffer": 0, "byteOffset": 72, "byteLength": 6}
        ],
        "buffers": [{"byteLength": 78}]
    });
    glb_container(&doc.to_string(), &bin)
}

fn wait(loader: &mut ModelLoader) -> LoadResult {
    for _ in 0..200 {
        if let Some(result) = loader.poll() {
            return result;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("loader did not finish in time");
}

#[test]
fn test_two_part_model_yields_two_meshes() {
    let meshes = parse_glb(&two_part_model()).unwrap();
    assert_eq!(meshes.len(), 2);
    assert_eq!(meshes[0].vertex_count(), 3);
    assert_eq!(meshes[1].vertex_count(), 3);

    // the second instance is the first, shifted
    assert_eq!(meshes[0].vertices[0], 0.0);
    assert_eq!(meshes[1].vertices[0], 4.0);
    // translation leaves normals alone
    assert_eq!(&meshes[1].vertices[3..6], &[0.0, 0.0, 1.0]);
}

#[test]
fn test_bounds_cover_every_instance() {
    let meshes = parse_glb(&two_part_model()).unwrap();
    let bounds = Aabb::from_meshes(&meshes).expect("two meshes give bounds");

    assert_eq!(bounds.min, glam::Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(bounds.max, glam::Vec3::new(5.0, 1.0, 0.0));
    assert_eq!(bounds.center(), glam::Vec3::new(2.5, 0.5, 0.0));
    assert!(bounds.radius() > 2.0);
}

#[test]
fn test_no_meshes_means_no_bounds() {
    assert!(Aabb::from_meshes(&[]).is_none());
}

#[test]
fn test_loader_matches_direct_parse() {
    let bytes = two_part_model();
    let parsed = parse_glb(&bytes).unwrap();

    let path: PathBuf = std::env::temp_dir().join(format!(
        "vitrine-two-part-{}.glb",
        std::process::id()
    ));
    std::fs::write(&path, &bytes).unwrap();

    let mut loader = ModelLoader::spawn(ModelSource::File(path.clone()));
    let loaded = wait(&mut loader).expect("fixture must load");
    assert_eq!(loaded, parsed);

    let _ = std::fs::remove_file(path);
}
