//! Binary glTF (GLB) reader for the product model.
//!
//! Walks the container chunks, then just enough of the glTF document to
//! pull out triangle geometry: default scene, node transforms, mesh
//! primitives with positions, normals and indices. Everything else in
//! the document (materials, textures, animations) is ignored.

use glam::{Mat4, Quat, Vec3};
use serde_json::Value;

use crate::viewport::mesh::{self, MeshData};

pub(crate) const GLB_MAGIC: u32 = 0x46546C67; // "glTF"
pub(crate) const GLB_VERSION: u32 = 2;
pub(crate) const CHUNK_TYPE_JSON: u32 = 0x4E4F534A; // "JSON"
pub(crate) const CHUNK_TYPE_BIN: u32 = 0x004E4942; // "BIN\0"

// glTF component types
pub(crate) const UNSIGNED_BYTE: u32 = 5121;
pub(crate) const UNSIGNED_SHORT: u32 = 5123;
pub(crate) const UNSIGNED_INT: u32 = 5125;
pub(crate) const FLOAT: u32 = 5126;

const TRIANGLES_MODE: usize = 4;
const MAX_NODE_DEPTH: usize = 64;

/// Parse a GLB byte buffer into renderer-ready meshes, one per triangle
/// primitive, with node transforms already applied.
pub fn parse_glb(bytes: &[u8]) -> Result<Vec<MeshData>, String> {
    if bytes.len() < 12 {
        return Err("file too short for a GLB header".into());
    }
    let magic = read_u32_at(bytes, 0)?;
    if magic != GLB_MAGIC {
        return Err(format!("not a GLB file (magic {magic:#010x})"));
    }
    let version = read_u32_at(bytes, 4)?;
    if version != GLB_VERSION {
        return Err(format!("unsupported GLB version {version}"));
    }
    let declared_len = read_u32_at(bytes, 8)? as usize;
    if declared_len > bytes.len() {
        return Err(format!(
            "GLB declares {declared_len} bytes but only {} are present",
            bytes.len()
        ));
    }

    let mut json_chunk: Option<&[u8]> = None;
    let mut bin_chunk: Option<&[u8]> = None;
    let mut offset = 12usize;
    while offset + 8 <= bytes.len() {
        let chunk_len = read_u32_at(bytes, offset)? as usize;
        let chunk_type = read_u32_at(bytes, offset + 4)?;
        let start = offset + 8;
        let end = start
            .checked_add(chunk_len)
            .ok_or_else(|| "chunk length overflow".to_string())?;
        let data = bytes
            .get(start..end)
            .ok_or_else(|| format!("chunk at byte {offset} overruns the file"))?;
        match chunk_type {
            CHUNK_TYPE_JSON => json_chunk = Some(data),
            CHUNK_TYPE_BIN => bin_chunk = Some(data),
            _ => {} // unknown chunks are skipped
        }
        // chunks are 4-byte aligned
        offset = end + (4 - end % 4) % 4;
    }

    let json_chunk = json_chunk.ok_or_else(|| "missing JSON chunk".to_string())?;
    let json: Value =
        serde_json::from_slice(json_chunk).map_err(|e| format!("invalid glTF JSON: {e}"))?;

    let doc = Document {
        json: &json,
        bin: bin_chunk.unwrap_or(&[]),
    };

    let mut meshes = Vec::new();
    for root in doc.root_nodes() {
        doc.collect_node(root, Mat4::IDENTITY, 0, &mut meshes)?;
    }
    if meshes.is_empty() {
        return Err("model contains no triangle meshes".into());
    }
    Ok(meshes)
}

struct Document<'a> {
    json: &'a Value,
    bin: &'a [u8],
}

/// Accessor resolved against its bufferView: `bytes` starts at the first
/// element, elements are `stride` bytes apart.
struct AccessorData<'a> {
    count: usize,
    component_type: u32,
    bytes: &'a [u8],
    stride: usize,
}

impl<'a> Document<'a> {
    fn index(&self, key: &str, i: usize) -> Result<&'a Value, String> {
        self.json
            .get(key)
            .and_then(Value::as_array)
            .and_then(|a| a.get(i))
            .ok_or_else(|| format!("missing {key}[{i}]"))
    }

    /// Roots of the default scene. Files without a scene get every node
    /// that is not referenced as a child.
    fn root_nodes(&self) -> Vec<usize> {
        let scene_index = usize_field(self.json, "scene").unwrap_or(0);
        let scene_roots: Option<Vec<usize>> = self
            .json
            .get("scenes")
            .and_then(Value::as_array)
            .and_then(|scenes| scenes.get(scene_index))
            .and_then(|scene| scene.get("nodes"))
            .and_then(Value::as_array)
            .map(|nodes| {
                nodes
                    .iter()
                    .filter_map(Value::as_u64)
                    .map(|n| n as usize)
                    .collect()
            });
        if let Some(roots) = scene_roots {
            return roots;
        }

        let Some(nodes) = self.json.get("nodes").and_then(Value::as_array) else {
            return Vec::new();
        };
        let mut is_child = vec![false; nodes.len()];
        for node in nodes {
            if let Some(children) = node.get("children").and_then(Value::as_array) {
                for child in children.iter().filter_map(Value::as_u64) {
                    if let Some(flag) = is_child.get_mut(child as usize) {
                        *flag = true;
                    }
                }
            }
        }
        (0..nodes.len()).filter(|&i| !is_child[i]).collect()
    }

    fn collect_node(
        &self,
        node_index: usize,
        parent: Mat4,
        depth: usize,
        out: &mut Vec<MeshData>,
    ) -> Result<(), String> {
        if depth > MAX_NODE_DEPTH {
            return Err("node hierarchy too deep".to_string());
        }
        let node = self.index("nodes", node_index)?;
        let transform = parent * node_transform(node);

        if let Some(mesh_index) = usize_field(node, "mesh") {
            self.collect_mesh(mesh_index, transform, out)?;
        }
        if let Some(children) = node.get("children").and_then(Value::as_array) {
            for child in children.iter().filter_map(Value::as_u64) {
                self.collect_node(child as usize, transform, depth + 1, out)?;
            }
        }
        Ok(())
    }

    fn collect_mesh(
        &self,
        mesh_index: usize,
        transform: Mat4,
        out: &mut Vec<MeshData>,
    ) -> Result<(), String> {
        let mesh_value = self.index("meshes", mesh_index)?;
        let primitives = mesh_value
            .get("primitives")
            .and_then(Value::as_array)
            .ok_or_else(|| format!("mesh {mesh_index} has no primitives"))?;

        for prim in primitives {
            // mode defaults to triangles; other topologies are skipped
            if usize_field(prim, "mode").unwrap_or(TRIANGLES_MODE) != TRIANGLES_MODE {
                continue;
            }
            let Some(attributes) = prim.get("attributes") else {
                continue;
            };
            let Some(pos_accessor) = usize_field(attributes, "POSITION") else {
                continue;
            };

            let raw_positions = self.read_vec3_f32(pos_accessor)?;
            let indices = match usize_field(prim, "indices") {
                Some(acc) => self.read_indices(acc)?,
                None => (0..raw_positions.len() as u32).collect(),
            };
            if let Some(&bad) = indices.iter().find(|&&i| i as usize >= raw_positions.len()) {
                return Err(format!(
                    "mesh {mesh_index}: index {bad} out of range for {} vertices",
                    raw_positions.len()
                ));
            }

            let positions: Vec<[f32; 3]> = raw_positions
                .iter()
                .map(|p| {
                    let v = transform.transform_point3(Vec3::from(*p));
                    [v.x, v.y, v.z]
                })
                .collect();

            let normals: Vec<[f32; 3]> = match usize_field(attributes, "NORMAL") {
                Some(acc) => {
                    let normal_matrix = transform.inverse().transpose();
                    self.read_vec3_f32(acc)?
                        .iter()
                        .map(|n| {
                            let v = normal_matrix
                                .transform_vector3(Vec3::from(*n))
                                .normalize_or_zero();
                            [v.x, v.y, v.z]
                        })
                        .collect()
                }
                None => mesh::compute_normals(&positions, &indices),
            };
            if normals.len() != positions.len() {
                return Err(format!(
                    "mesh {mesh_index}: normal count does not match position count"
                ));
            }

            out.push(MeshData::from_parts(&positions, &normals, indices));
        }
        Ok(())
    }

    fn accessor(&self, index: usize) -> Result<AccessorData<'a>, String> {
        let acc = self.index("accessors", index)?;
        let count = usize_field(acc, "count")
            .ok_or_else(|| format!("accessor {index} has no count"))?;
        let component_type = usize_field(acc, "componentType")
            .ok_or_else(|| format!("accessor {index} has no componentType"))?
            as u32;
        let type_name = acc.get("type").and_then(Value::as_str).unwrap_or("SCALAR");
        let components = match type_name {
            "SCALAR" => 1,
            "VEC2" => 2,
            "VEC3" => 3,
            "VEC4" => 4,
            other => return Err(format!("unsupported accessor type {other}")),
        };
        let component_size = match component_type {
            UNSIGNED_BYTE => 1,
            UNSIGNED_SHORT => 2,
            UNSIGNED_INT | FLOAT => 4,
            other => return Err(format!("unsupported component type {other}")),
        };
        let elem_size = components * component_size;

        let view_index = usize_field(acc, "bufferView")
            .ok_or_else(|| format!("accessor {index} has no bufferView"))?;
        let view = self.index("bufferViews", view_index)?;
        if usize_field(view, "buffer").unwrap_or(0) != 0 {
            return Err("external buffers are not supported".to_string());
        }
        let view_offset = usize_field(view, "byteOffset").unwrap_or(0);
        let view_len = usize_field(view, "byteLength")
            .ok_or_else(|| format!("bufferView {view_index} has no byteLength"))?;
        let view_end = view_offset
            .checked_add(view_len)
            .ok_or_else(|| "bufferView length overflow".to_string())?;
        let view_bytes = self
            .bin
            .get(view_offset..view_end)
            .ok_or_else(|| format!("bufferView {view_index} overruns the binary chunk"))?;

        let acc_offset = usize_field(acc, "byteOffset").unwrap_or(0);
        let stride = usize_field(view, "byteStride").unwrap_or(elem_size).max(elem_size);
        let bytes = view_bytes
            .get(acc_offset..)
            .ok_or_else(|| format!("accessor {index} starts past its bufferView"))?;
        if count > 0 {
            let needed = (count - 1)
                .checked_mul(stride)
                .and_then(|n| n.checked_add(elem_size))
                .ok_or_else(|| "accessor extent overflow".to_string())?;
            if bytes.len() < needed {
                return Err(format!("accessor {index} overruns its bufferView"));
            }
        }

        Ok(AccessorData {
            count,
            component_type,
            bytes,
            stride,
        })
    }

    fn read_vec3_f32(&self, accessor_index: usize) -> Result<Vec<[f32; 3]>, String> {
        let acc = self.accessor(accessor_index)?;
        if acc.component_type != FLOAT {
            return Err(format!("accessor {accessor_index}: expected float data"));
        }
        let mut out = Vec::with_capacity(acc.count);
        for i in 0..acc.count {
            let base = i * acc.stride;
            out.push([
                read_f32_at(acc.bytes, base)?,
                read_f32_at(acc.bytes, base + 4)?,
                read_f32_at(acc.bytes, base + 8)?,
            ]);
        }
        Ok(out)
    }

    fn read_indices(&self, accessor_index: usize) -> Result<Vec<u32>, String> {
        let acc = self.accessor(accessor_index)?;
        let mut out = Vec::with_capacity(acc.count);
        for i in 0..acc.count {
            let base = i * acc.stride;
            let value = match acc.component_type {
                UNSIGNED_BYTE => *acc
                    .bytes
                    .get(base)
                    .ok_or_else(|| format!("index read past accessor {accessor_index}"))?
                    as u32,
                UNSIGNED_SHORT => read_u16_at(acc.bytes, base)? as u32,
                UNSIGNED_INT => read_u32_at(acc.bytes, base)?,
                other => return Err(format!("unsupported index component type {other}")),
            };
            out.push(value);
        }
        Ok(out)
    }
}

/// Node-local transform: a column-major matrix when present, TRS otherwise.
fn node_transform(node: &Value) -> Mat4 {
    if let Some(matrix) = node.get("matrix").and_then(Value::as_array) {
        let mut cols = [0.0_f32; 16];
        for (slot, value) in cols.iter_mut().zip(matrix) {
            *slot = value.as_f64().unwrap_or(0.0) as f32;
        }
        return Mat4::from_cols_array(&cols);
    }
    let translation = vec3_field(node, "translation").unwrap_or(Vec3::ZERO);
    let rotation = quat_field(node, "rotation").unwrap_or(Quat::IDENTITY);
    let scale = vec3_field(node, "scale").unwrap_or(Vec3::ONE);
    Mat4::from_scale_rotation_translation(scale, rotation, translation)
}

fn usize_field(value: &Value, key: &str) -> Option<usize> {
    value.get(key).and_then(Value::as_u64).map(|n| n as usize)
}

fn vec3_field(value: &Value, key: &str) -> Option<Vec3> {
    let arr = value.get(key)?.as_array()?;
    Some(Vec3::new(f32_at(arr, 0)?, f32_at(arr, 1)?, f32_at(arr, 2)?))
}

fn quat_field(value: &Value, key: &str) -> Option<Quat> {
    let arr = value.get(key)?.as_array()?;
    Some(Quat::from_xyzw(
        f32_at(arr, 0)?,
        f32_at(arr, 1)?,
        f32_at(arr, 2)?,
        f32_at(arr, 3)?,
    ))
}

fn f32_at(arr: &[Value], i: usize) -> Option<f32> {
    arr.get(i).and_then(Value::as_f64).map(|f| f as f32)
}

fn read_u32_at(bytes: &[u8], offset: usize) -> Result<u32, String> {
    match bytes.get(offset..offset + 4) {
        Some(b) => Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]])),
        None => Err(format!("unexpected end of data at byte {offset}")),
    }
}

fn read_u16_at(bytes: &[u8], offset: usize) -> Result<u16, String> {
    match bytes.get(offset..offset + 2) {
        Some(b) => Ok(u16::from_le_bytes([b[0], b[1]])),
        None => Err(format!("unexpected end of data at byte {offset}")),
    }
}

fn read_f32_at(bytes: &[u8], offset: usize) -> Result<f32, String> {
    read_u32_at(bytes, offset).map(f32::from_bits)
}
