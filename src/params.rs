// Parameter table for the scene.
//
// Each row names one scalar of `SceneParams` with a suggested range and step. The debug
// window builds its sliders from this table, the CLI uses it for `--set NAME=VALUE`, and
// loaders use it to warn about odd values. Nothing here clamps the math core itself.

use crate::scene::SceneParams;
use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    PivotX,
    PivotY,
    PivotScaleX,
    PivotScaleY,
    FaceX,
    FaceY,
    FaceScaleX,
    FaceScaleY,
    FaceRotation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDesc {
    pub id: ParamId,
    /// Dotted path matching the JSON scene layout, e.g. `face.scale.x`.
    pub name: &'static str,
    pub group: &'static str,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

macro_rules! param {
    ($id:ident, $name:literal, $group:literal, $label:literal, $min:expr, $max:expr) => {
        ParamDesc {
            id: ParamId::$id,
            name: $name,
            group: $group,
            label: $label,
            min: $min,
            max: $max,
            step: 0.01,
        }
    };
}

pub static PARAMS: [ParamDesc; 9] = [
    param!(PivotX, "pivot.x", "Pivot", "Translation X", -1.0, 1.0),
    param!(PivotY, "pivot.y", "Pivot", "Translation Y", -1.0, 1.0),
    param!(PivotScaleX, "pivot.scale.x", "Pivot", "Scale X", 0.1, 3.0),
    param!(PivotScaleY, "pivot.scale.y", "Pivot", "Scale Y", 0.1, 3.0),
    param!(FaceX, "face.translation.x", "Face", "Translation X", -1.0, 1.0),
    param!(FaceY, "face.translation.y", "Face", "Translation Y", -1.0, 1.0),
    param!(FaceScaleX, "face.scale.x", "Face", "Scale X", 0.1, 3.0),
    param!(FaceScaleY, "face.scale.y", "Face", "Scale Y", 0.1, 3.0),
    param!(FaceRotation, "face.rotation", "Face", "Rotation (rad)", 0.0, TAU),
];

impl ParamId {
    pub fn get(self, p: &SceneParams) -> f32 {
        match self {
            ParamId::PivotX => p.pivot.x,
            ParamId::PivotY => p.pivot.y,
            ParamId::PivotScaleX => p.pivot.scale.x,
            ParamId::PivotScaleY => p.pivot.scale.y,
            ParamId::FaceX => p.face.translation.x,
            ParamId::FaceY => p.face.translation.y,
            ParamId::FaceScaleX => p.face.scale.x,
            ParamId::FaceScaleY => p.face.scale.y,
            ParamId::FaceRotation => p.face.rotation,
        }
    }

    pub fn set(self, p: &mut SceneParams, v: f32) {
        let slot = match self {
            ParamId::PivotX => &mut p.pivot.x,
            ParamId::PivotY => &mut p.pivot.y,
            ParamId::PivotScaleX => &mut p.pivot.scale.x,
            ParamId::PivotScaleY => &mut p.pivot.scale.y,
            ParamId::FaceX => &mut p.face.translation.x,
            ParamId::FaceY => &mut p.face.translation.y,
            ParamId::FaceScaleX => &mut p.face.scale.x,
            ParamId::FaceScaleY => &mut p.face.scale.y,
            ParamId::FaceRotation => &mut p.face.rotation,
        };
        *slot = v;
    }

    pub fn desc(self) -> &'static ParamDesc {
        // PARAMS is declared in ParamId order.
        &PARAMS[self as usize]
    }
}

impl ParamDesc {
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn clamp(&self, v: f32) -> f32 {
        v.clamp(self.min, self.max)
    }
}

pub fn find(name: &str) -> Option<&'static ParamDesc> {
    PARAMS.iter().find(|d| d.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRow {
    pub desc: &'static ParamDesc,
    pub current: f32,
}

/// One row per parameter with its current value, in table order.
pub fn param_table(params: &SceneParams) -> Vec<ParamRow> {
    PARAMS
        .iter()
        .map(|desc| ParamRow {
            desc,
            current: desc.id.get(params),
        })
        .collect()
}

/// Rows whose current value falls outside the suggested range (NaN included).
pub fn out_of_range(params: &SceneParams) -> Vec<ParamRow> {
    param_table(params)
        .into_iter()
        .filter(|row| !row.desc.contains(row.current))
        .collect()
}
