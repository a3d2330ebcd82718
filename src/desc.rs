use crate::error::SceneError;
use crate::params;
use crate::scene::SceneParams;
use log::{debug, warn};
use std::path::Path;

// Scene files mirror `SceneParams`:
//
//     {
//         "pivot": { "x": -0.3, "y": 0, "scale": { "x": 1, "y": 1 } },
//         "face": { "translation": { "x": 0.3, "y": 0 }, "rotation": 0, "scale": { "x": 1, "y": 1 } }
//     }
//
// Every field is optional and unknown fields are ignored.

pub fn parse_scene_json(json_text: &str) -> Result<SceneParams, serde_json::Error> {
    serde_json::from_str(json_text)
}

pub fn load_scene_json<P: AsRef<Path>>(path: P) -> Result<SceneParams, SceneError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SceneError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let params = parse_scene_json(&text)?;
    debug!("loaded scene from {}: {:?}", path.display(), params);
    Ok(params)
}

/// Applies a `NAME=VALUE` override such as `face.rotation=1.57`.
pub fn apply_override(params: &mut SceneParams, assignment: &str) -> Result<(), SceneError> {
    let Some((name, value)) = assignment.split_once('=') else {
        return Err(SceneError::BadOverride(assignment.to_owned()));
    };

    let name = name.trim();
    let desc = params::find(name).ok_or_else(|| SceneError::UnknownParam(name.to_owned()))?;
    let value: f32 = value
        .trim()
        .parse()
        .map_err(|_| SceneError::BadOverride(assignment.to_owned()))?;

    desc.id.set(params, value);
    debug!("override {} = {}", desc.name, value);
    Ok(())
}

/// Logs parameters outside their suggested range. The values are kept as-is.
pub fn warn_out_of_range(params: &SceneParams) {
    for row in params::out_of_range(params) {
        warn!(
            "{} = {} is outside the suggested range [{}, {}]",
            row.desc.name, row.current, row.desc.min, row.desc.max
        );
    }
}
