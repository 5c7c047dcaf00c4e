//! Compiled-in parameter groups for the particle background
//!
//! Numeric defaults follow the production tuning: a 50-unit field of 2000
//! points drifting under slow simplex noise, viewed from 80 units out with a
//! shallow depth-of-field pass.

use crate::schema::{GroupSchema, ParamSpec};

/// Noise-driven motion tunables
pub static NOISE: GroupSchema = GroupSchema {
    name: "noise",
    params: &[
        ParamSpec::toggle("enabled", "Noise enabled", true),
        ParamSpec::number("scale", "Noise scale", 0.02, 0.001, 0.1, 0.001),
        ParamSpec::number("speed", "Noise speed", 0.0003, 0.0, 0.002, 0.0001),
        ParamSpec::number("strength_x", "Strength X", 0.05, 0.0, 0.5, 0.005),
        ParamSpec::number("strength_y", "Strength Y", 0.05, 0.0, 0.5, 0.005),
        ParamSpec::number("strength_z", "Strength Z", 0.05, 0.0, 0.5, 0.005),
        ParamSpec::toggle("anchored", "Anchor to origin", false),
    ],
};

/// Field dimensions and point material tunables
pub static FIELD: GroupSchema = GroupSchema {
    name: "field",
    params: &[
        ParamSpec::number("count", "Particle count", 2000.0, 500.0, 5000.0, 100.0),
        ParamSpec::number("size", "Field size", 50.0, 10.0, 200.0, 5.0),
        ParamSpec::toggle("auto_height", "Height from viewport", true),
        ParamSpec::number("height", "Field height", 50.0, 10.0, 200.0, 5.0),
        ParamSpec::number("point_size", "Point size", 0.5, 0.05, 4.0, 0.05),
        ParamSpec::number("opacity", "Opacity", 0.8, 0.0, 1.0, 0.05),
    ],
};

/// Camera pose tunables
pub static CAMERA: GroupSchema = GroupSchema {
    name: "camera",
    params: &[
        ParamSpec::number("offset_h", "Horizontal offset", 0.0, -60.0, 60.0, 1.0),
        ParamSpec::number("offset_v", "Vertical offset", 0.0, -60.0, 60.0, 1.0),
        ParamSpec::number("fov", "Field of view", 60.0, 20.0, 120.0, 1.0),
    ],
};

/// Depth-of-field post-process tunables
pub static DOF: GroupSchema = GroupSchema {
    name: "dof",
    params: &[
        ParamSpec::toggle("enabled", "Depth of field", true),
        ParamSpec::number("focus_distance", "Focus distance", 0.02, 0.0, 1.0, 0.005),
        ParamSpec::number("focal_length", "Focal length", 0.02, 0.0, 1.0, 0.005),
        ParamSpec::number("bokeh_scale", "Bokeh scale", 6.0, 0.0, 20.0, 0.5),
    ],
};

/// Every group, in the order control surfaces display them
pub static ALL: &[&GroupSchema] = &[&NOISE, &FIELD, &CAMERA, &DOF];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_names_are_unique() {
        let mut names: Vec<_> = ALL.iter().map(|g| g.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn keys_are_unique_within_groups() {
        for group in ALL {
            let mut keys: Vec<_> = group.params.iter().map(|s| s.key).collect();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), group.params.len(), "group {}", group.name);
        }
    }

    #[test]
    fn numeric_defaults_lie_within_bounds() {
        for group in ALL {
            for spec in group.params {
                if let Some(v) = spec.default.as_number() {
                    assert!(
                        v >= spec.min && v <= spec.max,
                        "{}.{} default out of bounds",
                        group.name,
                        spec.key
                    );
                }
            }
        }
    }
}
