//! Post-process chain and point material derived from persisted groups

use drift_core::Color;
use drift_params::ResolvedGroup;

/// The persisted depth-of-field tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DofParams {
    pub enabled: bool,
    pub focus_distance: f32,
    pub focal_length: f32,
    pub bokeh_scale: f32,
}

impl Default for DofParams {
    fn default() -> Self {
        Self {
            enabled: true,
            focus_distance: 0.02,
            focal_length: 0.02,
            bokeh_scale: 6.0,
        }
    }
}

impl DofParams {
    /// Build from the resolved `dof` parameter group
    pub fn from_group(dof: &ResolvedGroup) -> Self {
        Self {
            enabled: dof.toggle("enabled"),
            focus_distance: dof.number("focus_distance") as f32,
            focal_length: dof.number("focal_length") as f32,
            bokeh_scale: dof.number("bokeh_scale") as f32,
        }
    }
}

/// One stage of the host renderer's post-process compositor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectStage {
    DepthOfField {
        focus_distance: f32,
        focal_length: f32,
        bokeh_scale: f32,
    },
}

/// Compose the post-process chain.
///
/// Disabling depth of field removes the stage from the chain entirely: the
/// host must not build the pass at all, rather than running it at zero
/// strength.
pub fn effect_chain(dof: &DofParams) -> Vec<EffectStage> {
    let mut chain = Vec::new();
    if dof.enabled {
        chain.push(EffectStage::DepthOfField {
            focus_distance: dof.focus_distance,
            focal_length: dof.focal_length,
            bokeh_scale: dof.bokeh_scale,
        });
    }
    chain
}

/// Material parameters for the point cloud, with the production look as the
/// default: small additive amber points over a near-black background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub point_size: f32,
    pub opacity: f32,
    pub color: Color,
    pub background: Color,
    pub additive_blend: bool,
    pub size_attenuation: bool,
    pub depth_write: bool,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            point_size: 0.5,
            opacity: 0.8,
            color: Color::from_hex(0xFFC729),
            background: Color::from_hex(0x111111),
            additive_blend: true,
            size_attenuation: true,
            depth_write: false,
        }
    }
}

impl PointStyle {
    /// Build from the resolved `field` parameter group (size/opacity are the
    /// tunable parts; blend state and palette are fixed).
    pub fn from_group(field: &ResolvedGroup) -> Self {
        Self {
            point_size: field.number("point_size") as f32,
            opacity: field.number("opacity") as f32,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_params::groups;

    #[test]
    fn disabled_dof_is_absent_not_zeroed() {
        let dof = DofParams {
            enabled: false,
            ..Default::default()
        };
        assert!(effect_chain(&dof).is_empty());
    }

    #[test]
    fn enabled_dof_carries_its_parameters() {
        let chain = effect_chain(&DofParams::default());
        assert_eq!(chain.len(), 1);
        let EffectStage::DepthOfField {
            focus_distance,
            focal_length,
            bokeh_scale,
        } = chain[0];
        assert!((focus_distance - 0.02).abs() < 1e-6);
        assert!((focal_length - 0.02).abs() < 1e-6);
        assert!((bokeh_scale - 6.0).abs() < 1e-6);
    }

    #[test]
    fn dof_from_group_respects_toggle() {
        let mut group = drift_params::ResolvedGroup::defaults(&groups::DOF);
        group.set_toggle("enabled", false);
        let dof = DofParams::from_group(&group);
        assert!(!dof.enabled);
        assert!(effect_chain(&dof).is_empty());
    }

    #[test]
    fn style_defaults_match_production_look() {
        let style = PointStyle::default();
        assert!((style.point_size - 0.5).abs() < 1e-6);
        assert!((style.opacity - 0.8).abs() < 1e-6);
        assert!(style.additive_blend);
        assert!(!style.depth_write);
    }

    #[test]
    fn style_from_group_reads_tunables() {
        let mut group = drift_params::ResolvedGroup::defaults(&groups::FIELD);
        group.set_number("point_size", 1.5);
        group.set_number("opacity", 0.4);
        let style = PointStyle::from_group(&group);
        assert!((style.point_size - 1.5).abs() < 1e-6);
        assert!((style.opacity - 0.4).abs() < 1e-6);
    }
}
