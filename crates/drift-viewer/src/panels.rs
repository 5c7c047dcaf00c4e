//! Live tuning panel — non-production editing of the parameter groups
//!
//! Widgets are generated straight from the group schemas, so the panel always
//! matches the compiled-in bounds/step/label metadata. The caller owns
//! persistence: persist any group the panel reports as changed.

use drift_params::{ParamValue, ResolvedGroup};

/// Footer actions the host must carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningAction {
    /// Export the persisted blob as text
    Export,
    /// Delete all persisted state and reload from defaults
    ResetAll,
}

/// What one panel pass produced
#[derive(Default)]
pub struct TuningOutput {
    /// Whether any widget changed a value this pass
    pub changed: bool,
    pub actions: Vec<TuningAction>,
}

/// Draw the widgets for one group. Returns true if anything changed.
pub fn group_controls(ui: &mut egui::Ui, group: &mut ResolvedGroup) -> bool {
    let mut changed = false;
    for (spec, value) in group.entries_mut() {
        match value {
            ParamValue::Number(v) => {
                changed |= ui
                    .add(
                        egui::Slider::new(v, spec.min..=spec.max)
                            .step_by(spec.step)
                            .text(spec.label),
                    )
                    .changed();
            }
            ParamValue::Toggle(v) => {
                changed |= ui.checkbox(v, spec.label).changed();
            }
        }
    }
    changed
}

/// Draw every group as a collapsible section plus the export/reset footer
pub fn tuning_panel(ui: &mut egui::Ui, groups: &mut [&mut ResolvedGroup]) -> TuningOutput {
    let mut out = TuningOutput::default();

    for group in groups.iter_mut() {
        let name = group.name();
        ui.collapsing(name, |ui| {
            out.changed |= group_controls(ui, group);
        });
    }

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Export settings").clicked() {
            out.actions.push(TuningAction::Export);
        }
        if ui.button("Reset all").clicked() {
            out.actions.push(TuningAction::ResetAll);
        }
    });

    out
}
