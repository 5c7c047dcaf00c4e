//! The assembled background: lifecycle, parameters, field, and scene state

use drift_core::{DriftError, Result};
use drift_field::{field_height, FieldBounds, FieldRng, FieldSettings, ParticleField};
use drift_params::{groups, ParamStore, ResolvedGroup};
use drift_runtime::{HostEnv, LifecycleGuard, Viewport};
use drift_scene::{effect_chain, CameraParams, DofParams, PointStyle, SceneSurface};

/// The four resolved parameter groups, in display order
pub struct GroupSet {
    pub noise: ResolvedGroup,
    pub field: ResolvedGroup,
    pub camera: ResolvedGroup,
    pub dof: ResolvedGroup,
}

impl GroupSet {
    fn resolve(store: &ParamStore) -> Self {
        Self {
            noise: store.resolve(&groups::NOISE),
            field: store.resolve(&groups::FIELD),
            camera: store.resolve(&groups::CAMERA),
            dof: store.resolve(&groups::DOF),
        }
    }
}

// Everything that only exists after mount
struct MountedState {
    store: ParamStore,
    viewport: Viewport,
    groups: GroupSet,
    field: ParticleField,
    settings: FieldSettings,
}

/// The particle background wired against an injected render surface.
///
/// Inert until [`BackgroundApp::mount`] delivers the host environment; every
/// operation before that renders nothing and touches nothing. Per-frame work
/// happens in [`BackgroundApp::tick`], parameter edits land through
/// [`BackgroundApp::apply_edits`].
pub struct BackgroundApp<S: SceneSurface> {
    surface: S,
    guard: LifecycleGuard,
    rng: FieldRng,
    state: Option<MountedState>,
}

impl<S: SceneSurface> BackgroundApp<S> {
    pub fn new(surface: S) -> Self {
        Self::with_rng(surface, FieldRng::from_entropy())
    }

    /// Deterministic construction for tests
    pub fn with_rng(surface: S, rng: FieldRng) -> Self {
        Self {
            surface,
            guard: LifecycleGuard::new(),
            rng,
            state: None,
        }
    }

    /// Bring the background up with the environment the host resolved after
    /// its first post-render opportunity. Fires once; repeat mounts are
    /// rejected.
    pub fn mount(&mut self, env: HostEnv) -> bool {
        if !self.guard.try_mount() {
            return false;
        }

        let store = ParamStore::new(env.storage);
        let groups = GroupSet::resolve(&store);

        let bounds = Self::bounds_from(&groups.field, env.viewport);
        let count = groups.field.number("count") as usize;
        let field = ParticleField::new(count, bounds, &mut self.rng);
        let settings = FieldSettings::from_group(&groups.noise);

        let mut state = MountedState {
            store,
            viewport: env.viewport,
            groups,
            field,
            settings,
        };
        Self::push_scene_state(&mut self.surface, &mut state);

        log::info!(
            "background mounted: {} particles in {:?}",
            state.field.len(),
            state.field.bounds()
        );
        self.state = Some(state);
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.guard.is_mounted()
    }

    /// One render frame. A guarded no-op while unmounted.
    pub fn tick(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        state.field.advance(&state.settings);
        if state.field.take_dirty() {
            state.field.pack_instances();
            self.surface.upload_points(state.field.instances());
        }
    }

    /// The resolved groups, for binding a control surface
    pub fn groups_mut(&mut self) -> Option<&mut GroupSet> {
        self.state.as_mut().map(|s| &mut s.groups)
    }

    pub fn groups(&self) -> Option<&GroupSet> {
        self.state.as_ref().map(|s| &s.groups)
    }

    /// Write the edited groups back to storage and re-derive everything that
    /// depends on them. Recreates the particle buffer only when the field
    /// dimensions or count actually changed.
    pub fn apply_edits(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        state.store.persist(&state.groups.noise);
        state.store.persist(&state.groups.field);
        state.store.persist(&state.groups.camera);
        state.store.persist(&state.groups.dof);

        state.settings = FieldSettings::from_group(&state.groups.noise);

        let bounds = Self::bounds_from(&state.groups.field, state.viewport);
        let count = state.groups.field.number("count") as usize;
        if bounds != state.field.bounds() || count != state.field.len() {
            state.field.rebuild(count, bounds, &mut self.rng);
        }

        Self::push_scene_state(&mut self.surface, state);
    }

    /// Serialize the persisted blob for transfer
    pub fn export(&self) -> Result<String> {
        match self.state.as_ref() {
            Some(state) => state.store.export_all(),
            None => Err(DriftError::Storage("not mounted".into())),
        }
    }

    /// Delete all persisted state and run a fresh load cycle from defaults
    pub fn reset_all(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        state.store.reset_all();
        state.groups = GroupSet::resolve(&state.store);
        state.settings = FieldSettings::from_group(&state.groups.noise);

        let bounds = Self::bounds_from(&state.groups.field, state.viewport);
        let count = state.groups.field.number("count") as usize;
        state.field.rebuild(count, bounds, &mut self.rng);

        Self::push_scene_state(&mut self.surface, state);
        log::info!("settings reset to defaults");
    }

    /// Simulation internals, for tests and diagnostics
    pub fn field(&self) -> Option<&ParticleField> {
        self.state.as_ref().map(|s| &s.field)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn bounds_from(field_group: &ResolvedGroup, viewport: Viewport) -> FieldBounds {
        let size = field_group.number("size") as f32;
        let height = if field_group.toggle("auto_height") {
            field_height(viewport.aspect())
        } else {
            field_group.number("height") as f32
        };
        FieldBounds::new(size, height, size)
    }

    fn push_scene_state(surface: &mut S, state: &mut MountedState) {
        surface.set_camera(&CameraParams::from_group(&state.groups.camera).pose());
        surface.set_effects(&effect_chain(&DofParams::from_group(&state.groups.dof)));
        surface.set_style(&PointStyle::from_group(&state.groups.field));

        state.field.pack_instances();
        surface.upload_points(state.field.instances());
        // The initial upload covers the fresh buffer
        state.field.take_dirty();
    }
}
