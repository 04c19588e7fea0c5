use glam::Vec2;

/// Which prefab a segment is spawned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Ordinary link; `variant` indexes the backend's variant pool.
    Ordinary { variant: usize },
    /// Link that will later be severed by a breakable spec.
    Break,
    /// Terminal, weighted link.
    End,
}

/// Physics/scene capabilities the chain needs from a host engine.
///
/// Calls may be applied immediately or queued, as long as they land before the
/// next evaluation.
pub trait RopeBackend {
    /// Opaque handle for bodies and joints.
    type Handle: Copy + Eq + std::fmt::Debug;

    /// Uniformly choose an ordinary variant from the backend's pool.
    fn choose_variant(&mut self) -> usize;

    /// Spawn a dynamic body for segment `index` centered at `position`.
    fn spawn_link(&mut self, index: usize, kind: LinkKind, position: Vec2) -> Self::Handle;

    /// Hinge `body` to `anchor_body`. `local_anchor` is in `body` space,
    /// `connected_anchor` in `anchor_body` space.
    fn attach_hinge(
        &mut self,
        body: Self::Handle,
        anchor_body: Self::Handle,
        local_anchor: Vec2,
        connected_anchor: Vec2,
    ) -> Self::Handle;

    /// Keep `body` at `distance` from `anchor_body`; enabled on creation.
    fn attach_tether(
        &mut self,
        body: Self::Handle,
        anchor_body: Self::Handle,
        distance: f32,
    ) -> Self::Handle;

    fn set_mass(&mut self, body: Self::Handle, mass: f32, gravity_scale: f32);

    /// Disable a tether and clear its anchor body.
    fn release_joint(&mut self, joint: Self::Handle);

    /// Destroy a body along with any joints it owns.
    fn destroy_body(&mut self, body: Self::Handle);
}
