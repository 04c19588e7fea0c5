use glam::Vec2;
use tracing::{debug, info};

use crate::backend::{LinkKind, RopeBackend};
use crate::config::{BreakableSpec, RopeConfig};
use crate::error::RopeError;

/// Segments hang from the hook along this axis.
pub const ROPE_DOWN: Vec2 = Vec2::NEG_Y;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    Live,
    Severed,
}

/// One link record in the chain arena. Indices are stable for the chain's lifetime.
#[derive(Debug, Clone)]
pub struct Segment<H> {
    pub index: usize,
    pub kind: LinkKind,
    pub body: H,
    pub hinge: H,
    /// Distance joint to the previous body.
    pub tether: H,
    pub tether_enabled: bool,
    pub state: SegmentState,
}

impl<H> Segment<H> {
    pub fn is_live(&self) -> bool {
        self.state == SegmentState::Live
    }
}

/// Emitted when a breakable segment is severed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakEvent {
    pub index: usize,
    /// Segment whose tether was released; everything from here down falls free.
    pub released: usize,
    pub time_in_rope: f32,
}

/// A rope hanging from a fixed hook, with time-based breakable segments.
#[derive(Debug, Clone)]
pub struct RopeChain<H> {
    config: RopeConfig,
    hook: H,
    hook_position: Vec2,
    segments: Vec<Segment<H>>,
    /// Sorted by descending index; only shrinks.
    pending: Vec<BreakableSpec>,
    current_segment: usize,
    occupied: bool,
    time_in_rope: f32,
    generated: bool,
}

impl<H: Copy + Eq + std::fmt::Debug> RopeChain<H> {
    pub fn new(config: RopeConfig, hook: H, hook_position: Vec2) -> Self {
        let mut pending = config.breakable.clone();
        pending.sort_by(|a, b| b.index.cmp(&a.index));
        Self {
            config,
            hook,
            hook_position,
            segments: Vec::new(),
            pending,
            current_segment: 0,
            occupied: false,
            time_in_rope: 0.0,
            generated: false,
        }
    }

    /// Spawn every segment from the hook outward.
    pub fn generate<B>(&mut self, backend: &mut B) -> Result<(), RopeError>
    where
        B: RopeBackend<Handle = H>,
    {
        if self.generated {
            return Err(RopeError::AlreadyGenerated);
        }
        self.config.validate()?;

        let links = self.config.links;
        let spacing = self.config.link_distance;
        let local_anchor = Vec2::new(0.0, spacing * 0.5);
        let connected_anchor = Vec2::new(0.0, -spacing * 0.5);

        let mut previous = self.hook;
        let mut previous_position = self.hook_position;
        self.segments.reserve(links);

        for index in 0..links {
            let kind = self.kind_for(index, backend);
            let position = previous_position + ROPE_DOWN * spacing;

            let body = backend.spawn_link(index, kind, position);
            let hinge = backend.attach_hinge(body, previous, local_anchor, connected_anchor);
            let tether = backend.attach_tether(body, previous, position.distance(previous_position));
            if kind == LinkKind::End {
                backend.set_mass(body, self.config.end_mass, self.config.end_gravity_scale);
            }

            self.segments.push(Segment {
                index,
                kind,
                body,
                hinge,
                tether,
                tether_enabled: true,
                state: SegmentState::Live,
            });
            previous = body;
            previous_position = position;
        }

        self.generated = true;
        debug!(
            links,
            pending = self.pending.len(),
            "rope generated"
        );
        Ok(())
    }

    fn kind_for<B>(&self, index: usize, backend: &mut B) -> LinkKind
    where
        B: RopeBackend<Handle = H>,
    {
        if index + 1 == self.config.links {
            LinkKind::End
        } else if self.pending.iter().any(|spec| spec.index == index) {
            LinkKind::Break
        } else {
            LinkKind::Ordinary {
                variant: backend.choose_variant(),
            }
        }
    }

    /// Advance one frame. Severs at most one segment.
    pub fn tick<B>(&mut self, dt: f32, backend: &mut B) -> Result<Option<BreakEvent>, RopeError>
    where
        B: RopeBackend<Handle = H>,
    {
        if !self.generated {
            return Ok(None);
        }
        if !self.occupied {
            self.time_in_rope = 0.0;
            return Ok(None);
        }

        self.time_in_rope += dt;

        // Only segments above the actor are eligible.
        let current = self.current_segment;
        let elapsed = self.time_in_rope;
        let Some(slot) = self
            .pending
            .iter()
            .position(|spec| spec.index < current && spec.time_to_break <= elapsed)
        else {
            return Ok(None);
        };

        let spec = self.pending[slot];
        self.sever(spec.index, backend)?;
        self.pending.remove(slot);
        self.time_in_rope = 0.0;

        info!(
            index = spec.index,
            time_in_rope = elapsed,
            "rope segment snapped"
        );
        Ok(Some(BreakEvent {
            index: spec.index,
            released: spec.index + 1,
            time_in_rope: elapsed,
        }))
    }

    fn sever<B>(&mut self, index: usize, backend: &mut B) -> Result<(), RopeError>
    where
        B: RopeBackend<Handle = H>,
    {
        let below = index + 1;
        let body = self.live(index, index)?.body;
        let tether = self.live(below, index)?.tether;

        backend.release_joint(tether);
        backend.destroy_body(body);

        self.segments[below].tether_enabled = false;
        let severed = &mut self.segments[index];
        severed.state = SegmentState::Severed;
        severed.tether_enabled = false;
        Ok(())
    }

    fn live(&self, index: usize, breaking: usize) -> Result<&Segment<H>, RopeError> {
        self.segments
            .get(index)
            .filter(|segment| segment.is_live())
            .ok_or(RopeError::DeadSegment { index, breaking })
    }

    /// Destroy every live body, reset occupancy and timers, and generate again.
    ///
    /// Specs consumed by earlier breaks are not restored.
    pub fn rebuild<B>(&mut self, backend: &mut B) -> Result<(), RopeError>
    where
        B: RopeBackend<Handle = H>,
    {
        self.generated = false;
        for segment in self.segments.iter().filter(|s| s.is_live()) {
            backend.destroy_body(segment.body);
        }
        self.segments.clear();
        self.time_in_rope = 0.0;
        self.occupied = false;
        self.current_segment = 0;

        debug!(pending = self.pending.len(), "rope rebuilding");
        self.generate(backend)
    }

    /// An actor attaches at `segment`.
    pub fn grab(&mut self, segment: usize) {
        self.occupied = true;
        self.current_segment = segment;
    }

    pub fn move_to(&mut self, segment: usize) {
        self.current_segment = segment;
    }

    /// The actor lets go; the timer clears on the next tick.
    pub fn release(&mut self) {
        self.occupied = false;
    }

    pub fn config(&self) -> &RopeConfig {
        &self.config
    }

    pub fn hook(&self) -> H {
        self.hook
    }

    pub fn hook_position(&self) -> Vec2 {
        self.hook_position
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn current_segment(&self) -> usize {
        self.current_segment
    }

    pub fn time_in_rope(&self) -> f32 {
        self.time_in_rope
    }

    pub fn pending(&self) -> &[BreakableSpec] {
        &self.pending
    }

    pub fn segments(&self) -> &[Segment<H>] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment<H>> {
        self.segments.get(index)
    }

    /// Body handle for a live segment.
    pub fn body(&self, index: usize) -> Option<H> {
        self.segment(index)
            .filter(|segment| segment.is_live())
            .map(|segment| segment.body)
    }

    pub fn live_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_live()).count()
    }
}
