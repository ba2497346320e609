//! The per-frame animate-and-render cycle.

use nannou::rand::Rng;

use crate::interaction::{render_pointer_effects, PointerParams};
use crate::links::{LinkRenderer, LinkStrategy, DEFAULT_LINK_DISTANCE};
use crate::point::{Point, SpawnParams, DEFAULT_PULSE_RATE};
use crate::pointer::Pointer;
use crate::surface::Surface;
use crate::viewport::Viewport;

/// Tunables of a scene, fixed for the program's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    pub point_count: usize,
    pub spawn: SpawnParams,
    pub pulse_rate: f32,
    pub link_distance: f32,
    pub link_strategy: LinkStrategy,
    pub pointer: PointerParams,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            point_count: 120,
            spawn: SpawnParams::default(),
            pulse_rate: DEFAULT_PULSE_RATE,
            link_distance: DEFAULT_LINK_DISTANCE,
            link_strategy: LinkStrategy::AllPairs,
            pointer: PointerParams::default(),
        }
    }
}

/// The fixed point pool and everything needed to draw it.
#[derive(Debug)]
pub struct Scene {
    points: Vec<Point>,
    params: SceneParams,
    links: LinkRenderer,
}

impl Scene {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, params: SceneParams) -> Self {
        let points = (0..params.point_count)
            .map(|_| Point::spawn(rng, viewport, &params.spawn))
            .collect();
        Self::from_points(points, params)
    }

    pub fn from_points(points: Vec<Point>, params: SceneParams) -> Self {
        Self {
            points,
            links: LinkRenderer::new(params.link_strategy),
            params,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchedulerState {
    #[default]
    Idle,
    Running,
}

/// What one cycle drew.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameStats {
    pub frame: u64,
    pub links: usize,
    pub pointer_commands: usize,
}

/// Drives the cycle. The host calls [`FrameScheduler::cycle`] once per
/// display refresh; nothing here looks at wall-clock time, so a slower host
/// only slows the animation down.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    state: SchedulerState,
    frames: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        if self.state == SchedulerState::Idle {
            tracing::debug!("frame scheduler running");
            self.state = SchedulerState::Running;
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame: clear, links from the current positions, advance and
    /// draw each point, then pointer effects. Returns `None` before `start`.
    pub fn cycle<S: Surface + ?Sized>(
        &mut self,
        scene: &mut Scene,
        pointer: &Pointer,
        viewport: &Viewport,
        surface: &mut S,
    ) -> Option<FrameStats> {
        if self.state != SchedulerState::Running {
            return None;
        }

        surface.clear(viewport);

        let links = scene
            .links
            .render(&scene.points, scene.params.link_distance, viewport, surface);

        for point in &mut scene.points {
            point.advance(viewport, scene.params.pulse_rate);
            point.render(surface);
        }

        let pointer_commands =
            render_pointer_effects(&scene.points, pointer, &scene.params.pointer, surface);

        self.frames += 1;
        let stats = FrameStats {
            frame: self.frames,
            links,
            pointer_commands,
        };
        tracing::trace!(?stats, "frame");
        Some(stats)
    }
}
