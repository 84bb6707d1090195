use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::{debug, trace, warn};

use crate::core::{AnimationClock, FlowRecord, FlowRecordStore};
use crate::error::{FlowMapError, FlowMapResult};
use crate::render::{FlowMapScene, PickedObject, Renderer, Tooltip, venue_tooltip};

use super::{
    FlowMapConfig, ResourceFetcher, build_flow_layers, compose_scene, load_flow_records,
};

/// Whether the host should keep requesting frames for this view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameLoopState {
    Unmounted,
    Running,
    TornDown,
}

/// Owner of the flow store, the animation clock and the renderer.
///
/// Hosts call `mount` once, forward every display refresh to `on_frame`,
/// and call `unmount` on teardown. After teardown `on_frame` never advances
/// the clock again.
pub struct FlowMapView<R: Renderer> {
    renderer: R,
    config: FlowMapConfig,
    store: FlowRecordStore,
    clock: AnimationClock,
    state: FrameLoopState,
    pending_load: Option<Receiver<FlowMapResult<Vec<FlowRecord>>>>,
}

impl<R: Renderer> FlowMapView<R> {
    pub fn new(renderer: R, config: FlowMapConfig) -> FlowMapResult<Self> {
        config.validate()?;
        let clock = AnimationClock::new(config.clock)?;
        Ok(Self {
            renderer,
            config,
            store: FlowRecordStore::default(),
            clock,
            state: FrameLoopState::Unmounted,
            pending_load: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &FlowMapConfig {
        &self.config
    }

    #[must_use]
    pub fn records(&self) -> &[FlowRecord] {
        self.store.records()
    }

    #[must_use]
    pub fn store(&self) -> &FlowRecordStore {
        &self.store
    }

    #[must_use]
    pub fn clock(&self) -> AnimationClock {
        self.clock
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.state == FrameLoopState::Running
    }

    #[must_use]
    pub fn has_pending_load(&self) -> bool {
        self.pending_load.is_some()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Location of the flow resource under the configured base path.
    #[must_use]
    pub fn resource_location(&self) -> String {
        self.config.data_source.resource_path()
    }

    /// Starts the frame loop from time zero and draws the first frame.
    pub fn mount(&mut self) -> FlowMapResult<()> {
        if self.state == FrameLoopState::TornDown {
            return Err(FlowMapError::InvalidData(
                "view was torn down and cannot be mounted again".to_owned(),
            ));
        }
        self.clock = self.clock.reset();
        self.state = FrameLoopState::Running;
        debug!(records = self.store.len(), "mount flow map view");
        self.render()
    }

    /// Cancels the frame loop. Any in-flight load result is dropped.
    pub fn unmount(&mut self) {
        if self.state != FrameLoopState::Running {
            return;
        }
        self.state = FrameLoopState::TornDown;
        if self.pending_load.take().is_some() {
            debug!("dropping in-flight flow load on unmount");
        }
        debug!(time = self.clock.time(), "unmount flow map view");
    }

    /// One display refresh: apply a finished load, advance the clock, redraw.
    pub fn on_frame(&mut self) -> FlowMapResult<FrameControl> {
        if self.state != FrameLoopState::Running {
            trace!("frame after teardown ignored");
            return Ok(FrameControl::Break);
        }
        self.poll_pending_load();
        self.clock.tick();
        self.render()?;
        Ok(FrameControl::Continue)
    }

    /// Fetches the flow resource on the calling thread.
    ///
    /// Failures are logged and leave the records untouched. Returns `true`
    /// when the records were replaced.
    pub fn load_blocking(&mut self, fetcher: &dyn ResourceFetcher) -> FlowMapResult<bool> {
        let location = self.resource_location();
        let replaced = self
            .store
            .apply_load(load_flow_records(fetcher, &location));
        if replaced && self.is_mounted() {
            self.render()?;
        }
        Ok(replaced)
    }

    /// Starts a fire-and-forget load on a worker thread.
    ///
    /// The result is applied on the next `on_frame` (or `poll_pending_load`).
    /// A load started while another is in flight supersedes it.
    pub fn begin_load<F>(&mut self, fetcher: F)
    where
        F: ResourceFetcher + Send + 'static,
    {
        let location = self.resource_location();
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("flow-map-load".to_owned())
            .spawn(move || {
                // The receiver is gone when the view unmounted first.
                let _ = tx.send(load_flow_records(&fetcher, &location));
            });

        match spawned {
            Ok(_) => {
                debug!(location = %self.resource_location(), "flow load started");
                self.pending_load = Some(rx);
            }
            Err(err) => {
                self.store.apply_load(Err(FlowMapError::Fetch {
                    location: self.resource_location(),
                    reason: format!("failed to spawn loader: {err}"),
                }));
            }
        }
    }

    /// Applies a finished background load, if any. Returns `true` when the
    /// records were replaced.
    pub fn poll_pending_load(&mut self) -> bool {
        let Some(rx) = self.pending_load.as_ref() else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(FlowMapError::Fetch {
                location: self.resource_location(),
                reason: "loader exited without a result".to_owned(),
            }),
        };
        self.pending_load = None;
        self.store.apply_load(outcome)
    }

    /// Blocks until a background load finishes and applies it.
    pub fn wait_for_pending_load(&mut self) -> bool {
        let Some(rx) = self.pending_load.take() else {
            return false;
        };
        let outcome = rx.recv().unwrap_or_else(|_| {
            Err(FlowMapError::Fetch {
                location: self.resource_location(),
                reason: "loader exited without a result".to_owned(),
            })
        });
        self.store.apply_load(outcome)
    }

    /// Builds the scene for the current records and time.
    #[must_use]
    pub fn scene(&self) -> FlowMapScene {
        let layers = build_flow_layers(&self.store, self.clock, &self.config.style);
        compose_scene(&self.config, layers)
    }

    pub fn render(&mut self) -> FlowMapResult<()> {
        let scene = self.scene();
        if let Err(err) = self.renderer.render(&scene) {
            warn!(error = %err, "flow map render failed");
            return Err(err);
        }
        Ok(())
    }

    #[must_use]
    pub fn tooltip(&self, picked: Option<&PickedObject>) -> Option<Tooltip> {
        venue_tooltip(picked, &self.config.tooltip_style)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
