//! Development-time timeline hot reload.
//!
//! A trigger fetches the latest serialized scene, rebuilds only the timeline
//! against the actors that already exist, binds the capture scene's top-level
//! actors and swaps the live timeline in one step. Actors are never rebuilt.
//!
//! Fetches complete in the background; the host drains them with
//! [`HotReloadCoordinator::poll`] once per frame, so the previous timeline
//! keeps playing until the new one is ready. Overlapping reloads are all
//! applied in arrival order and the last one wins. A failed fetch or parse
//! leaves the current timeline untouched.

use stagehand_core::{Error, Result};
use stagehand_scene::{ActorHandle, Scene};
use stagehand_timeline::TimelineHandle;
use web_time::Instant;

use crate::builder::{SceneStructure, build_timeline};
use crate::config::HotReloadConfig;
use crate::schema::SerializedScene;
use crate::source::{SceneSource, load_scene};

/// The structure hosts play back: persistent actors and the swappable timeline.
#[derive(Debug, Clone, Default)]
pub struct LiveSceneStructure {
    pub actors: Vec<ActorHandle>,
    pub timeline: TimelineHandle,
}

impl From<SceneStructure> for LiveSceneStructure {
    fn from(structure: SceneStructure) -> Self {
        Self {
            actors: structure.actors,
            timeline: TimelineHandle::new(structure.timeline),
        }
    }
}

type ReloadCallback = Box<dyn FnMut(&LiveSceneStructure)>;
type FetchResult = Result<SerializedScene>;

pub struct HotReloadCoordinator {
    config: HotReloadConfig,
    source: SceneSource,
    structure: LiveSceneStructure,
    on_reload: Option<ReloadCallback>,
    tx: flume::Sender<FetchResult>,
    rx: flume::Receiver<FetchResult>,
}

impl HotReloadCoordinator {
    /// Creates a coordinator fetching from `config.url`.
    pub fn new(config: HotReloadConfig, structure: impl Into<LiveSceneStructure>) -> Result<Self> {
        let source = SceneSource::from_source(&config.url, config.cache_bust_param.as_deref())?;
        Ok(Self::with_source(config, source, structure))
    }

    pub fn with_source(
        config: HotReloadConfig,
        source: SceneSource,
        structure: impl Into<LiveSceneStructure>,
    ) -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            config,
            source,
            structure: structure.into(),
            on_reload: None,
            tx,
            rx,
        }
    }

    /// Called after every successful swap.
    #[must_use]
    pub fn on_reload(mut self, callback: impl FnMut(&LiveSceneStructure) + 'static) -> Self {
        self.on_reload = Some(Box::new(callback));
        self
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &HotReloadConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn current_structure(&self) -> &LiveSceneStructure {
        &self.structure
    }

    #[inline]
    #[must_use]
    pub fn timeline(&self) -> &TimelineHandle {
        &self.structure.timeline
    }

    /// Starts a background fetch. Its result is applied by [`Self::poll`].
    ///
    /// Returns [`Error::HotReloadDisabled`] while the development gate is
    /// closed; nothing is fetched then.
    pub fn trigger(&self) -> Result<()> {
        if !self.config.enabled {
            log::debug!("Hot reload trigger ignored: disabled");
            return Err(Error::HotReloadDisabled);
        }
        log::info!("Hot reloading scene from {}", self.config.url);

        let tx = self.tx.clone();
        self.source.fetch_scene(move |result| {
            // The coordinator owns a sender, so the channel outlives every fetch.
            let _ = tx.send(result);
        });
        Ok(())
    }

    /// Applies the next completed fetch, if any.
    ///
    /// Call until it returns `None` to drain every completed reload. `scene`
    /// holds the persistent actors; its top-level actors are bound to the new
    /// timeline.
    pub fn poll(&mut self, scene: &Scene) -> Option<Result<()>> {
        let result = self.rx.try_recv().ok()?;
        Some(match result {
            Ok(serialized) => {
                self.apply(&serialized, scene);
                Ok(())
            }
            Err(err) => {
                log::error!("Hot reload failed, keeping the current timeline: {err}");
                Err(err)
            }
        })
    }

    /// Fetches and parses the latest scene without applying it.
    pub async fn fetch(&self) -> Result<SerializedScene> {
        if !self.config.enabled {
            return Err(Error::HotReloadDisabled);
        }
        load_scene(&self.source).await
    }

    /// Rebuilds the timeline from `serialized` and swaps it in.
    ///
    /// Target names are first resolved through the persistent actors and
    /// their descendants, then every top-level actor of `scene` is bound by
    /// name. A top-level actor found both ways ends up bound twice. A scene
    /// without a director clears the live timeline.
    pub fn apply(&mut self, serialized: &SerializedScene, scene: &Scene) {
        let started = Instant::now();

        let timeline = build_timeline(serialized, &self.structure.actors, scene).map(|mut t| {
            t.bind_actors(&scene.root_actors, scene);
            t
        });
        let has_timeline = timeline.is_some();
        self.structure.timeline.replace(timeline);

        log::info!(
            "Timeline reloaded in {:?} (director present: {has_timeline})",
            started.elapsed()
        );

        if let Some(callback) = self.on_reload.as_mut() {
            callback(&self.structure);
        }
    }
}

/// Wires hot reload for an already built scene.
pub fn init_hot_reload(
    config: HotReloadConfig,
    structure: impl Into<LiveSceneStructure>,
    on_reload: impl FnMut(&LiveSceneStructure) + 'static,
) -> Result<HotReloadCoordinator> {
    Ok(HotReloadCoordinator::new(config, structure)?.on_reload(on_reload))
}
