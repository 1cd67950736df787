//! Hot Reload Tests
//!
//! Tests for:
//! - Development gate (config lookup, disabled trigger)
//! - Timeline swap against persistent actors and capture-scene binding
//! - Failed fetch / parse keeps the previous timeline
//! - Overlapping reloads: arrival order, last wins
//! - Async fetch and file sources

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use serde_json::json;

use stagehand::assets::{FetchCallback, SceneReader};
use stagehand::{
    Error, HotReloadConfig, HotReloadCoordinator, LiveSceneStructure, Scene, SceneBuilder,
    SceneSource, TimelineRuntime, parse_scene,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Serves queued responses in order.
#[derive(Clone, Default)]
struct QueueReader(Arc<Mutex<VecDeque<stagehand::Result<Vec<u8>>>>>);

impl QueueReader {
    fn push_scene(&self, value: &serde_json::Value) {
        self.0
            .lock()
            .unwrap()
            .push_back(Ok(serde_json::to_vec(value).unwrap()));
    }

    fn push(&self, result: stagehand::Result<Vec<u8>>) {
        self.0.lock().unwrap().push_back(result);
    }
}

impl SceneReader for QueueReader {
    fn fetch(&self, on_done: FetchCallback) {
        let next = self
            .0
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transport("queue empty".into())));
        on_done(next);
    }
}

fn scene_json(duration: f32, with_director: bool) -> serde_json::Value {
    let mut objects = vec![json!({ "n": "Cube" }), json!({ "n": "Light" })];
    if with_director {
        objects.push(json!({
            "n": "Director",
            "co": [{
                "t": "PlayableDirector",
                "d": duration,
                "ts": [{
                    "t": "AnimationTrack",
                    "tn": "Cube",
                    "cs": [{ "t": "AnimationClip", "s": 0.0, "d": duration, "b": [
                        { "n": "m_LocalPosition.y", "k": [{ "t": 0.0, "v": duration }] }
                    ]}]
                }]
            }]
        }));
    }
    json!({ "o": objects })
}

fn setup(reader: &QueueReader, enabled: bool) -> (Scene, HotReloadCoordinator) {
    init_logger();
    let mut scene = Scene::new();
    let serialized = parse_scene(&serde_json::to_vec(&scene_json(1.0, true)).unwrap()).unwrap();
    let structure = SceneBuilder::new().build(&serialized, &mut scene);

    let config = HotReloadConfig::new("memory://scene").with_enabled(enabled);
    let coordinator =
        HotReloadCoordinator::with_source(config, SceneSource::custom(reader.clone()), structure);
    (scene, coordinator)
}

fn live_timeline(coordinator: &HotReloadCoordinator) -> Option<Arc<TimelineRuntime>> {
    coordinator.timeline().current()
}

// ============================================================================
// Gate
// ============================================================================

#[test]
fn disabled_trigger_is_rejected() {
    let reader = QueueReader::default();
    reader.push_scene(&scene_json(2.0, true));
    let (scene, mut coordinator) = setup(&reader, false);

    assert!(matches!(coordinator.trigger(), Err(Error::HotReloadDisabled)));
    assert!(coordinator.poll(&scene).is_none());
    assert!(matches!(
        pollster::block_on(coordinator.fetch()),
        Err(Error::HotReloadDisabled)
    ));
    assert!((live_timeline(&coordinator).unwrap().duration() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn config_gate_from_lookup() {
    let config = HotReloadConfig::from_lookup("http://localhost/scene.json", |key| {
        (key == stagehand::assets::DEV_ENV_VAR).then(|| "on".to_owned())
    });
    assert!(config.enabled);
    assert_eq!(config.cache_bust_param.as_deref(), Some("t"));
}

// ============================================================================
// Swap
// ============================================================================

#[test]
fn reload_swaps_timeline_and_binds_capture_roots() {
    let reader = QueueReader::default();
    reader.push_scene(&scene_json(3.0, true));
    let (mut scene, coordinator) = setup(&reader, true);

    let reloads = Rc::new(Cell::new(0));
    let counter = reloads.clone();
    let mut coordinator = coordinator.on_reload(move |_| counter.set(counter.get() + 1));
    let host_handle = coordinator.timeline().clone();
    let before = live_timeline(&coordinator).unwrap();

    coordinator.trigger().unwrap();
    assert!(matches!(coordinator.poll(&scene), Some(Ok(()))));
    assert!(coordinator.poll(&scene).is_none());
    assert_eq!(reloads.get(), 1);

    let after = host_handle.current().unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert!((after.duration() - 3.0).abs() < f32::EPSILON);

    // Resolved once through the persistent actors, once more through the
    // capture scene's top-level actors.
    let cube = coordinator.current_structure().actors[0];
    let track = after.tracks()[0].as_default().unwrap();
    assert_eq!(track.target_actors.as_slice(), &[cube, cube]);

    // The actors themselves were not rebuilt.
    assert_eq!(scene.actors.len(), 3);
    host_handle.execute(0.5, &mut scene);
    assert!((scene.get(cube).unwrap().transform.position.y - 3.0).abs() < f32::EPSILON);
}

#[test]
fn reload_without_director_clears_timeline() {
    let reader = QueueReader::default();
    reader.push_scene(&scene_json(1.0, false));
    let (scene, mut coordinator) = setup(&reader, true);

    coordinator.trigger().unwrap();
    assert!(matches!(coordinator.poll(&scene), Some(Ok(()))));
    assert!(live_timeline(&coordinator).is_none());
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn transport_failure_keeps_previous_timeline() {
    let reader = QueueReader::default();
    reader.push(Err(Error::HttpResponse { status: 404 }));
    let (scene, mut coordinator) = setup(&reader, true);
    let before = live_timeline(&coordinator).unwrap();

    coordinator.trigger().unwrap();
    assert!(matches!(
        coordinator.poll(&scene),
        Some(Err(Error::HttpResponse { status: 404 }))
    ));
    assert!(Arc::ptr_eq(&before, &live_timeline(&coordinator).unwrap()));
}

#[test]
fn parse_failure_keeps_previous_timeline() {
    let reader = QueueReader::default();
    reader.push(Ok(b"{ not json".to_vec()));
    let (scene, mut coordinator) = setup(&reader, true);
    let before = live_timeline(&coordinator).unwrap();

    coordinator.trigger().unwrap();
    assert!(matches!(coordinator.poll(&scene), Some(Err(Error::Json(_)))));
    assert!(Arc::ptr_eq(&before, &live_timeline(&coordinator).unwrap()));
}

// ============================================================================
// Overlapping reloads
// ============================================================================

#[test]
fn overlapping_reloads_last_wins() {
    let reader = QueueReader::default();
    reader.push_scene(&scene_json(2.0, true));
    reader.push(Err(Error::Transport("connection reset".into())));
    reader.push_scene(&scene_json(5.0, true));
    let (scene, mut coordinator) = setup(&reader, true);

    for _ in 0..3 {
        coordinator.trigger().unwrap();
    }

    let results: Vec<_> = std::iter::from_fn(|| coordinator.poll(&scene)).collect();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_ok());
    assert!((live_timeline(&coordinator).unwrap().duration() - 5.0).abs() < f32::EPSILON);
}

// ============================================================================
// Async fetch & sources
// ============================================================================

#[test]
fn async_fetch_then_apply() {
    let reader = QueueReader::default();
    reader.push_scene(&scene_json(7.0, true));
    let (scene, mut coordinator) = setup(&reader, true);

    let serialized = pollster::block_on(coordinator.fetch()).unwrap();
    coordinator.apply(&serialized, &scene);
    assert!((live_timeline(&coordinator).unwrap().duration() - 7.0).abs() < f32::EPSILON);
}

#[test]
fn file_source_reload() {
    init_logger();
    let path = std::env::temp_dir().join(format!(
        "stagehand_hot_reload_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, serde_json::to_vec(&scene_json(6.0, true)).unwrap()).unwrap();

    let mut scene = Scene::new();
    let serialized = parse_scene(&serde_json::to_vec(&scene_json(1.0, true)).unwrap()).unwrap();
    let structure = SceneBuilder::new().build(&serialized, &mut scene);

    let config = HotReloadConfig::new(path.to_string_lossy()).with_enabled(true);
    let mut coordinator = stagehand::init_hot_reload(config, structure, |live: &LiveSceneStructure| {
        assert_eq!(live.actors.len(), 3);
    })
    .unwrap();

    coordinator.trigger().unwrap();
    assert!(matches!(coordinator.poll(&scene), Some(Ok(()))));
    assert!((live_timeline(&coordinator).unwrap().duration() - 6.0).abs() < f32::EPSILON);

    let _ = std::fs::remove_file(&path);
}
