//! Headless runner: builds a session from page data and replays a gesture
//! script against it.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use lineup_domain::{DropZone, PlayerId, TapEvent};
use lineup_shared::InitialLineupData;

use crate::application::services::{LineupSession, LineupSnapshot, SessionPorts};
use crate::infrastructure::{
    FileStorage, HeadlessRenderer, HttpLineupApi, LoggingBindings, PlayerConfig, SystemClock,
    TracingNotifier,
};
use crate::ports::inbound::DragCoordinator;
use crate::ports::outbound::StoragePort;

/// Viewport width used when a script does not set one.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1440;

/// A recorded sequence of user gestures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureScript {
    #[serde(default = "default_width")]
    pub initial_width: u32,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Default for GestureScript {
    fn default() -> Self {
        Self {
            initial_width: DEFAULT_VIEWPORT_WIDTH,
            steps: Vec::new(),
        }
    }
}

fn default_width() -> u32 {
    DEFAULT_VIEWPORT_WIDTH
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Viewport resized to this width.
    Resize(u32),
    /// Let this many milliseconds pass.
    Wait(u64),
    Tap(TapEvent),
    Drop {
        player: PlayerId,
        source: DropZone,
        destination: DropZone,
    },
    /// Formation picked from the selector.
    Formation(String),
    Save,
}

/// Load config-named inputs, replay the script and return the final state.
pub async fn run(config: &PlayerConfig) -> Result<LineupSnapshot> {
    let data_path = config
        .data_path
        .as_deref()
        .context("LINEUP_DATA_PATH environment variable is required")?;
    let data = load_initial_data(data_path)?;
    let script = match config.script_path.as_deref() {
        Some(path) => load_script(path)?,
        None => GestureScript::default(),
    };

    let storage: Arc<dyn StoragePort> = match &config.storage_path {
        Some(path) => Arc::new(FileStorage::at(path)),
        None => Arc::new(FileStorage::new()),
    };
    let api = HttpLineupApi::with_timeout(Some(&config.api_base_url), config.http_timeout_secs)
        .context("LINEUP_API_BASE_URL must be a valid URL")?;

    let ports = SessionPorts {
        renderer: Arc::new(HeadlessRenderer),
        notifier: Arc::new(TracingNotifier),
        bindings: Arc::new(LoggingBindings),
        api: Arc::new(api),
        storage,
        clock: Arc::new(SystemClock),
    };
    let mut session = LineupSession::new(&data, ports, config.session_settings());

    replay(&mut session, &script).await;
    Ok(session.snapshot())
}

pub fn load_initial_data(path: &Path) -> Result<InitialLineupData> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read lineup data from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid lineup data in {}", path.display()))
}

pub fn load_script(path: &Path) -> Result<GestureScript> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read gesture script from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid gesture script in {}", path.display()))
}

/// Replay `script`. Rejected gestures and failed saves are reported by the
/// session and do not stop the replay.
pub async fn replay(session: &mut LineupSession, script: &GestureScript) {
    session.start(script.initial_width);

    for (index, step) in script.steps.iter().enumerate() {
        tracing::debug!(index, ?step, "Replaying step");
        match step {
            Step::Resize(width) => session.handle_resize(*width),
            Step::Wait(ms) => {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
                session.poll_resize();
            }
            Step::Tap(event) => session.handle_tap(event.clone()),
            Step::Drop {
                player,
                source,
                destination,
            } => {
                let _ = session.on_drop(*source, *destination, player);
            }
            Step::Formation(name) => {
                session.select_formation(name);
            }
            Step::Save => {
                let _ = session.save().await;
            }
        }
    }

    // Settle a trailing resize so the final mode is reported.
    if let Some(remaining) = session.resize_pending_ms() {
        tokio::time::sleep(Duration::from_millis(remaining)).await;
        session.poll_resize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::post;
    use axum::{Json, Router};
    use lineup_domain::{Formation, InteractionMode};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tokio::net::TcpListener;

    use crate::ports::outbound::SaveButtonState;

    fn write_json(dir: &TempDir, name: &str, value: &Value) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
        path
    }

    fn page_data() -> Value {
        let players: serde_json::Map<String, Value> = (1..=16)
            .map(|i| {
                (
                    i.to_string(),
                    json!({"name": format!("Player {}", i), "position": "MF"}),
                )
            })
            .collect();
        json!({
            "team_type": "away",
            "team_id": 7,
            "can_edit": true,
            "saveUrl": "/teams/7/lineup/",
            "formation": "4-4-2",
            "players": players,
            "starters": ["1","2","3","4","5","6","7","8","9","10","11"],
            "substitutes": [12]
        })
    }

    async fn spawn_server() -> String {
        let router = Router::new().route(
            "/teams/7/lineup/",
            post(|Json(body): Json<Value>| async move {
                let refs = |key: &str| -> Vec<Value> {
                    body[key]
                        .as_array()
                        .unwrap()
                        .iter()
                        .map(|id| json!({"id": id}))
                        .collect()
                };
                Json(json!({
                    "status": "success",
                    "data": {"starters": refs("starters"), "substitutes": refs("substitutes")}
                }))
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn parses_script_steps() {
        let script: GestureScript = serde_json::from_value(json!({
            "initial_width": 700,
            "steps": [
                {"tap": {"event": "tap_player", "target": "12"}},
                {"tap": {"event": "tap_empty_slot", "target": {"kind": "pitch", "slot": 3}}},
                {"drop": {"player": "4", "source": {"zone": "starter_slot", "slot": 3}, "destination": {"zone": "bench"}}},
                {"resize": 1600},
                {"wait": 250},
                {"formation": "3-5-2"},
                "save"
            ]
        }))
        .unwrap();

        assert_eq!(script.initial_width, 700);
        assert_eq!(
            script.steps,
            vec![
                Step::Tap(TapEvent::TapPlayer(PlayerId::new("12"))),
                Step::Tap(TapEvent::TapEmptySlot(lineup_domain::SlotTarget::Pitch(3))),
                Step::Drop {
                    player: PlayerId::new("4"),
                    source: DropZone::StarterSlot(3),
                    destination: DropZone::Bench,
                },
                Step::Resize(1600),
                Step::Wait(250),
                Step::Formation("3-5-2".to_string()),
                Step::Save,
            ]
        );
    }

    #[test]
    fn empty_script_uses_default_width() {
        let script: GestureScript = serde_json::from_str("{}").unwrap();
        assert_eq!(script, GestureScript::default());
    }

    #[tokio::test]
    async fn replays_gestures_and_saves() {
        let dir = TempDir::new().unwrap();
        let base = spawn_server().await;
        let script = json!({
            "initial_width": 1600,
            "steps": [
                {"drop": {"player": "13", "source": {"zone": "pool"}, "destination": {"zone": "starter_slot", "slot": 0}}},
                {"formation": "3-5-2"},
                {"resize": 600},
                {"wait": 250},
                {"tap": {"event": "tap_player", "target": "12"}},
                {"tap": {"event": "tap_player", "target": "2"}},
                "save"
            ]
        });
        let config = PlayerConfig {
            api_base_url: base,
            csrf_token: Some("token".to_string()),
            resize_debounce_ms: 50,
            data_path: Some(write_json(&dir, "data.json", &page_data())),
            script_path: Some(write_json(&dir, "script.json", &script)),
            storage_path: Some(dir.path().join("storage.json")),
            ..Default::default()
        };

        let snapshot = run(&config).await.unwrap();

        assert_eq!(snapshot.team_type, "away");
        assert_eq!(snapshot.formation, Formation::ThreeFiveTwo);
        assert_eq!(snapshot.mode, Some(InteractionMode::Tap));
        assert_eq!(snapshot.save_state, SaveButtonState::Clean);
        assert_eq!(snapshot.starters.len(), 11);
        assert_eq!(snapshot.starters[0], PlayerId::new("13"));
        assert!(snapshot.starters.contains(&PlayerId::new("12")));
        assert_eq!(snapshot.substitutes, vec![PlayerId::new("2")]);
        assert!(snapshot.available.contains(&PlayerId::new("1")));

        let storage = FileStorage::at(dir.path().join("storage.json"));
        assert_eq!(
            storage.load("lineup_tutorial_shown_away").as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn missing_data_path_is_an_error() {
        let result = run(&PlayerConfig::default()).await;
        assert!(result.is_err());
    }
}
