use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct MonthStats {
    count: usize,
    average: f64,
    grade: String,
}

#[derive(Debug, Deserialize)]
struct TrendPoint {
    date: String,
    score: u8,
    logged: bool,
}

#[derive(Debug, Deserialize)]
struct LifeWeeks {
    lived: u64,
    total: u64,
    percentage: u32,
}

#[derive(Debug, Deserialize)]
struct RecordBody {
    mood: String,
    note: String,
    tags: Vec<String>,
    timestamp: String,
}

#[derive(Debug, Deserialize)]
struct DashboardResponse {
    date: String,
    today: Option<RecordBody>,
    streak: u32,
    month: MonthStats,
    trend: Vec<TrendPoint>,
    life: LifeWeeks,
}

#[derive(Debug, Deserialize)]
struct SettingsBody {
    theme: String,
    birth_date: String,
    user_name: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_path(name: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("stats_of_mind_http_{name}_{}_{nanos}.json", std::process::id()));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/dashboard")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_stats_of_mind"))
        .env("PORT", port.to_string())
        .env("MOOD_DATA_PATH", unique_path("entries"))
        .env("MOOD_SETTINGS_PATH", unique_path("settings"))
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

#[tokio::test]
async fn http_logging_today_updates_dashboard() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: DashboardResponse = client
        .get(format!("{}/api/dashboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let response = client
        .put(format!("{}/api/entries/{}", server.base_url, before.date))
        .json(&serde_json::json!({
            "mood": "A",
            "note": "dia excelente",
            "tags": ["Treino", "Treino", "Lazer"]
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let saved: RecordBody = response.json().await.unwrap();
    assert_eq!(saved.mood, "A");
    assert_eq!(saved.tags, vec!["Treino", "Lazer"]);
    assert!(!saved.timestamp.is_empty());

    let after: DashboardResponse = client
        .get(format!("{}/api/dashboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let today = after.today.expect("today should be logged");
    assert_eq!(today.mood, "A");
    assert_eq!(today.note, "dia excelente");
    assert!(after.streak >= 1);
    assert!(after.streak >= before.streak);
    assert!(after.month.count >= 1);
    assert!(after.month.average > 0.0);
    assert!(!after.month.grade.is_empty());
    assert_eq!(after.trend.len(), 7);
    let last = after.trend.last().unwrap();
    assert_eq!(last.date, after.date);
    assert!(last.logged);
    assert_eq!(last.score, 5);
    assert!(after.life.total > 0);
    assert!(after.life.percentage <= 100 || after.life.lived > after.life.total);
}

#[tokio::test]
async fn http_rejects_bad_entry_requests() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let bad_mood = client
        .put(format!("{}/api/entries/2024-03-10", server.base_url))
        .json(&serde_json::json!({ "mood": "Z" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_mood.status(), 400);

    let bad_date = client
        .put(format!("{}/api/entries/not-a-date", server.base_url))
        .json(&serde_json::json!({ "mood": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_date.status(), 400);
}

#[tokio::test]
async fn http_settings_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/api/settings", server.base_url))
        .json(&serde_json::json!({
            "theme": "light",
            "birth_date": "1985-06-15",
            "user_name": "Ana"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let settings: SettingsBody = client
        .get(format!("{}/api/settings", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(settings.theme, "light");
    assert_eq!(settings.birth_date, "1985-06-15");
    assert_eq!(settings.user_name, "Ana");
}

#[tokio::test]
async fn http_snapshot_returns_png() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/snapshot/2024/3?legend=true", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/png"
    );
    let bytes = response.bytes().await.unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let bad_month = client
        .get(format!("{}/api/snapshot/2024/13", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_month.status(), 400);
}

#[tokio::test]
async fn http_backup_export_and_import() {
    let _guard = TEST_LOCK.lock().await;
    // dedicated server: import replaces state wholesale
    let server = spawn_server().await;
    let client = Client::new();

    client
        .put(format!("{}/api/entries/2024-03-01", server.base_url))
        .json(&serde_json::json!({ "mood": "B" }))
        .send()
        .await
        .unwrap();

    let exported = client
        .get(format!("{}/api/export", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(exported.status().is_success());
    let backup: serde_json::Value = exported.json().await.unwrap();
    assert!(backup.get("entries").is_some());
    assert!(backup.get("settings").is_some());

    let garbage = client
        .post(format!("{}/api/import", server.base_url))
        .body("{definitely not json")
        .send()
        .await
        .unwrap();
    assert_eq!(garbage.status(), 400);

    let untouched: serde_json::Value = client
        .get(format!("{}/api/entries", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(untouched.get("2024-03-01").is_some());

    let replaced = client
        .post(format!("{}/api/import", server.base_url))
        .body(
            serde_json::json!({
                "entries": {
                    "2023-12-25": {
                        "mood": "C",
                        "note": "",
                        "tags": [],
                        "timestamp": "2023-12-25T10:00:00Z"
                    }
                }
            })
            .to_string(),
        )
        .send()
        .await
        .unwrap();
    assert!(replaced.status().is_success());

    let entries: serde_json::Value = client
        .get(format!("{}/api/entries", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(entries.get("2023-12-25").is_some());
    assert!(entries.get("2024-03-01").is_none());
}

#[tokio::test]
async fn http_index_serves_the_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("Stats Of Mind"));
    assert!(body.contains("const MOODS ="));
    assert!(!body.contains("{{"));
}
