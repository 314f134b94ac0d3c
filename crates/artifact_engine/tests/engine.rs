use std::sync::Arc;
use std::time::{Duration, Instant};

use artifact_engine::{EngineEvent, EngineHandle, FetchError, FetchResponse, Fetcher};
use pretty_assertions::assert_eq;

/// Answers every read with the path as body after a per-path delay.
struct DelayedEcho;

#[async_trait::async_trait]
impl Fetcher for DelayedEcho {
    async fn read(&self, path: &str) -> Result<FetchResponse, FetchError> {
        let delay = if path.contains("slow") { 200 } else { 10 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(FetchResponse {
            status: 200,
            body: path.to_string(),
        })
    }
}

fn collect(engine: &EngineHandle, count: usize) -> Vec<EngineEvent> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut events = Vec::new();
    while events.len() < count && Instant::now() < deadline {
        if let Some(event) = engine.recv_timeout(Duration::from_millis(50)) {
            events.push(event);
        }
    }
    events
}

#[test]
fn completions_are_tagged_with_their_generation() {
    let engine = EngineHandle::new(Arc::new(DelayedEcho)).unwrap();
    engine.fetch(1, "/slow.json");
    engine.fetch(2, "/fast.txt");

    let events = collect(&engine, 2);
    assert_eq!(
        events,
        vec![
            EngineEvent::FetchCompleted {
                generation: 2,
                path: "/fast.txt".to_string(),
                result: Ok(FetchResponse {
                    status: 200,
                    body: "/fast.txt".to_string(),
                }),
            },
            EngineEvent::FetchCompleted {
                generation: 1,
                path: "/slow.json".to_string(),
                result: Ok(FetchResponse {
                    status: 200,
                    body: "/slow.json".to_string(),
                }),
            },
        ]
    );
}

#[test]
fn try_recv_is_empty_without_work() {
    let engine = EngineHandle::new(Arc::new(DelayedEcho)).unwrap();
    assert!(engine.try_recv().is_none());
}
