//! Load testing for the health endpoint.

use std::time::{Duration, Instant};

use demo_app::lifecycle::ShutdownOutcome;

mod common;

#[tokio::test]
async fn test_load_performance() {
    // 1. Start server
    let running = common::start_server(common::config_on(28431)).await;
    let addr = running.local_addr().unwrap();
    let client = common::wait_for_server(addr, 10).await;

    // 2. Run load test
    let concurrency = 20;
    let requests_per_task = 50;
    let total_requests = concurrency * requests_per_task;

    let start = Instant::now();
    let mut tasks = Vec::new();

    for _ in 0..concurrency {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            let mut ok = 0;
            for _ in 0..requests_per_task {
                let res = client
                    .get(format!("http://{}/api/v1/health", addr))
                    .send()
                    .await;
                if let Ok(res) = res {
                    if res.status() == 200 {
                        ok += 1;
                    }
                }
            }
            ok
        }));
    }

    let mut successes = 0;
    for task in tasks {
        successes += task.await.unwrap();
    }
    let elapsed = start.elapsed();

    println!(
        "{} requests in {:?} ({:.0} req/s)",
        total_requests,
        elapsed,
        total_requests as f64 / elapsed.as_secs_f64()
    );

    // 3. Verify results
    assert_eq!(successes, total_requests, "every health request should succeed");
    assert!(elapsed < Duration::from_secs(30));

    drop(client);
    assert_eq!(running.shutdown().await, ShutdownOutcome::Clean);
}
