//! BDD step definitions for the retry workflow

use std::sync::Arc;

use cucumber::{given, then, when};

use vigil::config::RetryPolicy;
use vigil::engine::{Engine, RunStatus};
use vigil::io::HttpClient;
use vigil::probe::HttpProber;
use vigil::registry::AppSpec;
use vigil::report::TeamsReporter;

use crate::world::VigilWorld;

fn spec(name: &str) -> AppSpec {
    AppSpec {
        name: name.to_string(),
        url: format!("https://{}.example.test", name),
        expected: "ready".to_string(),
    }
}

#[given(expr = "a registry with apps {string} and {string}")]
async fn registry_with_apps(world: &mut VigilWorld, first: String, second: String) {
    world.apps = vec![spec(&first), spec(&second)];
}

#[given("every endpoint responds with its expected marker")]
async fn endpoints_respond_ok(world: &mut VigilWorld) {
    for _ in 0..world.apps.len() {
        world.http.push_response(200, "service ready");
    }
}

#[given("endpoints fail on the first attempt and recover on the second")]
async fn endpoints_recover(world: &mut VigilWorld) {
    for _ in 0..world.apps.len() {
        world.http.push_response(503, "starting up");
    }
    for _ in 0..world.apps.len() {
        world.http.push_response(200, "service ready");
    }
}

#[given("every endpoint keeps responding without its expected marker")]
async fn endpoints_keep_failing(world: &mut VigilWorld) {
    for _ in 0..world.apps.len() * 2 {
        world.http.push_response(500, "broken");
    }
}

#[when("the engine runs")]
async fn engine_runs(world: &mut VigilWorld) {
    let http: Arc<dyn HttpClient> = world.http.clone();
    let prober = HttpProber::new(http.clone());
    let reporter = TeamsReporter::new(
        Some("https://example.test/webhook".to_string()),
        http,
    );
    let policy = RetryPolicy {
        max_attempts: 2,
        delay_seconds: 0,
    };
    let engine = Engine::new(world.apps.clone(), prober, reporter, policy);
    world.status = Some(engine.run().await);
}

#[then(expr = "the run is healthy after {int} attempt(s)")]
async fn run_is_healthy(world: &mut VigilWorld, attempts: usize) {
    assert_eq!(world.status, Some(RunStatus::Healthy));
    assert_eq!(world.http.posts().len(), attempts);
}

#[then(expr = "the run is failing after {int} attempts")]
async fn run_is_failing(world: &mut VigilWorld, attempts: usize) {
    assert_eq!(world.status, Some(RunStatus::Failing));
    assert_eq!(world.http.posts().len(), attempts);
}

#[then(expr = "the second report lists {string} as recovered")]
async fn second_report_lists_recovered(world: &mut VigilWorld, names: String) {
    let posts = world.http.posts();
    let sections = posts[1]["sections"].as_array().unwrap();
    let last = sections.last().unwrap();
    assert_eq!(last["activityTitle"], "💚 **Recovered Apps**");
    assert_eq!(last["text"], names);
}
