//! BDD step definitions for probing a single app

use std::sync::Arc;

use cucumber::{given, then, when};

use vigil::io::HttpClient;
use vigil::probe::{HttpProber, Outcome};
use vigil::registry::AppSpec;

use crate::world::VigilWorld;

#[given(expr = "an app expecting {string} in the response")]
async fn app_expecting(world: &mut VigilWorld, marker: String) {
    world.app = Some(AppSpec {
        name: "Svc".to_string(),
        url: "https://x".to_string(),
        expected: marker,
    });
}

#[when(expr = "the endpoint responds {int} with body {string}")]
async fn endpoint_responds(world: &mut VigilWorld, status: u16, body: String) {
    world.http.push_response(status, &body);
    probe(world).await;
}

#[when("the endpoint is unreachable")]
async fn endpoint_unreachable(world: &mut VigilWorld) {
    world.http.push_unreachable();
    probe(world).await;
}

async fn probe(world: &mut VigilWorld) {
    let app = world.app.clone().expect("no app configured");
    let http: Arc<dyn HttpClient> = world.http.clone();
    let prober = HttpProber::new(http);
    world.last_result = Some(prober.probe(&app).await);
}

#[then(expr = "the outcome is OK with status {int}")]
async fn outcome_ok(world: &mut VigilWorld, status: u16) {
    let result = world.last_result.as_ref().expect("no probe result");
    assert_eq!(result.outcome, Outcome::Ok);
    assert_eq!(result.status, Some(status));
}

#[then(expr = "the outcome is invalid response with status {int}")]
async fn outcome_invalid(world: &mut VigilWorld, status: u16) {
    let result = world.last_result.as_ref().expect("no probe result");
    assert_eq!(result.outcome, Outcome::InvalidResponse);
    assert_eq!(result.status, Some(status));
}

#[then("the outcome is a transport error without a status code")]
async fn outcome_transport_error(world: &mut VigilWorld) {
    let result = world.last_result.as_ref().expect("no probe result");
    assert!(matches!(result.outcome, Outcome::TransportError { .. }));
    assert_eq!(result.status, None);
    assert_eq!(result.status_display(), "N/A");
}
