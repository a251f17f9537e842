//! Throwaway HTTP server standing in for upstream services (Hub-HRMS,
//! SendGrid) in adapter tests. Replies with a canned status and body and
//! records every request it receives.

use actix_web::{http::StatusCode, web, App, HttpRequest, HttpResponse, HttpServer};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl SeenRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

struct Reply {
    status: u16,
    body: String,
    delay: Duration,
}

pub struct FakeHttpServer {
    base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl FakeHttpServer {
    pub async fn start(status: u16, body: &str) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn start_with_delay(status: u16, body: &str, delay: Duration) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let reply = Arc::new(Reply {
            status,
            body: body.to_string(),
            delay,
        });

        let seen_for_app = Arc::clone(&seen);
        let server = HttpServer::new(move || {
            let seen = Arc::clone(&seen_for_app);
            let reply = Arc::clone(&reply);

            App::new().default_service(web::to(move |req: HttpRequest, body: web::Bytes| {
                let seen = Arc::clone(&seen);
                let reply = Arc::clone(&reply);
                async move {
                    seen.lock().unwrap().push(SeenRequest {
                        method: req.method().to_string(),
                        path: req.path().to_string(),
                        headers: req
                            .headers()
                            .iter()
                            .filter_map(|(k, v)| {
                                v.to_str().ok().map(|v| (k.to_string(), v.to_string()))
                            })
                            .collect(),
                        body: body.to_vec(),
                    });

                    if !reply.delay.is_zero() {
                        tokio::time::sleep(reply.delay).await;
                    }

                    HttpResponse::build(StatusCode::from_u16(reply.status).unwrap())
                        .content_type("application/json")
                        .body(reply.body.clone())
                }
            }))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            base_url: format!("http://{}", addr),
            seen,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}
