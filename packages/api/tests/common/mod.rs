use std::net::SocketAddr;

use api::ApiConfig;
use axum::Router;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return a config pointing at it.
pub async fn serve(router: Router) -> std::io::Result<ApiConfig> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(config_for(addr))
}

pub fn config_for(addr: SocketAddr) -> ApiConfig {
    ApiConfig::new(&format!("http://{addr}")).expect("local address is a valid base url")
}

pub fn job_json(id: i64) -> Value {
    json!({
        "id": id,
        "title": format!("Engineer {id}"),
        "company": "Acme",
        "location": "Remote",
        "description": "Build things",
        "salary_range": "100k-120k",
        "required_skills": ["rust"],
        "posting_date": "2024-03-01T00:00:00Z",
        "expiration_date": "2024-04-01T00:00:00Z",
        "status": "active",
        "created_at": "2024-02-28T09:00:00Z",
        "updated_at": "2024-02-28T09:00:00Z"
    })
}
