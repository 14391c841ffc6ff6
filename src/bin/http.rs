#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;

    use course_planner::{CourseConfig, http_api, load_config_or_default};

    let addr: SocketAddr = std::env::var("COURSE_PLANNER_HTTP_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;

    let config = match std::env::var("COURSE_PLANNER_CONFIG") {
        Ok(path) => load_config_or_default(path),
        Err(_) => CourseConfig::default(),
    };

    println!("course-planner HTTP API listening on http://{addr}");
    http_api::serve(addr, config).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
