use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const API_TITLE: &str = "Receipt Processor API";

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_app_for(container, Some(addr.clone()));

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Routes without an advertised server address, as used in tests.
#[cfg(test)]
pub fn build_app(container: DependencyContainer) -> impl Endpoint {
    build_app_for(container, None)
}

fn build_app_for(container: DependencyContainer, addr: Option<String>) -> impl Endpoint {
    let mut api_service = OpenApiService::new(
        (container.health_api, container.receipt_api),
        API_TITLE,
        env!("CARGO_PKG_VERSION"),
    );
    if let Some(addr) = addr {
        api_service = api_service.server(format!("http://{}", addr));
    }

    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();
    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .with(Tracing)
}

#[cfg(test)]
mod tests {
    use poem::test::TestClient;

    use super::*;

    fn served_app() -> impl Endpoint {
        let addr = String::from("0.0.0.0:9090");
        build_app_for(DependencyContainer::new(), Some(addr))
    }

    #[tokio::test]
    async fn should_advertise_bind_address_in_openapi_document() {
        let cli = TestClient::new(served_app());

        let resp = cli.get("/openapi.json").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        let url = json
            .value()
            .object()
            .get("servers")
            .array()
            .get(0)
            .object()
            .get("url")
            .string()
            .to_string();

        assert_eq!(url, "http://0.0.0.0:9090");
    }
}
