use std::sync::Arc;

use actix_web::{get, http::StatusCode, middleware::Logger, web, App, HttpResponse, HttpServer};
use serde_json::json;

use crate::{
    handler::{handle, HandlerOptions, Response},
    sheet::fetch::CellFeedSource,
};

pub struct ServerState {
    pub options: HandlerOptions,
    pub source: Arc<dyn CellFeedSource + Send + Sync>,
}

fn to_http_response(response: Response) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut builder = HttpResponse::build(status);
    for (name, value) in &response.headers {
        builder.insert_header((name.as_str(), value.as_str()));
    }
    builder.body(response.body)
}

async fn respond(state: web::Data<ServerState>, id: Option<String>) -> HttpResponse {
    // The feed source blocks on the network, keep it off the async workers.
    let result =
        web::block(move || handle(id.as_deref(), state.source.as_ref(), &state.options)).await;
    match result {
        Ok(response) => to_http_response(response),
        Err(err) => {
            log::error!("Spreadsheet handler did not complete: {}", err);
            HttpResponse::InternalServerError().json(json!({ "message": err.to_string() }))
        }
    }
}

#[get("/")]
async fn missing_spreadsheet(state: web::Data<ServerState>) -> HttpResponse {
    respond(state, None).await
}

#[get("/{id}")]
async fn spreadsheet(state: web::Data<ServerState>, path: web::Path<String>) -> HttpResponse {
    respond(state, Some(path.into_inner())).await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(missing_spreadsheet).service(spreadsheet);
}

/// Run the HTTP server on the current thread until it is shut down.
pub fn run_server(bind_address: &str, port: u16, state: ServerState) -> std::io::Result<()> {
    let state = web::Data::new(state);
    log::info!("Listening on {}:{}", bind_address, port);
    actix_web::rt::System::new().block_on(async move {
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .app_data(state.clone())
                .configure(configure)
        })
        .bind((bind_address, port))?
        .run()
        .await
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, web, App};

    use crate::{
        handler::HandlerOptions,
        sheet::{
            coordinates::CoordinateMode,
            error::{SheetError, SheetResult},
            fetch::CellFeedSource,
            transform::NATIONAL_PARKS_FEED,
        },
    };

    use super::{configure, ServerState};

    /// Serves the national parks feed for "test-id" and nothing else.
    struct NationalParksSource;

    impl CellFeedSource for NationalParksSource {
        fn fetch_cell_feed(&self, id: &str) -> SheetResult<String> {
            match id {
                "test-id" => Ok(NATIONAL_PARKS_FEED.to_string()),
                _ => Err(SheetError::NotFound(id.to_string())),
            }
        }
    }

    fn state(cors: bool) -> web::Data<ServerState> {
        web::Data::new(ServerState {
            options: HandlerOptions {
                cors,
                coordinate_mode: CoordinateMode::Legacy,
            },
            source: Arc::new(NationalParksSource),
        })
    }

    #[actix_web::test]
    async fn test_spreadsheet_route() {
        let app = test::init_service(App::new().app_data(state(true)).configure(configure)).await;
        let request = test::TestRequest::get().uri("/test-id").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(StatusCode::OK, response.status());
        assert_eq!(
            "*",
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap()
                .to_str()
                .unwrap()
        );
        assert_eq!(
            "application/json",
            response
                .headers()
                .get("content-type")
                .unwrap()
                .to_str()
                .unwrap()
        );
        let body = test::read_body(response).await;
        let geojson: geojson::GeoJson = std::str::from_utf8(&body).unwrap().parse().unwrap();
        assert!(matches!(geojson, geojson::GeoJson::FeatureCollection(_)));
    }

    #[actix_web::test]
    async fn test_missing_id_route() {
        let app = test::init_service(App::new().app_data(state(false)).configure(configure)).await;
        let request = test::TestRequest::get().uri("/").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(StatusCode::BAD_REQUEST, response.status());
        assert!(response.headers().get("access-control-allow-origin").is_none());
        let body = test::read_body(response).await;
        assert_eq!(r#"{"message":"no spreadsheet ID provided"}"#.as_bytes(), &body[..]);
    }

    #[actix_web::test]
    async fn test_unknown_spreadsheet_route() {
        let app = test::init_service(App::new().app_data(state(true)).configure(configure)).await;
        let request = test::TestRequest::get().uri("/invalid-id-123").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(StatusCode::NOT_FOUND, response.status());
        let body = test::read_body(response).await;
        assert_eq!(
            r#"{"message":"unable to find spreadsheet with id: invalid-id-123"}"#.as_bytes(),
            &body[..]
        );
    }
}
