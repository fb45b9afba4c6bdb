use std::io;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{error, info, warn};
use serde::Deserialize;

use autocomp_core::Error;
use autocomp_core::model::prediction::checked_limit;
use autocomp_core::model::word_model::WordModel;

mod config;

use config::{Config, Settings};

/// Struct representing query parameters for the `/v1/predict` endpoint
#[derive(Deserialize)]
struct PredictParams {
	line: Option<String>,
	limit: Option<i64>,
}

/// Struct representing query parameters for the `/v1/next` endpoint
#[derive(Deserialize)]
struct NextParams {
	prev: String,
	partial: Option<String>,
	limit: Option<i64>,
}

/// Resolves the requested limit, falling back to the configured one.
fn resolve_limit(limit: Option<i64>, settings: &Settings) -> Result<usize, Error> {
	match limit {
		Some(limit) => checked_limit(limit),
		None => Ok(settings.limit),
	}
}

fn error_response(e: Error) -> HttpResponse {
	match e {
		Error::InvalidInput(_) => {
			warn!("Rejected request: {}", e);
			HttpResponse::BadRequest().body(e.to_string())
		}
		Error::Io(_) => {
			error!("Request failed: {}", e);
			HttpResponse::InternalServerError().body(e.to_string())
		}
	}
}

/// HTTP GET endpoint `/v1/predict`
///
/// Completes the last word of `line`, using the word before it as context
/// when there is one. Returns a JSON array of `{ word, count }`.
#[get("/v1/predict")]
async fn get_predict(
	model: web::Data<WordModel>,
	settings: web::Data<Settings>,
	query: web::Query<PredictParams>,
) -> impl Responder {
	let limit = match resolve_limit(query.limit, &settings) {
		Ok(limit) => limit,
		Err(e) => return error_response(e),
	};

	match model.predict(query.line.as_deref().unwrap_or_default(), limit) {
		Ok(predictions) => HttpResponse::Ok().json(predictions),
		Err(e) => error_response(e),
	}
}

/// HTTP GET endpoint `/v1/next`
///
/// Lists the words observed after `prev` that start with `partial`.
#[get("/v1/next")]
async fn get_next(
	model: web::Data<WordModel>,
	settings: web::Data<Settings>,
	query: web::Query<NextParams>,
) -> impl Responder {
	let limit = match resolve_limit(query.limit, &settings) {
		Ok(limit) => limit,
		Err(e) => return error_response(e),
	};

	let partial = query.partial.as_deref().unwrap_or_default();
	HttpResponse::Ok().json(model.predict_next_word(&query.prev, partial, limit))
}

/// HTTP GET endpoint `/v1/model`
#[get("/v1/model")]
async fn get_model(model: web::Data<WordModel>) -> impl Responder {
	HttpResponse::Ok().json(model.stats())
}

fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_predict).service(get_next).service(get_model);
}

/// Main entry point for the server.
///
/// Builds the word model from the corpus, then starts an Actix-web HTTP
/// server sharing it between workers. The model is never mutated after
/// construction, so no lock is needed.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let config = Config::parse();

	let model = match WordModel::from_file(&config.corpus) {
		Ok(model) => model,
		Err(e) => {
			error!("Cannot build model from {}: {}", config.corpus.display(), e);
			return Err(io::Error::other(e));
		}
	};
	let model = web::Data::new(model);
	let settings = web::Data::new(Settings::from(&config));

	info!("Listening on {}:{}", config.host, config.port);
	let mut server = HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(model.clone())
			.app_data(settings.clone())
			.configure(routes)
	});
	if let Some(workers) = config.workers {
		server = server.workers(workers);
	}

	server.bind((config.host.as_str(), config.port))?.run().await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;
	use autocomp_core::model::prediction::Prediction;
	use autocomp_core::model::word_model::ModelStats;

	const SAMPLE: &str = "short text for short test for you";

	macro_rules! init_app {
		() => {
			test::init_service(
				App::new()
					.app_data(web::Data::new(WordModel::from_text(SAMPLE)))
					.app_data(web::Data::new(Settings { limit: 5 }))
					.configure(routes),
			)
			.await
		};
	}

	#[actix_web::test]
	async fn predicts_prefix() {
		let app = init_app!();
		let req = test::TestRequest::get().uri("/v1/predict?line=sh").to_request();
		let body: Vec<Prediction> = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body, [Prediction::new("short", 2)]);
	}

	#[actix_web::test]
	async fn predicts_with_context() {
		let app = init_app!();
		let req = test::TestRequest::get().uri("/v1/predict?line=short%20t&limit=1").to_request();
		let body: Vec<Prediction> = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body, [Prediction::new("test", 1)]);
	}

	#[actix_web::test]
	async fn empty_line_is_bad_request() {
		let app = init_app!();
		for uri in ["/v1/predict", "/v1/predict?line=", "/v1/predict?line=%20%20"] {
			let req = test::TestRequest::get().uri(uri).to_request();
			let resp = test::call_service(&app, req).await;
			assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
		}
	}

	#[actix_web::test]
	async fn negative_limit_is_bad_request() {
		let app = init_app!();
		let req = test::TestRequest::get().uri("/v1/predict?line=sh&limit=-1").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn zero_limit_is_empty() {
		let app = init_app!();
		let req = test::TestRequest::get().uri("/v1/predict?line=sh&limit=0").to_request();
		let body: Vec<Prediction> = test::call_and_read_body_json(&app, req).await;
		assert!(body.is_empty());
	}

	#[actix_web::test]
	async fn next_lists_successors() {
		let app = init_app!();
		let req = test::TestRequest::get().uri("/v1/next?prev=for").to_request();
		let body: Vec<Prediction> = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body, [Prediction::new("short", 1), Prediction::new("you", 1)]);

		let req = test::TestRequest::get().uri("/v1/next?prev=you&partial=f").to_request();
		let body: Vec<Prediction> = test::call_and_read_body_json(&app, req).await;
		assert!(body.is_empty());
	}

	#[actix_web::test]
	async fn model_stats() {
		let app = init_app!();
		let req = test::TestRequest::get().uri("/v1/model").to_request();
		let body: ModelStats = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body.tokens, 7);
		assert_eq!(body.vocabulary, 5);

		let raw = test::call_and_read_body(&app, test::TestRequest::get().uri("/v1/model").to_request()).await;
		let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
		assert!(json["name"].is_null());
	}
}
