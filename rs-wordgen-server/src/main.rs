mod config;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use env_logger::Env;

use rs_wordgen_core::GenerationConfig;

use crate::config::ServerConfig;

/// HTTP GET endpoint `/`
///
/// Generates one word and returns it as the whole `text/plain` body.
/// Query parameters are ignored.
#[get("/")]
async fn get_word(config: web::Data<GenerationConfig>) -> impl Responder {
	// Thread-local generator: one independent source per worker thread.
	let word = config.generate(&mut rand::rng());
	HttpResponse::Ok().content_type("text/plain").body(word)
}

fn cors() -> Cors {
	Cors::default()
		.allow_any_origin()
		.allowed_methods(vec!["GET"])
		.max_age(3600)
}

/// Main entry point for the server.
///
/// Reads the process configuration, builds the immutable generation config
/// (defaults, or the JSON file named by `WORDGEN_CONFIG`) and serves it.
/// Any configuration error is fatal.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let server_config = ServerConfig::from_env().map_err(|e| {
		log::error!("Invalid server configuration: {e}");
		std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
	})?;

	let generation_config = match &server_config.generation_config {
		Some(path) => GenerationConfig::from_file(path),
		None => {
			log::info!("Using default generation config");
			Ok(GenerationConfig::default())
		}
	}
	.map_err(|e| {
		log::error!("Invalid generation config: {e}");
		std::io::Error::other(e)
	})?;

	log::info!(
		"Serving word generator at {}:{} with {} workers...",
		server_config.host,
		server_config.port,
		server_config.workers
	);

	let shared_config = web::Data::new(generation_config);

	HttpServer::new(move || {
		App::new()
			.app_data(shared_config.clone())
			.wrap(cors())
			.wrap(Logger::default())
			.service(get_word)
	})
		.workers(server_config.workers)
		.bind((server_config.host.as_str(), server_config.port))?
		.run()
		.await
}
