use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use assessment_results::{
    app_state::AppState,
    config::Config,
    db::Database,
    graphql::create_schema,
    handlers::{graphiql, graphql, health_check},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let database = Database::connect(&config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let app_state = AppState::new(config.clone(), &database).await;
    let schema = create_schema(app_state);

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );
    log::info!(
        "GraphiQL playground: http://{}:{}/graphiql",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header();

        App::new()
            .app_data(web::Data::new(schema.clone()))
            .app_data(web::Data::new(database.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .service(health_check)
            .route("/graphql", web::post().to(graphql))
            .route("/graphiql", web::get().to(graphiql))
    })
    .bind((config.web_server_host.clone(), config.web_server_port))?
    .run()
    .await
}
