use std::sync::Arc;

use auth::Authenticator;
use shelter_service::config::Config;
use shelter_service::domain::adoption::service::AdoptionService;
use shelter_service::domain::comment::service::CommentService;
use shelter_service::domain::pet::service::PetService;
use shelter_service::domain::user::service::UserService;
use shelter_service::domain::wild_animal::service::WildAnimalService;
use shelter_service::inbound::http::router::create_router;
use shelter_service::inbound::http::router::AppState;
use shelter_service::outbound::repositories::PostgresAdoptionRepository;
use shelter_service::outbound::repositories::PostgresCommentRepository;
use shelter_service::outbound::repositories::PostgresPetRepository;
use shelter_service::outbound::repositories::PostgresUserRepository;
use shelter_service::outbound::repositories::PostgresWildAnimalRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelter_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "shelter-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let pet_repository = Arc::new(PostgresPetRepository::new(pg_pool.clone()));
    let wild_animal_repository = Arc::new(PostgresWildAnimalRepository::new(pg_pool.clone()));
    let adoption_repository = Arc::new(PostgresAdoptionRepository::new(pg_pool.clone()));
    let comment_repository = Arc::new(PostgresCommentRepository::new(pg_pool));

    let state = AppState {
        users: Arc::new(UserService::new(user_repository)),
        pets: Arc::new(PetService::new(Arc::clone(&pet_repository))),
        wild_animals: Arc::new(WildAnimalService::new(wild_animal_repository)),
        adoptions: Arc::new(AdoptionService::new(adoption_repository, pet_repository)),
        comments: Arc::new(CommentService::new(comment_repository)),
        authenticator,
        jwt_expiration_hours: config.jwt.expiration_hours,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(state);
    axum::serve(http_listener, application).await?;

    Ok(())
}
