use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_movie::create_movie;
use super::handlers::create_review::create_review;
use super::handlers::delete_movie::delete_movie;
use super::handlers::delete_review::delete_review;
use super::handlers::get_recommendations::get_recommendations;
use super::handlers::list_movies::list_movies;
use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::register::register;
use super::handlers::replace_review::replace_review;
use super::handlers::replace_user::replace_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::movie::ports::MovieRepository;
use crate::domain::movie::ports::MovieServicePort;
use crate::domain::movie::service::MovieService;
use crate::domain::recommendation::ports::RecommendationServicePort;
use crate::domain::recommendation::service::RecommendationService;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::review::ports::ReviewServicePort;
use crate::domain::review::service::ReviewService;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::domain::user::service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub movie_service: Arc<dyn MovieServicePort>,
    pub review_service: Arc<dyn ReviewServicePort>,
    pub recommendation_service: Arc<dyn RecommendationServicePort>,
    pub authenticator: Arc<Authenticator>,
}

impl AppState {
    /// Wire the domain services over the given stores.
    pub fn new<UR, MR, RR>(
        users: Arc<UR>,
        movies: Arc<MR>,
        reviews: Arc<RR>,
        authenticator: Arc<Authenticator>,
    ) -> Self
    where
        UR: UserRepository,
        MR: MovieRepository,
        RR: ReviewRepository,
    {
        Self {
            user_service: Arc::new(UserService::new(
                Arc::clone(&users),
                Arc::clone(&authenticator),
            )),
            movie_service: Arc::new(MovieService::new(movies)),
            review_service: Arc::new(ReviewService::new(reviews)),
            recommendation_service: Arc::new(RecommendationService::new(users)),
            authenticator,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/movies", get(list_movies));

    let protected_routes = Router::new()
        .route("/users/me", get(me))
        .route("/users/:user_id", put(replace_user))
        .route("/movies", post(create_movie))
        .route("/movies/:movie_id", delete(delete_movie))
        .route("/reviews", post(create_review))
        .route("/reviews/:review_id", put(replace_review))
        .route("/reviews/:review_id", delete(delete_review))
        .route("/recommendations/:user_id", get(get_recommendations))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
