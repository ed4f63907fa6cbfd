use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use shoprank_core::{Error, ProductId, Record};
use shoprank_recommend::{RecommendRequest, Recommender};
use std::sync::Arc;

#[derive(Deserialize)]
struct NumsParams {
    nums: Option<usize>,
}

#[derive(Deserialize)]
struct TextParams {
    q: String,
    nums: Option<usize>,
}

#[derive(Serialize)]
struct RecommendResponse {
    result: Vec<Record>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(recommender: Arc<Recommender>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(recommender.clone()))
                .configure(Self::configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Register all routes; expects `web::Data<Arc<Recommender>>` on the app
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.route("/health", web::get().to(health))
            .route("/items/{product_id}", web::get().to(get_item))
            .route("/recommend", web::post().to(recommend))
            .route("/recommend/item/{product_id}", web::get().to(recommend_by_item))
            .route("/recommend/text", web::get().to(recommend_by_text))
            .route("/recommend/user/{user_id}", web::get().to(recommend_by_user));
    }
}

fn error_response(e: &Error) -> HttpResponse {
    let body = ErrorBody {
        error: e.to_string(),
        kind: e.kind(),
    };
    match e {
        Error::InvalidQuery(_) | Error::InvalidUser(_) => HttpResponse::BadRequest().json(body),
        Error::NotFound(_) => HttpResponse::NotFound().json(body),
        _ => {
            tracing::error!(error = %e, "recommendation failed");
            HttpResponse::InternalServerError().json(body)
        }
    }
}

fn respond(result: shoprank_core::Result<Vec<Record>>) -> HttpResponse {
    match result {
        Ok(result) => HttpResponse::Ok().json(RecommendResponse { result }),
        Err(e) => error_response(&e),
    }
}

async fn health(recommender: web::Data<Arc<Recommender>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(recommender.stats()))
}

async fn get_item(
    recommender: web::Data<Arc<Recommender>>,
    path: web::Path<u64>,
) -> ActixResult<HttpResponse> {
    match recommender.item(ProductId(path.into_inner())) {
        Ok(record) => Ok(HttpResponse::Ok().json(record)),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn recommend(
    recommender: web::Data<Arc<Recommender>>,
    req: web::Json<RecommendRequest>,
) -> ActixResult<HttpResponse> {
    Ok(respond(recommender.recommend(&req)))
}

async fn recommend_by_item(
    recommender: web::Data<Arc<Recommender>>,
    path: web::Path<u64>,
    params: web::Query<NumsParams>,
) -> ActixResult<HttpResponse> {
    let nums = recommender.config().resolve_nums(params.nums);
    Ok(respond(
        recommender.recommend_by_item(ProductId(path.into_inner()), nums),
    ))
}

async fn recommend_by_text(
    recommender: web::Data<Arc<Recommender>>,
    params: web::Query<TextParams>,
) -> ActixResult<HttpResponse> {
    let nums = recommender.config().resolve_nums(params.nums);
    Ok(respond(recommender.recommend_by_text(&params.q, nums, None)))
}

async fn recommend_by_user(
    recommender: web::Data<Arc<Recommender>>,
    path: web::Path<String>,
    params: web::Query<NumsParams>,
) -> ActixResult<HttpResponse> {
    let nums = recommender.config().resolve_nums(params.nums);
    Ok(respond(recommender.recommend_by_user(&path.into_inner(), nums)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use shoprank_core::{Catalog, Item, ScoredItem};
    use shoprank_rating::{RatingOracle, UserId};
    use shoprank_recommend::RecommenderConfig;
    use shoprank_similarity::SimilarityOracle;

    struct FlatSimilarity(Vec<ProductId>);

    impl SimilarityOracle for FlatSimilarity {
        fn similarities(&self, _tokens: &[String]) -> Vec<ScoredItem> {
            self.0.iter().map(|&id| ScoredItem::new(id, 0.5)).collect()
        }

        fn indexed_items(&self) -> usize {
            self.0.len()
        }
    }

    struct FlatRating;

    impl RatingOracle for FlatRating {
        fn predict(&self, _user: UserId, _item: ProductId) -> f32 {
            3.0
        }

        fn user_count(&self) -> u32 {
            1000
        }
    }

    /// Item 9 is scored by the oracle but absent from the catalog
    fn recommender(with_orphan: bool) -> Arc<Recommender> {
        let catalog = Catalog::new(vec![
            Item::new(1u64, "Áo").with_sub_category("Áo").with_rating(4.0),
            Item::new(2u64, "Quần").with_sub_category("Quần").with_rating(5.0),
            Item::new(3u64, "Giày").with_sub_category("Giày"),
        ])
        .unwrap();
        let mut scored: Vec<ProductId> = catalog.product_ids();
        if with_orphan {
            scored.insert(0, ProductId(9));
        }
        Arc::new(
            Recommender::new(
                Arc::new(catalog),
                Arc::new(FlatSimilarity(scored)),
                Arc::new(FlatRating),
                RecommenderConfig::default(),
            )
            .unwrap(),
        )
    }

    macro_rules! app {
        ($recommender:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($recommender))
                    .configure(RestApi::configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_recommend_by_item() {
        let app = app!(recommender(false));
        let req = test::TestRequest::get().uri("/recommend/item/1?nums=2").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let ids: Vec<u64> = body["result"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["product_id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[actix_web::test]
    async fn test_status_codes() {
        let app = app!(recommender(false));

        let req = test::TestRequest::get().uri("/recommend/item/77").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/recommend/user/000").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "invalid_user");

        let req = test::TestRequest::post()
            .uri("/recommend")
            .set_json(serde_json::json!({"nums": 3}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_text_and_user_routes() {
        let app = app!(recommender(false));

        let req = test::TestRequest::get().uri("/recommend/text?q=%C3%A1o&nums=3").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"].as_array().unwrap().len(), 3);

        let req = test::TestRequest::post()
            .uri("/recommend")
            .set_json(serde_json::json!({"user_id": 42, "nums": 2}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_integrity_error_is_server_error() {
        let app = app!(recommender(true));
        let req = test::TestRequest::get().uri("/recommend/text?q=x").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_health_and_item() {
        let app = app!(recommender(false));

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["catalog_items"], 3);
        assert_eq!(body["trained_users"], 1000);

        let req = test::TestRequest::get().uri("/items/2").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["product_name"], "Quần");
    }
}
