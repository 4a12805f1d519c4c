#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, Response, StatusCode},
        Router,
    };
    use ethers::contract::EthCall;
    use ethers::core::abi::AbiDecode;
    use pretty_assertions::assert_eq;
    use rating_app::api::{server::create_app, AppState};
    use rating_app::chain::{
        ChainTarget, FeedbackContractCalls, StoreFeedbackCall, UpdateMessageCall,
        UpdateRatingCall, DEFAULT_CONTRACT_ADDRESS,
    };
    use rating_app::models::{ExecutionResponse, SerializableTransaction};
    use rating_app::{FixedJitter, Jitter, UniformJitter};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const PREFLIGHT_HEADERS: &str = "Content-Type, Authorization, X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Date, X-Api-Version";

    fn app_with(jitter: impl Jitter + 'static) -> Router {
        let chain = ChainTarget::fuji(DEFAULT_CONTRACT_ADDRESS.parse().unwrap());
        create_app(AppState::new(chain, jitter))
    }

    fn app() -> Router {
        app_with(FixedJitter(0.0))
    }

    async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_bytes(response: Response<Body>) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response<Body>) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    async fn transaction_from(response: Response<Body>) -> SerializableTransaction {
        let body: ExecutionResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.chain_id, "Avalanche Fuji");
        serde_json::from_str(&body.serialized_transaction).unwrap()
    }

    fn assert_cors(response: &Response<Body>) {
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = send(app(), Method::GET, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"OK");
    }

    #[tokio::test]
    async fn test_manifest_uses_request_host() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/rating-app")
                    .header("host", "rating.example.com")
                    .header("x-forwarded-proto", "https")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);

        let body = body_json(response).await;
        assert_eq!(body["title"], json!("Review our Restaurant"));
        assert_eq!(body["baseUrl"], json!("https://rating.example.com"));
        assert_eq!(body["actions"][0]["type"], json!("dynamic"));
        assert_eq!(body["actions"][0]["params"][0]["type"], json!("textarea"));
        assert_eq!(body["actions"][0]["params"][1]["type"], json!("number"));
    }

    #[tokio::test]
    async fn test_manifest_defaults_base_url() {
        let response = send(app(), Method::GET, "/api/rating-app").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["baseUrl"], json!("http://localhost:3000"));
    }

    #[tokio::test]
    async fn test_manifest_validation_failure_is_500() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/rating-app")
                    .header("x-forwarded-proto", "ftp")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(&response);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to create metadata" })
        );
    }

    #[tokio::test]
    async fn test_preflight_on_every_route() {
        for uri in [
            "/api/rating-app",
            "/api/rating-app/updateMessage",
            "/api/rating-app/updateRating",
        ] {
            let response = send(app(), Method::OPTIONS, uri).await;

            assert_eq!(response.status(), StatusCode::NO_CONTENT, "{uri}");
            assert_cors(&response);
            assert_eq!(
                response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
                PREFLIGHT_HEADERS
            );
            assert!(body_bytes(response).await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_submit_positive_feedback() {
        let response = send(
            app(),
            Method::POST,
            "/api/rating-app?feedback=great%20food%2C%20loved%20it!&rating=4",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type, Authorization"
        );

        let tx = transaction_from(response).await;
        assert_eq!(tx.to, DEFAULT_CONTRACT_ADDRESS);
        assert_eq!(tx.chain_id, 43113);
        assert_eq!(tx.tx_type, "legacy");
        assert_eq!(
            StoreFeedbackCall::decode(&tx.data).unwrap(),
            StoreFeedbackCall {
                message: "great food, loved it!".to_string(),
                rating: 4,
            }
        );
    }

    #[tokio::test]
    async fn test_submit_negative_feedback() {
        let response = send(
            app_with(FixedJitter(-0.1)),
            Method::POST,
            "/api/rating-app?feedback=terrible+cold+soup&rating=2",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let call = StoreFeedbackCall::decode(&transaction_from(response).await.data).unwrap();
        assert_eq!(call.message, "terrible cold soup");
        assert!((1..=2).contains(&call.rating));
    }

    #[tokio::test]
    async fn test_submit_rejects_bad_input() {
        let cases = [
            ("/api/rating-app?rating=4", "Both feedback and rating parameters are required"),
            ("/api/rating-app?feedback=nice", "Both feedback and rating parameters are required"),
            ("/api/rating-app?feedback=&rating=3", "Both feedback and rating parameters are required"),
            ("/api/rating-app?feedback=nice&rating=five", "Rating must be a valid number"),
            ("/api/rating-app?feedback=nice&rating=7", "Rating must be between 1 and 5"),
            ("/api/rating-app?feedback=nice&rating=0", "Rating must be between 1 and 5"),
        ];

        for (uri, message) in cases {
            let response = send(app(), Method::POST, uri).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            assert_cors(&response);
            assert_eq!(body_json(response).await, json!({ "error": message }), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_resubmission_keeps_destination_and_selector() {
        let uri = "/api/rating-app?feedback=good%20service%20%F0%9F%91%8D&rating=3";

        let first = transaction_from(send(app_with(UniformJitter), Method::POST, uri).await).await;
        let second = transaction_from(send(app_with(UniformJitter), Method::POST, uri).await).await;

        assert_eq!(first.to, second.to);
        assert_eq!(first.chain_id, second.chain_id);
        assert_eq!(&first.data[..4], &second.data[..4]);
        assert_eq!(&first.data[..4], StoreFeedbackCall::selector().as_slice());

        for tx in [first, second] {
            let call = StoreFeedbackCall::decode(&tx.data).unwrap();
            assert!((1..=5).contains(&call.rating));
        }
    }

    #[tokio::test]
    async fn test_update_message() {
        let response = send(
            app(),
            Method::POST,
            "/api/rating-app/updateMessage?feedback=the%20soup%20was%20fine%20after%20all",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let tx = transaction_from(response).await;
        assert_eq!(
            FeedbackContractCalls::decode(&tx.data).unwrap(),
            FeedbackContractCalls::UpdateMessage(UpdateMessageCall {
                new_message: "the soup was fine after all".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_update_message_requires_feedback() {
        let response = send(app(), Method::POST, "/api/rating-app/updateMessage").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_cors(&response);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Feedback parameter is required" })
        );
    }

    #[tokio::test]
    async fn test_update_rating() {
        let response = send(app(), Method::POST, "/api/rating-app/updateRating?rating=3").await;

        assert_eq!(response.status(), StatusCode::OK);
        let tx = transaction_from(response).await;
        assert_eq!(
            UpdateRatingCall::decode(&tx.data).unwrap(),
            UpdateRatingCall { new_rating: 3 }
        );
    }

    #[tokio::test]
    async fn test_update_rating_rejects_bad_input() {
        let cases = [
            ("/api/rating-app/updateRating", "Rating parameter is required"),
            ("/api/rating-app/updateRating?rating=abc", "Rating must be a valid number"),
            ("/api/rating-app/updateRating?rating=6", "Rating must be between 1 and 5"),
            ("/api/rating-app/updateRating?rating=2.5", "Rating must be a whole number"),
        ];

        for (uri, message) in cases {
            let response = send(app(), Method::POST, uri).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body_json(response).await, json!({ "error": message }), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_repeated_parameters_use_first_value() {
        let response = send(
            app(),
            Method::POST,
            "/api/rating-app?feedback=nice&feedback=ok&rating=4&rating=9",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            StoreFeedbackCall::decode(&transaction_from(response).await.data).unwrap(),
            StoreFeedbackCall {
                message: "nice".to_string(),
                rating: 4,
            }
        );

        let response = send(
            app(),
            Method::POST,
            "/api/rating-app/updateMessage?feedback=first&feedback=second",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            UpdateMessageCall::decode(&transaction_from(response).await.data).unwrap(),
            UpdateMessageCall {
                new_message: "first".to_string(),
            }
        );

        let response = send(
            app(),
            Method::POST,
            "/api/rating-app/updateRating?rating=2&rating=abc",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            UpdateRatingCall::decode(&transaction_from(response).await.data).unwrap(),
            UpdateRatingCall { new_rating: 2 }
        );
    }

    #[tokio::test]
    async fn test_repeated_rating_checks_first_value() {
        let response = send(
            app(),
            Method::POST,
            "/api/rating-app?feedback=nice&rating=9&rating=4",
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Rating must be between 1 and 5" })
        );
    }

    #[tokio::test]
    async fn test_update_rating_accepts_hex_rating() {
        let response = send(app(), Method::POST, "/api/rating-app/updateRating?rating=0x4").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            UpdateRatingCall::decode(&transaction_from(response).await.data).unwrap(),
            UpdateRatingCall { new_rating: 4 }
        );
    }

    #[tokio::test]
    async fn test_unsupported_method_still_has_cors_headers() {
        let response = send(app(), Method::DELETE, "/api/rating-app").await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_cors(&response);
    }
}
