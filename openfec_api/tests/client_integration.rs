use openfec_api::{Client, Error, TotalsQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

const TOTALS_PATH: &str = "/v1/committee/C00401224/totals/";

async fn client_for(mock_server: &MockServer) -> Client {
    let base_url = format!("{}/v1", mock_server.uri());
    Client::with_base_url(&base_url, "test-key".to_string()).unwrap()
}

#[tokio::test]
async fn get_committee_totals_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("committee_totals.json");

    Mock::given(method("GET"))
        .and(path(TOTALS_PATH))
        .and(query_param("api_key", "test-key"))
        .and(query_param("cycle", "2024"))
        .and(query_param("is_amended", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let result = client
        .get_committee_totals("C00401224", &TotalsQuery::for_year(2024))
        .await;
    assert!(result.is_ok());

    let resp = result.unwrap();
    assert_eq!(resp.results.len(), 1);
    assert_eq!(
        resp.results[0].committee_name.as_deref(),
        Some("CITIZENS FOR PROGRESS")
    );
}

#[tokio::test]
async fn get_committee_totals_empty() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("committee_totals_empty.json");

    Mock::given(method("GET"))
        .and(path(TOTALS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let resp = client
        .get_committee_totals("C00401224", &TotalsQuery::for_year(2024))
        .await
        .unwrap();
    assert!(resp.results.is_empty());
}

#[tokio::test]
async fn get_committee_totals_invalid_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TOTALS_PATH))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let result = client
        .get_committee_totals("C00401224", &TotalsQuery::for_year(2024))
        .await;
    assert!(matches!(result.unwrap_err(), Error::InvalidApiKey));
}

#[tokio::test]
async fn get_committee_totals_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TOTALS_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let result = client
        .get_committee_totals("C00401224", &TotalsQuery::for_year(2024))
        .await;
    assert!(matches!(result.unwrap_err(), Error::RateLimited));
}

#[tokio::test]
async fn get_committee_totals_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TOTALS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let result = client
        .get_committee_totals("C00401224", &TotalsQuery::for_year(2024))
        .await;
    match result.unwrap_err() {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn get_committee_totals_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TOTALS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let result = client
        .get_committee_totals("C00401224", &TotalsQuery::for_year(2024))
        .await;
    assert!(matches!(result.unwrap_err(), Error::ParseFailed(_)));
}
