use fecbanner_lib::openfec_api::{Client, Error, TotalsQuery};
use fecbanner_lib::{fetch_totals, BannerError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOTALS_PATH: &str = "/v1/committee/C00401224/totals/";

fn client_for(mock_server: &MockServer) -> Client {
    let base_url = format!("{}/v1", mock_server.uri());
    Client::with_base_url(&base_url, "test-key".to_string()).unwrap()
}

#[tokio::test]
async fn fetch_totals_returns_first_row() {
    let mock_server = MockServer::start().await;
    let fixture = include_str!("../../openfec_api/tests/fixtures/committee_totals.json");

    Mock::given(method("GET"))
        .and(path(TOTALS_PATH))
        .and(query_param("year", "2025"))
        .and(query_param("cycle", "2026"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let totals = fetch_totals(&client, "C00401224", &TotalsQuery::for_year(2025))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(totals.committee_id.as_deref(), Some("C00401224"));
    assert_eq!(totals.last_cash_on_hand_end_period, Some(98765.43));
}

#[tokio::test]
async fn fetch_totals_with_no_results() {
    let mock_server = MockServer::start().await;
    let fixture = include_str!("../../openfec_api/tests/fixtures/committee_totals_empty.json");

    Mock::given(method("GET"))
        .and(path(TOTALS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let totals = fetch_totals(&client, "C00401224", &TotalsQuery::for_year(2024))
        .await
        .unwrap();
    assert!(totals.is_none());
}

#[tokio::test]
async fn fetch_totals_surfaces_api_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TOTALS_PATH))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = fetch_totals(&client, "C00401224", &TotalsQuery::for_year(2024))
        .await
        .unwrap_err();
    assert!(matches!(err, BannerError::Api(Error::InvalidApiKey)));
}
