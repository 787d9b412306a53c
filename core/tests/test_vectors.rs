//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use viagens_core::render::render_cards;
use viagens_core::{
    ApiError, ClientConfig, HttpMethod, HttpRequest, HttpResponse, TripClient, TripForm, TripId,
};

const BASE_URL: &str = "http://localhost:8080";

fn client() -> TripClient {
    TripClient::new(ClientConfig::new(BASE_URL, "admin", "admin").unwrap())
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

fn assert_request_line(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(
        req.method,
        parse_method(expected["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(
        req.url,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (
                arr[0].as_str().unwrap().to_string(),
                arr[1].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");
}

fn assert_expected_error(name: &str, err: ApiError, expected: &str) {
    let matched = match expected {
        "NotFound" => matches!(err, ApiError::NotFound),
        "Unauthorized" => matches!(err, ApiError::Unauthorized),
        "HttpError" => matches!(err, ApiError::HttpError { .. }),
        "Deserialization" => matches!(err, ApiError::Deserialization(_)),
        other => panic!("{name}: unknown expected_error: {other}"),
    };
    assert!(matched, "{name}: expected {expected}, got {err:?}");
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        // Verify build
        let req = c.build_list_trips();
        assert_request_line(name, &req, &case["expected_request"]);
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse and render
        let result = c.parse_list_trips(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
            continue;
        }

        let cards = render_cards(&result.unwrap());
        let expected = case["expected_cards"].as_array().unwrap();
        assert_eq!(cards.len(), expected.len(), "{name}: card count");
        for (card, want) in cards.iter().zip(expected) {
            assert_eq!(card.id.to_string(), want["id"].as_str().unwrap(), "{name}: id");
            assert_eq!(card.destination, want["destination"].as_str().unwrap(), "{name}: destination");
            assert_eq!(card.description, want["description"].as_str().unwrap(), "{name}: description");
            assert_eq!(card.date_range, want["date_range"].as_str().unwrap(), "{name}: dates");
            assert_eq!(card.price, want["price"].as_str().unwrap(), "{name}: price");
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let raw = include_str!("../../test-vectors/create.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let form = TripForm {
            destino: input["destino"].as_str().unwrap().to_string(),
            data_partida: input["dataPartida"].as_str().unwrap().to_string(),
            data_retorno: input["dataRetorno"].as_str().unwrap().to_string(),
            preco: input["preco"].as_str().unwrap().to_string(),
            descricao: input["descricao"].as_str().unwrap().to_string(),
        };
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_create_trip(&form.to_new_trip()).unwrap();
        assert_request_line(name, &req, expected_req);
        let req_body: serde_json::Value =
            serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let result = c.parse_create_trip(simulated_response(case));
        match case.get("expected_error") {
            Some(expected_error) => {
                assert_expected_error(name, result.unwrap_err(), expected_error.as_str().unwrap())
            }
            None => assert!(result.is_ok(), "{name}: expected success"),
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let raw = include_str!("../../test-vectors/delete.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = TripId::from(case["input_id"].as_str().unwrap());

        // Verify build
        let req = c.build_delete_trip(&id);
        assert_request_line(name, &req, &case["expected_request"]);
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse
        let result = c.parse_delete_trip(simulated_response(case));
        match case.get("expected_error") {
            Some(expected_error) => {
                assert_expected_error(name, result.unwrap_err(), expected_error.as_str().unwrap())
            }
            None => assert!(result.is_ok(), "{name}: expected success"),
        }
    }
}
