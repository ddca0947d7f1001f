//! Search and compartment integration tests.
//!
//! Exercises type-level search (GET and POST), paging links and
//! Patient `$everything` through the HTTP layer.

mod common;

use axum::http::StatusCode;
use common::fixtures;
use common::harness::{create_test_server, seed};
use onecare_persistence::backends::memory::MemoryBackend;
use onecare_persistence::types::ResourceType;
use serde_json::Value;

async fn seed_people(backend: &MemoryBackend) {
    let people = [
        ("p1", "Harsh", "Singhal", "male"),
        ("p2", "Maria", "Lopez", "female"),
        ("p3", "Anna", "Smithers", "female"),
        ("p4", "John", "Smith", "male"),
        ("p5", "Lena", "Marsh", "female"),
    ];
    for (id, given, family, gender) in people {
        seed(backend, ResourceType::Patient, fixtures::patient(id, given, family, gender)).await;
    }
}

fn entry_ids(bundle: &Value) -> Vec<String> {
    bundle["entry"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e["resource"]["id"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

fn link<'a>(bundle: &'a Value, relation: &str) -> Option<&'a str> {
    bundle["link"]
        .as_array()?
        .iter()
        .find(|l| l["relation"] == relation)
        .and_then(|l| l["url"].as_str())
}

// =============================================================================
// Type-level search
// =============================================================================

mod search {
    use super::*;

    #[tokio::test]
    async fn test_search_without_params_returns_all() {
        let (server, backend) = create_test_server();
        seed_people(&backend).await;

        let response = server.get("/Patient").await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "application/fhir+json");
        let bundle: Value = response.json();
        assert_eq!(bundle["resourceType"], "Bundle");
        assert_eq!(bundle["type"], "searchset");
        assert_eq!(bundle["total"], 5);
        assert_eq!(entry_ids(&bundle), vec!["p1", "p2", "p3", "p4", "p5"]);
        assert_eq!(
            bundle["entry"][0]["fullUrl"],
            "http://localhost/fhir/Patient/p1"
        );
        assert_eq!(bundle["entry"][0]["search"]["mode"], "match");
    }

    #[tokio::test]
    async fn test_search_empty_type() {
        let (server, _backend) = create_test_server();

        let bundle: Value = server.get("/Procedure").await.json();

        assert_eq!(bundle["total"], 0);
        assert_eq!(bundle["entry"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_search_by_name_is_case_insensitive_substring() {
        let (server, backend) = create_test_server();
        seed_people(&backend).await;

        let bundle: Value = server.get("/Patient").add_query_param("name", "SMITH").await.json();

        assert_eq!(bundle["total"], 2);
        assert_eq!(entry_ids(&bundle), vec!["p3", "p4"]);
    }

    #[tokio::test]
    async fn test_search_params_are_anded() {
        let (server, backend) = create_test_server();
        seed_people(&backend).await;

        let bundle: Value = server
            .get("/Patient")
            .add_query_param("name", "smith")
            .add_query_param("gender", "female")
            .await
            .json();

        assert_eq!(entry_ids(&bundle), vec!["p3"]);
    }

    #[tokio::test]
    async fn test_unknown_params_are_ignored() {
        let (server, backend) = create_test_server();
        seed_people(&backend).await;

        let bundle: Value = server
            .get("/Patient")
            .add_query_param("eye-colour", "green")
            .add_query_param("_sort", "name")
            .await
            .json();

        assert_eq!(bundle["total"], 5);
    }

    #[tokio::test]
    async fn test_pagination_and_links() {
        let (server, backend) = create_test_server();
        seed_people(&backend).await;

        let bundle: Value = server
            .get("/Patient?gender=female&_count=1&_offset=1")
            .await
            .json();

        assert_eq!(bundle["total"], 3);
        assert_eq!(entry_ids(&bundle), vec!["p3"]);
        assert_eq!(
            link(&bundle, "self"),
            Some("http://localhost/fhir/Patient?gender=female&_count=1&_offset=1")
        );
        assert_eq!(
            link(&bundle, "next"),
            Some("http://localhost/fhir/Patient?gender=female&_count=1&_offset=2")
        );
        assert_eq!(
            link(&bundle, "previous"),
            Some("http://localhost/fhir/Patient?gender=female&_count=1&_offset=0")
        );
    }

    #[tokio::test]
    async fn test_last_page_has_no_next_link() {
        let (server, backend) = create_test_server();
        seed_people(&backend).await;

        let bundle: Value = server.get("/Patient?_count=2&_offset=4").await.json();

        assert_eq!(bundle["total"], 5);
        assert_eq!(entry_ids(&bundle), vec!["p5"]);
        assert!(link(&bundle, "next").is_none());
        assert!(link(&bundle, "previous").is_some());
    }

    #[tokio::test]
    async fn test_offset_past_end_is_empty_page() {
        let (server, backend) = create_test_server();
        seed_people(&backend).await;

        let bundle: Value = server.get("/Patient?_offset=50").await.json();

        assert_eq!(bundle["total"], 5);
        assert!(entry_ids(&bundle).is_empty());
    }

    #[tokio::test]
    async fn test_huge_offset_is_empty_page() {
        let (server, backend) = create_test_server();
        seed_people(&backend).await;

        let response = server
            .get("/Patient")
            .add_query_param("_offset", usize::MAX.to_string())
            .await;

        response.assert_status_ok();
        let bundle: Value = response.json();
        assert_eq!(bundle["total"], 5);
        assert!(entry_ids(&bundle).is_empty());
        assert!(link(&bundle, "next").is_none());
        assert!(link(&bundle, "previous").is_some());
    }

    #[tokio::test]
    async fn test_huge_count_returns_rest_of_set() {
        let (server, backend) = create_test_server();
        seed_people(&backend).await;

        let response = server
            .get("/Patient")
            .add_query_param("_count", usize::MAX.to_string())
            .add_query_param("_offset", "2")
            .await;

        response.assert_status_ok();
        let bundle: Value = response.json();
        assert_eq!(entry_ids(&bundle), vec!["p3", "p4", "p5"]);
        assert!(link(&bundle, "next").is_none());
    }

    #[tokio::test]
    async fn test_invalid_count_falls_back_to_default() {
        let (server, backend) = create_test_server();
        seed_people(&backend).await;

        let response = server.get("/Patient?_count=lots&_offset=-3").await;

        response.assert_status_ok();
        let bundle: Value = response.json();
        assert_eq!(entry_ids(&bundle).len(), 5);
        assert_eq!(
            link(&bundle, "self"),
            Some("http://localhost/fhir/Patient?_count=20&_offset=0")
        );
    }

    #[tokio::test]
    async fn test_observation_search_by_patient_and_code() {
        let (server, backend) = create_test_server();
        seed(&backend, ResourceType::Observation, fixtures::observation("o1", "p1", "85354-9")).await;
        seed(&backend, ResourceType::Observation, fixtures::observation("o2", "p1", "8867-4")).await;
        seed(&backend, ResourceType::Observation, fixtures::observation("o3", "p2", "85354-9")).await;

        let bundle: Value = server
            .get("/Observation?patient=p1&code=85354-9")
            .await
            .json();
        assert_eq!(entry_ids(&bundle), vec!["o1"]);

        let bundle: Value = server.get("/Observation?date=2024-01").await.json();
        assert_eq!(bundle["total"], 3);
    }

    #[tokio::test]
    async fn test_condition_search_by_clinical_status() {
        let (server, backend) = create_test_server();
        seed(&backend, ResourceType::Condition, fixtures::condition("c1", "p1", "active")).await;
        seed(&backend, ResourceType::Condition, fixtures::condition("c2", "p1", "resolved")).await;

        let bundle: Value = server
            .get("/Condition?clinical-status=resolved")
            .await
            .json();

        assert_eq!(entry_ids(&bundle), vec!["c2"]);
    }

    #[tokio::test]
    async fn test_search_by_id() {
        let (server, backend) = create_test_server();
        seed_people(&backend).await;

        let bundle: Value = server.get("/Patient?_id=p4").await.json();

        assert_eq!(entry_ids(&bundle), vec!["p4"]);
    }

    #[tokio::test]
    async fn test_post_search_uses_form_body() {
        let (server, backend) = create_test_server();
        seed_people(&backend).await;

        let response = server
            .post("/Patient/_search")
            .form(&[("gender", "male"), ("_count", "1")])
            .await;

        response.assert_status_ok();
        let bundle: Value = response.json();
        assert_eq!(bundle["total"], 2);
        assert_eq!(entry_ids(&bundle), vec!["p1"]);
        assert_eq!(
            link(&bundle, "next"),
            Some("http://localhost/fhir/Patient?gender=male&_count=1&_offset=1")
        );
    }

    #[tokio::test]
    async fn test_search_unknown_type_returns_400() {
        let (server, _backend) = create_test_server();

        let response = server.get("/Device").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["issue"][0]["code"], "not-supported");
    }
}

// =============================================================================
// Patient $everything
// =============================================================================

mod everything {
    use super::*;

    #[tokio::test]
    async fn test_everything_collects_patient_records() {
        let (server, backend) = create_test_server();
        seed(&backend, ResourceType::Patient, fixtures::patient("p1", "A", "B", "male")).await;
        seed(&backend, ResourceType::Patient, fixtures::patient("p2", "C", "D", "female")).await;
        seed(&backend, ResourceType::Observation, fixtures::observation("o1", "p1", "85354-9")).await;
        seed(&backend, ResourceType::Observation, fixtures::observation("o2", "p2", "85354-9")).await;
        seed(&backend, ResourceType::Condition, fixtures::condition("c1", "p1", "active")).await;

        let response = server.get("/Patient/p1/$everything").await;

        response.assert_status_ok();
        let bundle: Value = response.json();
        assert_eq!(bundle["type"], "searchset");
        assert_eq!(bundle["total"], 3);
        assert_eq!(entry_ids(&bundle), vec!["p1", "o1", "c1"]);
        assert_eq!(bundle["entry"][0]["search"]["mode"], "match");
        assert_eq!(bundle["entry"][1]["search"]["mode"], "include");
        assert_eq!(
            bundle["entry"][2]["fullUrl"],
            "http://localhost/fhir/Condition/c1"
        );
    }

    #[tokio::test]
    async fn test_everything_only_follows_subject() {
        let (server, backend) = create_test_server();
        seed(&backend, ResourceType::Patient, fixtures::patient("p1", "A", "B", "male")).await;
        seed(&backend, ResourceType::Immunization, fixtures::immunization("i1", "p1")).await;

        let bundle: Value = server.get("/Patient/p1/$everything").await.json();

        assert_eq!(entry_ids(&bundle), vec!["p1"]);
    }

    #[tokio::test]
    async fn test_everything_unknown_patient_returns_404() {
        let (server, _backend) = create_test_server();

        let response = server.get("/Patient/ghost/$everything").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["resourceType"], "OperationOutcome");
        assert_eq!(body["issue"][0]["code"], "not-found");
    }
}
