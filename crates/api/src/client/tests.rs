use annuaire_typeahead::{Lookup, LookupError};
use pretty_assertions::assert_eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::*;
use crate::{CityLookup, SubCategoryLookup};

/// Serves exactly one canned HTTP response and returns the raw request head.
async fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	let handle = tokio::spawn(async move {
		let (mut socket, _) = listener.accept().await.unwrap();
		let mut head = Vec::new();
		let mut chunk = [0u8; 1024];
		while !head.windows(4).any(|w| w == b"\r\n\r\n") {
			let n = socket.read(&mut chunk).await.unwrap();
			if n == 0 {
				break;
			}
			head.extend_from_slice(&chunk[..n]);
		}
		let response = format!(
			"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
			body.len()
		);
		socket.write_all(response.as_bytes()).await.unwrap();
		let _ = socket.shutdown().await;
		String::from_utf8_lossy(&head).into_owned()
	});
	(Url::parse(&format!("http://{addr}/api")).unwrap(), handle)
}

fn client_for(base: Url, session: Session) -> ApiClient {
	ApiClient::new(ApiConfig::default().with_base_url(base), session).unwrap()
}

#[test]
fn limit_is_clamped() {
	assert_eq!(clamp_limit(0), 1);
	assert_eq!(clamp_limit(10), 10);
	assert_eq!(clamp_limit(500), MAX_AUTOCOMPLETE_LIMIT);
}

#[test]
fn city_params_skip_blank_filters() {
	let filters = CityFilters {
		code_postal: Some(" ".into()),
		region: None,
		departement: Some("69".into()),
	};
	assert_eq!(
		city_params("Lyo", &filters, 80),
		vec![("q", "Lyo".to_string()), ("departement", "69".to_string()), ("limit", "50".to_string())]
	);
}

#[test]
fn sub_category_params_carry_parent() {
	let filters = SubCategoryFilters { categorie: Some(7) };
	assert_eq!(
		sub_category_params("plo", &filters, 10),
		vec![("q", "plo".to_string()), ("categorie", "7".to_string()), ("limit", "10".to_string())]
	);
	assert_eq!(sub_category_params("plo", &SubCategoryFilters::default(), 10).len(), 2);
}

#[test]
fn search_params_normalize_page() {
	let query = SearchQuery {
		categorie: Some("artisans".into()),
		sous_categorie: None,
		ville: Some("lyon".into()),
		page: Some(0),
	};
	assert_eq!(
		search_params(&query),
		vec![("categorie", "artisans".to_string()), ("ville", "lyon".to_string()), ("page", "1".to_string())]
	);
}

#[test]
fn endpoints_resolve_under_base_path() {
	let client = client_for(Url::parse("https://example.org/v2").unwrap(), Session::new());
	assert_eq!(
		client.endpoint(CITY_AUTOCOMPLETE).unwrap().as_str(),
		"https://example.org/v2/villes/autocomplete/"
	);
}

#[test]
fn rejects_invalid_config() {
	let config = ApiConfig::default().with_base_url(Url::parse("file:///tmp/api").unwrap());
	assert!(matches!(ApiClient::new(config, Session::new()), Err(ApiError::Config(_))));
}

#[tokio::test]
async fn fetches_cities_with_query_string() {
	let (base, server) = serve_once(
		"200 OK",
		r#"{"results": [{"id": 1, "nom": "Lyon", "code_postal_principal": "69001", "departement": "69", "slug": "lyon"}]}"#,
	)
	.await;
	let client = client_for(base, Session::new());
	let filters = CityFilters {
		departement: Some("69".into()),
		..CityFilters::default()
	};

	let cities = client.autocomplete_cities("Lyo", &filters, 80).await.unwrap();
	assert_eq!(cities.len(), 1);
	assert_eq!(cities[0].nom, "Lyon");

	let head = server.await.unwrap();
	assert!(
		head.starts_with("GET /api/villes/autocomplete/?q=Lyo&departement=69&limit=50 HTTP/1.1"),
		"unexpected request: {head}"
	);
	assert!(!head.to_ascii_lowercase().contains("authorization:"));
}

#[tokio::test]
async fn sends_bearer_token_from_session() {
	let (base, server) = serve_once("200 OK", "[]").await;
	let session = Session::with_token("t0k");
	let client = client_for(base, session);

	let items = client
		.autocomplete_sub_categories("plo", &SubCategoryFilters::default(), 10)
		.await
		.unwrap();
	assert!(items.is_empty());

	let head = server.await.unwrap().to_ascii_lowercase();
	assert!(head.contains("authorization: bearer t0k"), "missing bearer: {head}");
}

#[tokio::test]
async fn non_success_status_is_normalized() {
	let (base, server) = serve_once("404 Not Found", r#"{"detail": "Ville introuvable."}"#).await;
	let client = client_for(base, Session::new());

	let err = client
		.autocomplete_cities("Zzz", &CityFilters::default(), 10)
		.await
		.unwrap_err();
	assert_eq!(err.status(), Some(404));
	assert_eq!(err.to_string(), "Ville introuvable.");
	server.await.unwrap();
}

#[tokio::test]
async fn unexpected_payload_is_a_decode_error() {
	let (base, server) = serve_once("200 OK", r#"{"villes": []}"#).await;
	let client = client_for(base, Session::new());

	let err = client
		.autocomplete_cities("Lyo", &CityFilters::default(), 10)
		.await
		.unwrap_err();
	assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
	server.await.unwrap();
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);
	let client = client_for(Url::parse(&format!("http://{addr}/")).unwrap(), Session::new());

	let err = client
		.autocomplete_cities("Lyo", &CityFilters::default(), 10)
		.await
		.unwrap_err();
	assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn lookups_surface_normalized_messages() {
	let (base, server) = serve_once("503 Service Unavailable", r#"{"message": "maintenance en cours"}"#).await;
	let lookup = SubCategoryLookup::new(client_for(base, Session::new()));

	let err: LookupError = lookup
		.lookup("plo", &SubCategoryFilters::default(), 10)
		.await
		.unwrap_err();
	assert_eq!(err.message(), "maintenance en cours");
	server.await.unwrap();
}

#[tokio::test]
async fn city_lookup_passes_results_through() {
	let (base, server) = serve_once(
		"200 OK",
		r#"{"results": [{"id": 2, "nom": "Lyons-la-Forêt", "slug": "lyons-la-foret"}, {"id": 1, "nom": "Lyon", "slug": "lyon"}]}"#,
	)
	.await;
	let lookup = CityLookup::new(client_for(base, Session::new()));

	let cities = lookup.lookup("Lyon", &CityFilters::default(), 10).await.unwrap();
	let names: Vec<_> = cities.iter().map(|c| c.nom.as_str()).collect();
	assert_eq!(names, vec!["Lyons-la-Forêt", "Lyon"]);
	server.await.unwrap();
}
