//! Catalog API behaviour, driven in-process through the router.

use std::sync::Arc;

use bytes::Bytes;
use catalogo::{Catalog, Product, Response, Router, Status, api};
use serde_json::{Value, json};

struct App {
    router: Router<api::AppState>,
}

impl App {
    fn seeded() -> Self {
        Self { router: api::router(Arc::new(Catalog::seeded())) }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> Response {
        let body = match body {
            Some(v) => Bytes::from(serde_json::to_vec(&v).unwrap()),
            None => Bytes::new(),
        };
        let req = http::Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        self.router.call(req).await
    }

    async fn send_raw(&self, method: &str, uri: &str, body: &'static str) -> Response {
        self.send_typed(method, uri, Some("application/json"), body).await
    }

    async fn send_typed(
        &self,
        method: &str,
        uri: &str,
        content_type: Option<&str>,
        body: &'static str,
    ) -> Response {
        let mut req = http::Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            req = req.header("content-type", content_type);
        }
        let req = req.body(Bytes::from_static(body.as_bytes())).unwrap();
        self.router.call(req).await
    }

    async fn get(&self, uri: &str) -> Response {
        self.send("GET", uri, None).await
    }
}

fn products(res: &Response) -> Vec<Product> {
    serde_json::from_slice(res.body()).unwrap()
}

fn product(res: &Response) -> Product {
    serde_json::from_slice(res.body()).unwrap()
}

fn ids(list: &[Product]) -> Vec<i32> {
    list.iter().map(|p| p.id).collect()
}

fn text(res: &Response) -> &str {
    std::str::from_utf8(res.body()).unwrap()
}

#[tokio::test]
async fn root_reports_server_alive() {
    let app = App::seeded();
    let res = app.get("/").await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(res.header("content-type"), Some("text/plain; charset=utf-8"));
    assert_eq!(text(&res), "Servidor activo");

    assert_eq!(text(&app.get("/healthz").await), "ok");
    assert_eq!(text(&app.get("/readyz").await), "ready");
}

#[tokio::test]
async fn lists_seed_products_in_order() {
    let app = App::seeded();
    let res = app.get("/productos").await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(res.header("content-type"), Some("application/json"));
    assert_eq!(ids(&products(&res)), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn lists_categories() {
    let app = App::seeded();
    let res = app.get("/categorias").await;
    assert_eq!(res.status_code(), Status::Ok);
    let body: Value = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Computación" },
            { "id": 2, "name": "Telefonía" },
            { "id": 3, "name": "Accesorios" },
        ])
    );
}

#[tokio::test]
async fn get_by_id() {
    let app = App::seeded();
    let res = app.get("/productos/1").await;
    assert_eq!(res.status_code(), Status::Ok);
    let body: Value = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Laptop",
            "description": "Ultrabook 13 pulgadas",
            "categoryId": 1,
        })
    );
}

#[tokio::test]
async fn missing_product_is_404_with_message() {
    let app = App::seeded();
    let res = app.get("/productos/99").await;
    assert_eq!(res.status_code(), Status::NotFound);
    assert_eq!(text(&res), "Producto no encontrado");
}

#[tokio::test]
async fn percent_encoded_ids_are_decoded() {
    let app = App::seeded();
    let res = app.get("/productos/%31").await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(product(&res).name, "Laptop");

    let res = app.get("/productos/categoria/%33").await;
    assert_eq!(ids(&products(&res)), vec![3, 4]);

    let res = app.send("DELETE", "/productos/%32", None).await;
    assert_eq!(res.status_code(), Status::NoContent);
    assert_eq!(app.get("/productos/2").await.status_code(), Status::NotFound);

    let res = app.get("/productos/%61bc").await;
    assert_eq!(res.status_code(), Status::BadRequest);
}

#[tokio::test]
async fn non_integer_ids_are_always_400() {
    let app = App::seeded();
    let body = json!({ "name": "X", "description": "Y" });

    for uri in ["/productos/abc", "/productos/1.5", "/productos/99999999999"] {
        let res = app.get(uri).await;
        assert_eq!(res.status_code(), Status::BadRequest, "GET {uri}");
        assert_eq!(text(&res), "ID inválido");

        let res = app.send("PUT", uri, Some(body.clone())).await;
        assert_eq!(res.status_code(), Status::BadRequest, "PUT {uri}");

        let res = app.send("DELETE", uri, None).await;
        assert_eq!(res.status_code(), Status::BadRequest, "DELETE {uri}");
    }
}

#[tokio::test]
async fn create_get_delete_scenario() {
    let app = App::seeded();

    let res = app
        .send("POST", "/productos", Some(json!({ "name": "X", "description": "Y", "categoryId": 1 })))
        .await;
    assert_eq!(res.status_code(), Status::Created);
    assert_eq!(res.header("location"), Some("/productos/6"));
    let created = product(&res);
    assert_eq!(created.id, 6);
    assert_eq!(created.name, "X");
    assert_eq!(created.description, "Y");
    assert_eq!(created.category_id, Some(1));

    let res = app.get("/productos/6").await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(product(&res), created);

    let res = app.send("DELETE", "/productos/6", None).await;
    assert_eq!(res.status_code(), Status::NoContent);
    assert!(res.body().is_empty());

    let res = app.get("/productos/6").await;
    assert_eq!(res.status_code(), Status::NotFound);
}

#[tokio::test]
async fn second_delete_is_404() {
    let app = App::seeded();
    assert_eq!(app.send("DELETE", "/productos/3", None).await.status_code(), Status::NoContent);
    assert_eq!(app.send("DELETE", "/productos/3", None).await.status_code(), Status::NotFound);
    assert_eq!(ids(&products(&app.get("/productos").await)), vec![1, 2, 4, 5]);
}

#[tokio::test]
async fn created_ids_increase_and_skip_deleted() {
    let app = App::seeded();
    let mut last = 5;
    for name in ["a", "b", "c"] {
        let res = app
            .send("POST", "/productos", Some(json!({ "name": name, "description": "-" })))
            .await;
        let id = product(&res).id;
        assert!(id > last);
        last = id;
        assert_eq!(app.send("DELETE", &format!("/productos/{id}"), None).await.status_code(), Status::NoContent);
    }
    assert_eq!(last, 8);
}

#[tokio::test]
async fn put_then_get_round_trips() {
    let app = App::seeded();
    let payload = json!({ "name": "Teclado 60%", "description": "Inalámbrico", "categoryId": 2 });

    let res = app.send("PUT", "/productos/3", Some(payload)).await;
    assert_eq!(res.status_code(), Status::Ok);
    let updated = product(&res);

    let res = app.get("/productos/3").await;
    let fetched = product(&res);
    assert_eq!(fetched, updated);
    assert_eq!(fetched.id, 3);
    assert_eq!(fetched.name, "Teclado 60%");
    assert_eq!(fetched.description, "Inalámbrico");
    assert_eq!(fetched.category_id, Some(2));

    // Position in the list is unchanged.
    assert_eq!(ids(&products(&app.get("/productos").await)), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn put_without_category_clears_it() {
    let app = App::seeded();
    let res = app
        .send("PUT", "/productos/1", Some(json!({ "name": "Laptop", "description": "Sin categoría" })))
        .await;
    assert_eq!(res.status_code(), Status::Ok);
    let body: Value = serde_json::from_slice(res.body()).unwrap();
    assert!(body.get("categoryId").is_none());
}

#[tokio::test]
async fn put_missing_product_is_404_even_with_bad_body() {
    let app = App::seeded();
    let res = app.send_raw("PUT", "/productos/42", "not json").await;
    assert_eq!(res.status_code(), Status::NotFound);
    assert_eq!(text(&res), "Producto no encontrado");
}

#[tokio::test]
async fn undecodable_bodies_are_400() {
    let app = App::seeded();

    let res = app.send_raw("POST", "/productos", "{ \"name\": ").await;
    assert_eq!(res.status_code(), Status::BadRequest);
    assert_eq!(text(&res), "Cuerpo de la petición inválido");

    let res = app.send_raw("POST", "/productos", r#"{"name": "sin descripción"}"#).await;
    assert_eq!(res.status_code(), Status::BadRequest);

    let res = app.send_raw("PUT", "/productos/1", "[]").await;
    assert_eq!(res.status_code(), Status::BadRequest);

    // Nothing was created or changed.
    let all = products(&app.get("/productos").await);
    assert_eq!(ids(&all), vec![1, 2, 3, 4, 5]);
    assert_eq!(all[0].name, "Laptop");
}

#[tokio::test]
async fn non_json_content_types_are_415() {
    let app = App::seeded();
    let body = r#"{"name": "X", "description": "Y"}"#;

    let res = app.send_typed("POST", "/productos", Some("text/plain"), body).await;
    assert_eq!(res.status_code(), Status::UnsupportedMediaType);
    assert_eq!(text(&res), "Se esperaba contenido application/json");

    let res = app.send_typed("POST", "/productos", None, body).await;
    assert_eq!(res.status_code(), Status::UnsupportedMediaType);

    let res = app.send_typed("PUT", "/productos/1", Some("application/x-www-form-urlencoded"), body).await;
    assert_eq!(res.status_code(), Status::UnsupportedMediaType);

    // Still 404 first for a missing product.
    let res = app.send_typed("PUT", "/productos/42", Some("text/plain"), body).await;
    assert_eq!(res.status_code(), Status::NotFound);

    let all = products(&app.get("/productos").await);
    assert_eq!(ids(&all), vec![1, 2, 3, 4, 5]);
    assert_eq!(all[0].name, "Laptop");

    let res = app
        .send_typed("POST", "/productos", Some("application/json; charset=utf-8"), body)
        .await;
    assert_eq!(res.status_code(), Status::Created);
}

#[tokio::test]
async fn bodies_accept_whitespace_unknown_fields_and_spanish_names() {
    let app = App::seeded();
    let res = app
        .send_raw(
            "POST",
            "/productos",
            "\n {\n  \"nombre\": \"Silla\",\n  \"descripcion\": \"Gamer\",\n  \"categoriaId\": 3,\n  \"id\": 1000,\n  \"color\": \"rojo\"\n }\n",
        )
        .await;
    assert_eq!(res.status_code(), Status::Created);
    let created = product(&res);
    assert_eq!(created.id, 6);
    assert_eq!(created.name, "Silla");
    assert_eq!(created.category_id, Some(3));
}

#[tokio::test]
async fn query_filter_matches_subsequence_after_mutations() {
    let app = App::seeded();
    app.send("POST", "/productos", Some(json!({ "name": "Tablet", "description": "10''", "categoryId": 2 })))
        .await;
    app.send("PUT", "/productos/1", Some(json!({ "name": "Laptop", "description": "-", "categoryId": 2 })))
        .await;
    app.send("DELETE", "/productos/2", None).await;

    let all = products(&app.get("/productos").await);
    let expected: Vec<Product> = all.iter().filter(|p| p.category_id == Some(2)).cloned().collect();

    let res = app.get("/productos?categoriaId=2").await;
    assert_eq!(res.status_code(), Status::Ok);
    let filtered = products(&res);
    assert_eq!(filtered, expected);
    assert_eq!(ids(&filtered), vec![1, 6]);
}

#[tokio::test]
async fn unparsable_query_filter_is_ignored() {
    let app = App::seeded();
    let res = app.get("/productos?categoriaId=abc").await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(ids(&products(&res)), vec![1, 2, 3, 4, 5]);

    let res = app.get("/productos?categoriaId=99").await;
    assert!(products(&res).is_empty());
}

#[tokio::test]
async fn category_path_filter() {
    let app = App::seeded();
    let res = app.get("/productos/categoria/3").await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(ids(&products(&res)), vec![3, 4]);

    let res = app.get("/productos/categoria/77").await;
    assert_eq!(res.status_code(), Status::Ok);
    assert!(products(&res).is_empty());

    let res = app.get("/productos/categoria/abc").await;
    assert_eq!(res.status_code(), Status::BadRequest);
    assert_eq!(text(&res), "ID de categoría inválido");
}

#[tokio::test]
async fn product_may_reference_unknown_category() {
    let app = App::seeded();
    let res = app
        .send("POST", "/productos", Some(json!({ "name": "X", "description": "Y", "categoryId": 404 })))
        .await;
    assert_eq!(res.status_code(), Status::Created);
    assert_eq!(ids(&products(&app.get("/productos/categoria/404").await)), vec![6]);
}

#[tokio::test]
async fn unknown_routes_and_methods() {
    let app = App::seeded();
    assert_eq!(app.get("/usuarios").await.status_code(), Status::NotFound);
    assert_eq!(app.send("POST", "/categorias", None).await.status_code(), Status::NotFound);
    assert_eq!(app.send("PATCH", "/productos/1", None).await.status_code(), Status::NotFound);
}
