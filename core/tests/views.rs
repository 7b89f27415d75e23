//! Drive the list view, form view, and app through a recording fake
//! transport.
//!
//! # Design
//! `FakeTransport` answers requests from a queue of canned results and
//! keeps every request it saw, so each test can assert both on what the
//! screens show and on what went over the wire.

use std::cell::RefCell;
use std::collections::VecDeque;

use product_core::{
    Action, ActionError, ApiError, App, Field, FormPhase, FormView, HttpMethod, HttpRequest,
    HttpResponse, ListPhase, ListView, Product, ProductApi, ProductClient, Route, RouteError,
    Screen, Transport,
};

const BASE_URL: &str = "http://localhost:8000/api/products/";

#[derive(Default)]
struct FakeTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    seen: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    fn fail(self) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Transport("connection refused".to_string())));
        self
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.seen.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.seen.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no reply queued".to_string())))
    }
}

fn api(transport: FakeTransport) -> ProductApi<FakeTransport> {
    ProductApi::new(ProductClient::new(BASE_URL), transport)
}

fn body_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
}

fn form(app: &App<FakeTransport>) -> &FormView {
    match app.screen() {
        Screen::Form(view) => view,
        Screen::List(_) => panic!("expected the form to be mounted"),
    }
}

fn list(app: &App<FakeTransport>) -> &ListView {
    match app.screen() {
        Screen::List(view) => view,
        Screen::Form(_) => panic!("expected the list to be mounted"),
    }
}

const TWO_PRODUCTS: &str =
    r#"[{"id":1,"desc":"Widget","price":9.5},{"id":2,"desc":"Gadget","price":"3.25"}]"#;

// ---------------------------------------------------------------------------
// List view
// ---------------------------------------------------------------------------

#[test]
fn list_shows_one_entry_per_product() {
    let api = api(FakeTransport::default().reply(200, TWO_PRODUCTS));
    let mut view = ListView::new();
    view.mount(&api);

    assert_eq!(view.phase(), ListPhase::Loaded);
    let entries = view.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!((entries[0].desc, entries[0].price.as_str()), ("Widget", "9.50"));
    assert_eq!((entries[1].desc, entries[1].price.as_str()), ("Gadget", "3.25"));

    let requests = api.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(requests[0].url, BASE_URL);
}

#[test]
fn widget_price_renders_as_9_50() {
    let api = api(FakeTransport::default().reply(200, r#"[{"id":1,"desc":"Widget","price":9.5}]"#));
    let mut view = ListView::new();
    view.mount(&api);
    assert_eq!(view.entries()[0].price, "9.50");
    assert!(view.render().contains("Widget - $9.50"));
}

#[test]
fn list_fetch_failure_keeps_empty_list() {
    let api = api(FakeTransport::default().fail());
    let mut view = ListView::new();
    view.mount(&api);
    assert!(view.products().is_empty());
    assert_eq!(view.phase(), ListPhase::Loading);
}

#[test]
fn delete_success_removes_exactly_that_id() {
    let api = api(FakeTransport::default().reply(200, TWO_PRODUCTS).reply(204, ""));
    let mut view = ListView::new();
    view.mount(&api);

    view.delete(&api, 1);

    let ids: Vec<_> = view.products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![Some(2)]);
    let requests = api.transport().requests();
    assert_eq!(requests[1].method, HttpMethod::Delete);
    assert_eq!(requests[1].url, format!("{BASE_URL}1/"));
}

#[test]
fn delete_transport_failure_leaves_list_unchanged() {
    let api = api(FakeTransport::default().reply(200, TWO_PRODUCTS).fail());
    let mut view = ListView::new();
    view.mount(&api);
    let before = view.products().to_vec();

    view.delete(&api, 1);

    assert_eq!(view.products(), before.as_slice());
}

#[test]
fn delete_rejected_by_server_leaves_list_unchanged() {
    let api = api(FakeTransport::default().reply(200, TWO_PRODUCTS).reply(500, "boom"));
    let mut view = ListView::new();
    view.mount(&api);

    view.delete(&api, 2);

    assert_eq!(view.products().len(), 2);
}

// ---------------------------------------------------------------------------
// Form view
// ---------------------------------------------------------------------------

#[test]
fn edit_form_seeds_fields_from_fetch() {
    let api = api(FakeTransport::default().reply(200, r#"{"id":5,"desc":"Gadget","price":3.25}"#));
    let mut view = FormView::new(Some(5));
    view.mount(&api);

    assert_eq!(view.phase(), FormPhase::LoadedForEdit);
    assert_eq!(view.draft().price, "3.25");
    assert_eq!(view.draft().desc, "Gadget");
    assert_eq!(api.transport().requests()[0].url, format!("{BASE_URL}5/"));
}

#[test]
fn edit_form_fetch_failure_keeps_defaults() {
    let api = api(FakeTransport::default().reply(404, ""));
    let mut view = FormView::new(Some(5));
    view.mount(&api);

    assert_eq!(view.phase(), FormPhase::New);
    assert_eq!(view.draft().desc, "");
    assert_eq!(view.draft().price, "1");
}

#[test]
fn create_form_mount_sends_nothing() {
    let api = api(FakeTransport::default());
    let mut view = FormView::new(None);
    view.mount(&api);
    assert!(api.transport().requests().is_empty());
}

#[test]
fn create_submit_navigates_to_list() {
    let api = api(FakeTransport::default().reply(201, r#"{"id":7,"desc":"New","price":2}"#));
    let mut view = FormView::new(None);
    view.set_field(Field::Desc, "New");
    view.set_field(Field::Price, "2");

    let next = view.submit(&api);

    assert_eq!(next, Some(Route::List));
    assert_eq!(next.map(|r| r.to_string()).as_deref(), Some("/"));
    assert_eq!(view.phase(), FormPhase::Submitted);
    let requests = api.transport().requests();
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(body_json(&requests[0]), serde_json::json!({"desc": "New", "price": 2.0}));
}

#[test]
fn submit_with_id_updates_instead_of_creating() {
    let api = api(
        FakeTransport::default()
            .reply(200, r#"{"id":5,"desc":"Gadget","price":3.25}"#)
            .reply(200, r#"{"id":5,"desc":"Gadget","price":4}"#),
    );
    let mut view = FormView::new(Some(5));
    view.mount(&api);
    view.set_field(Field::Price, "4");

    assert_eq!(view.submit(&api), Some(Route::List));

    let requests = api.transport().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, HttpMethod::Put);
    assert_eq!(requests[1].url, format!("{BASE_URL}5/"));
    let body = body_json(&requests[1]);
    assert_eq!(body["id"], 5);
    assert_eq!(body["price"], 4.0);
}

#[test]
fn submit_failure_stays_on_form() {
    let api = api(FakeTransport::default().reply(400, r#"{"price":["bad"]}"#));
    let mut view = FormView::new(None);
    view.set_field(Field::Desc, "Broken");

    assert_eq!(view.submit(&api), None);
    assert_eq!(view.phase(), FormPhase::New);
    assert_eq!(view.draft().desc, "Broken");
}

#[test]
fn invalid_price_is_caught_before_any_request() {
    let api = api(FakeTransport::default());
    let mut view = FormView::new(None);
    view.set_field(Field::Price, "twelve");

    assert_eq!(view.submit(&api), None);
    assert!(api.transport().requests().is_empty());
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

#[test]
fn app_starts_on_mounted_list() {
    let app = App::new(api(FakeTransport::default().reply(200, TWO_PRODUCTS)));
    assert_eq!(app.route(), Route::List);
    assert_eq!(list(&app).products().len(), 2);
    assert!(app.render().contains("Gadget - $3.25"));
}

#[test]
fn app_create_flow_returns_to_refetched_list() {
    let transport = FakeTransport::default()
        .reply(200, "[]")
        .reply(201, r#"{"id":7,"desc":"New","price":2}"#)
        .reply(200, r#"[{"id":7,"desc":"New","price":2}]"#);
    let mut app = App::new(api(transport));

    app.dispatch(Action::Create).unwrap();
    assert_eq!(app.route(), Route::Create);
    app.dispatch(Action::SetField(Field::Desc, "New".into())).unwrap();
    app.dispatch(Action::SetField(Field::Price, "2".into())).unwrap();
    app.dispatch(Action::Submit).unwrap();

    assert_eq!(app.route(), Route::List);
    assert_eq!(list(&app).products()[0], Product::new("New", 2.0).with_id(7));
    let methods: Vec<_> = app.api().transport().requests().iter().map(|r| r.method).collect();
    assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post, HttpMethod::Get]);
}

#[test]
fn app_edit_action_mounts_seeded_form() {
    let transport = FakeTransport::default()
        .reply(200, TWO_PRODUCTS)
        .reply(200, r#"{"id":2,"desc":"Gadget","price":"3.25"}"#);
    let mut app = App::new(api(transport));

    app.dispatch(Action::Edit(2)).unwrap();

    assert_eq!(app.route(), Route::Edit(2));
    assert_eq!(form(&app).draft().price, "3.25");
    assert!(app.render().starts_with("Edit Product\n"));
}

#[test]
fn app_failed_submit_keeps_form_mounted() {
    let transport = FakeTransport::default().reply(200, "[]").fail();
    let mut app = App::new(api(transport));
    app.open("/create").unwrap();
    app.dispatch(Action::SetField(Field::Desc, "Lamp".into())).unwrap();

    app.dispatch(Action::Submit).unwrap();

    assert_eq!(app.route(), Route::Create);
    assert_eq!(form(&app).draft().desc, "Lamp");
}

#[test]
fn app_rejects_actions_the_screen_does_not_offer() {
    let mut app = App::new(api(FakeTransport::default().reply(200, "[]")));
    assert_eq!(
        app.dispatch(Action::Submit),
        Err(ActionError::Unavailable {
            action: "submit",
            route: Route::List
        })
    );

    app.open("/create").unwrap();
    assert!(matches!(
        app.dispatch(Action::Delete(1)),
        Err(ActionError::Unavailable { action: "delete", .. })
    ));
}

#[test]
fn app_open_unknown_path_keeps_current_screen() {
    let mut app = App::new(api(FakeTransport::default().reply(200, TWO_PRODUCTS)));
    assert_eq!(app.open("/nowhere"), Err(RouteError::Unknown("/nowhere".into())));
    assert_eq!(app.route(), Route::List);
    assert_eq!(list(&app).products().len(), 2);
}

#[test]
fn navigation_discards_previous_list_copy() {
    let transport = FakeTransport::default()
        .reply(200, TWO_PRODUCTS)
        .reply(200, r#"[{"id":2,"desc":"Gadget","price":3.25}]"#);
    let mut app = App::new(api(transport));

    app.open("/").unwrap();

    assert_eq!(list(&app).products().len(), 1);
}
