//! Resolution behaviour of the built-in route table.

use hash_router::config::schema::default_routes;
use hash_router::{HashLocation, Params, Resolution, Router, View};

fn router() -> Router {
    Router::from_config(&default_routes()).unwrap()
}

fn matched(view: View, params: Params) -> Resolution {
    Resolution::Matched { view, params }
}

#[test]
fn test_root_is_login() {
    assert_eq!(router().resolve("/"), matched(View::Login, Params::new()));
}

#[test]
fn test_admin_is_admin_panel() {
    assert_eq!(
        router().resolve("/admin"),
        matched(View::AdminPanel, Params::new())
    );
}

#[test]
fn test_staff_id_is_bound() {
    assert_eq!(
        router().resolve("/staff/1"),
        matched(View::StaffPanel, Params::new().with("id", "1"))
    );
}

#[test]
fn test_staff_id_is_not_type_checked() {
    assert_eq!(
        router().resolve("/staff/istanbul"),
        matched(View::StaffPanel, Params::new().with("id", "istanbul"))
    );
}

#[test]
fn test_any_single_segment_binds_id() {
    let router = router();
    for id in ["0", "42", "istanbul", "İzmir", "a-b_c.d", "%20", ":id", "with space"] {
        let path = format!("/staff/{id}");
        assert_eq!(
            router.resolve(&path),
            matched(View::StaffPanel, Params::new().with("id", id)),
            "path {path:?}"
        );
    }
}

#[test]
fn test_unknown_is_not_found() {
    assert_eq!(
        router().resolve("/unknown"),
        Resolution::NotFound {
            path: "/unknown".into()
        }
    );
}

#[test]
fn test_near_misses_are_not_found() {
    let router = router();
    for path in ["/admin/", "/Admin", "/staff", "/staff/", "/staff/1/", "/staff/1/edit", "//"] {
        assert!(!router.resolve(path).is_matched(), "path {path:?}");
    }
}

#[test]
fn test_resolve_locations() {
    let router = router();
    let cases = [
        ("http://localhost:8080/#/staff/1", Some(View::StaffPanel)),
        ("http://localhost:8080/", Some(View::Login)),
        ("#/admin?tab=users", Some(View::AdminPanel)),
        ("/index.html#/", Some(View::Login)),
        ("#/nowhere", None),
    ];

    for (input, expected) in cases {
        let location = HashLocation::parse(input).unwrap();
        assert_eq!(router.resolve_location(&location).view(), expected, "input {input:?}");
    }
}

#[test]
fn test_build_path_round_trips() {
    let router = router();
    for route in router.routes() {
        let params = Params::new().with("id", "9");
        let path = router.build_path(route.name(), &params).unwrap();
        assert_eq!(router.resolve(&path).view(), Some(route.view()));
    }
}
