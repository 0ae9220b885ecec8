use super::*;

#[test]
fn root_path_resolves_to_home() {
    assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
}

#[test]
fn login_path_resolves_with_or_without_trailing_slash() {
    assert_eq!(AppRoute::from_path("/login"), Some(AppRoute::Login));
    assert_eq!(AppRoute::from_path("/login/"), Some(AppRoute::Login));
}

#[test]
fn unknown_paths_do_not_resolve() {
    assert_eq!(AppRoute::from_path("/board/1"), None);
    assert_eq!(AppRoute::from_path("login"), None);
    assert_eq!(AppRoute::from_path(""), None);
}

#[test]
fn segments_match_paths_without_leading_slash() {
    for route in AppRoute::ALL {
        assert_eq!(format!("/{}", route.segment()), route.path());
    }
}
