use leptos_router::components::Router;
use leptos_router::location::RequestUrl;

use super::*;

fn render_at(path: &str) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new(path));
        view! {
            <Router>
                <Header/>
            </Router>
        }
        .to_html()
    })
}

#[test]
fn header_links_brand_to_home() {
    let html = render_at("/");
    assert!(html.contains(r#"href="/""#), "{html}");
    assert!(html.contains("Trip"));
    assert!(html.contains("Maker"));
}

#[test]
fn header_links_to_login() {
    let html = render_at("/");
    assert!(html.contains(r#"href="/login""#), "{html}");
    assert!(html.contains("Log in"));
}

#[test]
fn header_marks_login_link_current_on_login_page() {
    let html = render_at("/login");
    assert_eq!(html.matches(r#"aria-current="page""#).count(), 1, "{html}");
    let login = html.find(r#"href="/login""#).expect("login link");
    let marker = html.find(r#"aria-current="page""#).expect("current marker");
    assert!(marker > html[..login].rfind("<a").expect("anchor open"), "{html}");
}

#[test]
fn header_marks_nothing_current_on_unknown_page() {
    let html = render_at("/nope");
    assert!(!html.contains("aria-current"), "{html}");
}
