use leptos_router::location::RequestUrl;

use super::*;

fn render_at(path: &str) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new(path));
        view! { <App/> }.to_html()
    })
}

fn hero_title(html: &str) -> &str {
    let start = html.find(r#"class="hero__title""#).expect("hero title present");
    let end = start + html[start..].find("</h1>").expect("hero title closed");
    &html[start..end]
}

#[test]
fn root_path_routes_to_home() {
    let html = render_at("/");
    let title = hero_title(&html);
    assert!(title.contains("Trip"), "{html}");
    assert!(title.contains("Maker"), "{html}");
    assert!(html.contains(r#"id="set-position-error""#), "{html}");
    assert!(!html.contains("Page not found."), "{html}");
}

#[test]
fn login_path_routes_to_login() {
    let html = render_at("/login");
    let start = html.find("<h2").expect("h2 present");
    let end = html.find("</h2>").expect("h2 closed");
    assert!(html[start..end].contains("Log in"), "{html}");
    assert!(!html.contains("hero__title"), "{html}");
}

#[test]
fn unknown_path_renders_fallback_under_header() {
    let html = render_at("/nope");
    assert!(html.contains("Page not found."), "{html}");
    assert!(html.contains("site-header"), "{html}");
    assert!(!html.contains("<h2"), "{html}");
}
