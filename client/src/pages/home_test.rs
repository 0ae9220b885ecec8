use super::*;

fn render_hero() -> String {
    let owner = Owner::new();
    owner.with(|| view! { <HomeHero/> }.to_html())
}

fn heading(html: &str) -> &str {
    let start = html.find("<h1").expect("h1 present");
    let end = html[start..].find("</h1>").expect("h1 closed") + start;
    &html[start..end]
}

#[test]
fn hero_heading_contains_trip_and_maker() {
    let html = render_hero();
    let h1 = heading(&html);
    assert!(h1.contains("Trip"), "{h1}");
    assert!(h1.contains("Maker"), "{h1}");
}

#[test]
fn hero_shows_tagline_and_description() {
    let html = render_hero();
    assert!(html.contains(TAGLINE));
    assert!(html.contains(DESCRIPTION));
}

#[test]
fn home_page_hosts_capture_targets() {
    let owner = Owner::new();
    let html = owner.with(|| view! { <HomePage/> }.to_html());
    for id in ["longitude", "latitude", "set-position-error"] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id} in {html}");
    }
}
