use super::*;

fn render() -> String {
    let owner = Owner::new();
    owner.with(|| view! { <LoginPage/> }.to_html())
}

#[test]
fn login_page_renders_log_in_heading() {
    let html = render();
    let start = html.find("<h2").expect("h2 present");
    let end = html.find("</h2>").expect("h2 closed");
    assert!(html[start..end].contains("Log in"), "{html}");
}

#[test]
fn login_page_has_no_form() {
    let html = render();
    assert!(!html.contains("<form"), "{html}");
    assert!(!html.contains("<input"), "{html}");
}
