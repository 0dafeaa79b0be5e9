use strip_tags::{extract_with_options, Options};

fn extract_ok(html: &str, options: &Options) -> String {
    match extract_with_options(html, options) {
        Ok(text) => text,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn keep_outer_paragraph_drops_inner_markup() {
    let options = Options::default().with_keep_tags(["p"]);
    assert_eq!(extract_ok("<p>Hello <b>World</b></p>", &options), "<p>Hello World</p>");
}

#[test]
fn keep_heading_bundle_with_allow_listed_attributes() {
    let html = r#"<h1>One</h1><h2 class="sub" data-x="1">Two</h2><p>Para</p>"#;
    let options = Options::default().with_keep_tags(["hs"]);
    assert_eq!(
        extract_ok(html, &options),
        r#"<h1>One</h1><h2 class="sub">Two</h2>Para"#
    );
}

#[test]
fn keep_all_attributes() {
    let html = r#"<h2 id="t" class="sub" data-x="1">Two</h2>"#;
    let options = Options::default().with_keep_tags(["h2"]).all_attrs(true);
    assert_eq!(
        extract_ok(html, &options),
        r#"<h2 id="t" class="sub" data-x="1">Two</h2>"#
    );
}

#[test]
fn keep_links_with_href() {
    let html = r#"<p>See <a href="https://example.com/" target="_blank" id="l">site</a>.</p>"#;
    let options = Options::default().with_keep_tags(["a"]);
    assert_eq!(
        extract_ok(html, &options),
        r#"See <a href="https://example.com/" id="l">site</a>."#
    );
}

#[test]
fn keep_images_instead_of_alt_text() {
    let html = r#"<p>Pic: <img src="x.png" alt="Foo" width="10"></p>"#;

    let options = Options::default().with_keep_tags(["img"]);
    assert_eq!(extract_ok(html, &options), r#"Pic: <img alt="Foo">"#);

    let options = options.all_attrs(true);
    let output = extract_ok(html, &options);
    assert_eq!(output, r#"Pic: <img src="x.png" alt="Foo" width="10">"#);
    assert!(!output.contains("</img>"));
}

#[test]
fn keep_void_tags_never_closed() {
    let html = "<p>line one<br>line two<hr></p>";
    let options = Options::default()
        .with_selectors(["body"])
        .with_keep_tags(["br", "hr"])
        .all_attrs(true);
    let output = extract_ok(html, &options);
    assert!(output.contains("line one<br>line two"));
    assert!(output.contains("<hr>"));
    assert!(!output.contains("</br>"));
    assert!(!output.contains("</hr>"));
}

#[test]
fn keep_list_bundle() {
    let html = "<ul><li>One</li><li>Two <b>bold</b></li></ul>";
    let options = Options::default().with_keep_tags(["lists"]);
    assert_eq!(
        extract_ok(html, &options),
        "<ul><li>One</li><li>Two bold</li></ul>"
    );
}

#[test]
fn keep_table_bundle() {
    let html = "<table><tr><th>H</th></tr><tr><td>D</td></tr></table>";
    let options = Options::default().with_keep_tags(["tables"]);
    // the parser inserts <tbody>, which the bundle keeps too
    assert_eq!(
        extract_ok(html, &options),
        "<table><tbody><tr><th>H</th></tr><tr><td>D</td></tr></tbody></table>"
    );
}

#[test]
fn keep_tag_absent_from_document_changes_nothing() {
    let html = "<div><p>Hello <b>World</b></p></div>";
    let plain = extract_ok(html, &Options::default());
    let kept = extract_ok(html, &Options::default().with_keep_tags(["table", "hs"]));
    assert_eq!(plain, kept);
}

#[test]
fn keep_literal_suppressed_selectors() {
    let html = r#"<html><head><title>My page</title><meta name="description" content="d" value="v"></head><body><p>Body</p></body></html>"#;
    let options = Options::default().with_keep_tags(["head", "title", "meta"]);
    assert_eq!(
        extract_ok(html, &options),
        r#"<head><title>My page</title><meta name="description" value="v"></head>Body"#
    );
}

#[test]
fn keep_bundle_does_not_rescue_suppressed_tags() {
    let html = "<html><head><title>My page</title></head><body><p>Body</p></body></html>";
    let options = Options::default().with_keep_tags(["metadata"]);
    assert_eq!(extract_ok(html, &options), "Body");
}

#[test]
fn keep_remove_selector_wins() {
    let html = r#"<p class="ad">Ad</p><p>Text</p>"#;
    let options = Options::default()
        .with_keep_tags(["p"])
        .with_remove(["p.ad"]);
    assert_eq!(extract_ok(html, &options), "<p>Text</p>");
}

#[test]
fn keep_pre_renders_literal_text() {
    let html = "<pre>  fn main() {\n      <b>run</b>();\n  }</pre>";
    let options = Options::default().with_keep_tags(["pre", "b"]);
    assert_eq!(
        extract_ok(html, &options),
        "<pre>  fn main() {\n      run();\n  }</pre>"
    );
}

#[test]
fn keep_with_selector_and_minify() {
    let html = "<article>\n  <h1>Title</h1>\n\n  <p>First   para</p>\n  <p>Second</p>\n</article>";
    let options = Options::default()
        .with_selectors(["article"])
        .with_keep_tags(["hs"])
        .minify(true);
    assert_eq!(
        extract_ok(html, &options),
        "<h1>Title</h1>\nFirst para Second"
    );
}

#[test]
fn keep_all_attributes_preserves_namespace_prefix() {
    let html = r#"<svg><a xlink:href="u">t</a></svg>"#;
    let options = Options::default()
        .with_selectors(["a"])
        .with_keep_tags(["a"])
        .all_attrs(true);
    assert_eq!(extract_ok(html, &options), r#"<a xlink:href="u">t</a>"#);
}
