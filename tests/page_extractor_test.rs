use mcp_web_tools::page_extractor::{
    DomExtractor, ExtractStrategy, TagStripExtractor, extract_text,
};

#[test]
fn script_content_is_absent_from_output() {
    let html = "<html><body><script>alert(1)</script><p>Good</p></body></html>";
    let text = extract_text(html);

    assert!(text.contains("Good"));
    assert!(!text.contains("alert"));
}

#[test]
fn non_content_subtrees_are_dropped() {
    let html = "<html><body>\
        <header>Site header</header>\
        <nav>Menu</nav>\
        <aside>Related</aside>\
        <style>p { color: red; }</style>\
        <p>Article body</p>\
        <footer>Copyright</footer>\
        </body></html>";
    let text = extract_text(html);

    assert_eq!(text, "Article body");
}

#[test]
fn empty_input_produces_empty_output_on_both_paths() {
    assert_eq!(DomExtractor.extract("").unwrap(), "");
    assert_eq!(TagStripExtractor.extract("").unwrap(), "");
    assert_eq!(extract_text(""), "");
}

#[test]
fn extraction_is_pure() {
    let html = "<div>Once</div><div>Twice</div>";
    assert_eq!(extract_text(html), extract_text(html));
}

#[test]
fn dom_output_keeps_line_breaks() {
    let html = "<div>First</div>\n<div>Second</div>";
    assert_eq!(DomExtractor.extract(html).unwrap(), "First\nSecond");
}

#[test]
fn fallback_output_collapses_to_single_spaces() {
    // The fallback mode flattens all line structure; this divergence
    // from the DOM strategy is intentional.
    let html = "<div>First</div>\n<div>Second</div>";
    assert_eq!(TagStripExtractor.extract(html).unwrap(), "First Second");
}

#[test]
fn fallback_strips_script_and_style_blocks() {
    let html = "<p>Keep</p>\
        <SCRIPT type=\"text/javascript\">var hidden = 1;\nmore();</SCRIPT>\
        <style media=\"screen\">body {\n  display: none;\n}</style>\
        <p>Also keep</p>";
    let text = TagStripExtractor.extract(html).unwrap();

    assert_eq!(text, "Keep Also keep");
    assert!(!text.contains("hidden"));
    assert!(!text.contains("display"));
}

#[test]
fn dom_trims_and_drops_blank_lines() {
    let html = "<body>\n\n   <p>  padded  </p>\n\n\n<p>next</p>\n</body>";
    assert_eq!(DomExtractor.extract(html).unwrap(), "padded\nnext");
}
