use super::*;

#[test]
fn index_page_posts_file_field_to_upload() {
    let page = index_page();
    assert!(page.contains("action=\"/upload\""));
    assert!(page.contains("name=\"file\""));
    assert!(page.contains("accept=\".c,.h,.py\""));
}

#[test]
fn result_page_embeds_markup_verbatim() {
    let markup = "<pre style='font-family: monospace'>+---+<br></pre>";
    let page = result_page("main.c", markup);
    assert!(page.contains(markup));
    assert!(page.contains("id=\"zoom-in\""));
    assert!(page.contains("id=\"zoom-out\""));
}

#[test]
fn result_page_escapes_filename() {
    let page = result_page("<b>.c", "");
    assert!(page.contains("Flowchart for &lt;b&gt;.c"));
    assert!(page.contains("Nothing to draw"));
}

#[test]
fn error_page_escapes_message() {
    let page = error_page("bad <input>");
    assert!(page.contains("bad &lt;input&gt;"));
}
