//! HTML pages served around the rendered markup.

use html_escape::encode_text;

const STYLE: &str = r#"
body {
    font-family: sans-serif;
    background: #1e1e1e;
    color: #fff;
    margin: 0;
    padding: 40px;
    display: flex;
    flex-direction: column;
    align-items: center;
}
h1 { color: #FFD700; }
form, .flowchart-container, .message {
    background: rgba(255, 255, 255, 0.1);
    padding: 30px;
    border-radius: 12px;
}
.flowchart-container { max-width: 95%; overflow-x: auto; transform-origin: top left; }
button, a.button {
    background: #FFD700;
    color: #333;
    border: none;
    border-radius: 5px;
    padding: 10px 20px;
    cursor: pointer;
    text-decoration: none;
    font-size: 1rem;
}
button:hover, a.button:hover { background: #FF9900; }
.zoom-controls {
    position: fixed;
    left: 20px;
    bottom: 20px;
    display: flex;
    flex-direction: column;
    gap: 8px;
}
"#;

const ZOOM_SCRIPT: &str = r#"
let zoomLevel = 1;
const container = document.getElementById('flowchart-container');
document.getElementById('zoom-in').addEventListener('click', () => {
    zoomLevel += 0.1;
    container.style.transform = `scale(${zoomLevel})`;
});
document.getElementById('zoom-out').addEventListener('click', () => {
    zoomLevel = Math.max(0.5, zoomLevel - 0.1);
    container.style.transform = `scale(${zoomLevel})`;
});
"#;

/// Extensions the upload form offers; the server still checks every upload.
pub const ACCEPTED_EXTENSIONS: &str = ".c,.h,.py";

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

pub fn index_page() -> String {
    let body = format!(
        "<h1>Flowchart Generator</h1>\n\
         <form enctype=\"multipart/form-data\" method=\"post\" action=\"/upload\">\n\
         <label for=\"file\">Upload a C or Python file</label><br>\n\
         <input type=\"file\" name=\"file\" id=\"file\" accept=\"{ACCEPTED_EXTENSIONS}\" required><br><br>\n\
         <button type=\"submit\">Generate Flowchart</button>\n\
         </form>"
    );
    document("Flowchart Generator", &body)
}

/// Result page embedding already-rendered markup. An empty render shows a
/// note instead of an empty container.
pub fn result_page(filename: &str, markup: &str) -> String {
    let filename = encode_text(filename);
    let chart = if markup.is_empty() {
        "<p>Nothing to draw: the file has no code lines.</p>".to_string()
    } else {
        markup.to_string()
    };
    let body = format!(
        "<h1>Flowchart for {filename}</h1>\n\
         <div class=\"flowchart-container\" id=\"flowchart-container\">\n{chart}</div>\n\
         <p><a class=\"button\" href=\"/\">Upload another file</a></p>\n\
         <div class=\"zoom-controls\">\n\
         <button id=\"zoom-in\">+</button>\n\
         <button id=\"zoom-out\">-</button>\n\
         </div>\n\
         <script>{ZOOM_SCRIPT}</script>"
    );
    document("Flowchart Result", &body)
}

pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Upload failed</h1>\n<div class=\"message\">{}</div>\n\
         <p><a class=\"button\" href=\"/\">Try again</a></p>",
        encode_text(message)
    );
    document("Upload failed", &body)
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
