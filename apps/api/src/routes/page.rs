//! HTML rendering for the form-upload page. Template fragments are
//! embedded constants; values are escaped before interpolation.

use crate::routes::upload::ParseOutcome;

const PAGE_HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Resume Parser</title>
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
  <style>
    body { background-color: #f5f5f7; }
    .card { border-radius: 16px; }
    pre { background: #111827; color: #e5e7eb; padding: 12px; border-radius: 10px; font-size: 0.85rem; max-height: 350px; overflow: auto; }
    .badge-skill { margin: 3px; padding: 6px 10px; border-radius: 999px; background: #e0f2fe; color: #0369a1; font-size: 0.75rem; }
  </style>
</head>
<body>
<div class="container py-4">
  <h1 class="mb-3 text-center">Resume Extractor &amp; Parser</h1>
  <p class="text-center text-muted mb-4">Upload a PDF / DOCX / TXT / image resume and get structured information.</p>
  <div class="row justify-content-center"><div class="col-lg-8">
    <div class="card shadow-sm mb-4"><div class="card-body">
      <form method="POST" enctype="multipart/form-data">
        <div class="mb-3">
          <label for="file" class="form-label">Choose Resume File</label>
          <input class="form-control" type="file" name="file" id="file" required>
          <div class="form-text">Allowed: .pdf, .docx, .txt, .jpg, .png (max 10 MB)</div>
        </div>
        <button class="btn btn-primary" type="submit">Upload &amp; Parse</button>
      </form>
    </div></div>
"#;

const PAGE_FOOT: &str = r#"  </div></div>
</div>
</body>
</html>
"#;

/// Renders the page, optionally with a parse result or an error alert.
pub fn render_page(outcome: Option<&ParseOutcome>, error: Option<&str>) -> String {
    let mut html = String::from(PAGE_HEAD);

    if let Some(message) = error {
        html.push_str(&format!(
            "    <div class=\"alert alert-danger\">{}</div>\n",
            escape_html(message)
        ));
    }

    if let Some(outcome) = outcome {
        render_result(&mut html, outcome);
    }

    html.push_str(PAGE_FOOT);
    html
}

fn render_result(html: &mut String, outcome: &ParseOutcome) {
    let record = &outcome.record;

    html.push_str("    <div class=\"card shadow-sm mb-4\"><div class=\"card-body\">\n");
    html.push_str("      <h5 class=\"card-title mb-3\">Parsed Details</h5>\n");
    html.push_str("      <dl class=\"row mb-0\">\n");
    for (label, value) in [
        ("Name", &record.name),
        ("Email", &record.email),
        ("Phone", &record.phone_number),
    ] {
        html.push_str(&format!(
            "        <dt class=\"col-sm-3\">{label}</dt><dd class=\"col-sm-9\">{}</dd>\n",
            or_dash(value)
        ));
    }

    html.push_str("        <dt class=\"col-sm-3\">Links</dt><dd class=\"col-sm-9\">");
    if outcome.links.is_empty() {
        html.push('-');
    } else {
        for link in &outcome.links {
            html.push_str(&format!("<div>{}</div>", escape_html(link)));
        }
    }
    html.push_str("</dd>\n");

    html.push_str("        <dt class=\"col-sm-3\">Skills</dt><dd class=\"col-sm-9\">");
    if record.skills.is_empty() {
        html.push('-');
    } else {
        for skill in &record.skills {
            html.push_str(&format!(
                "<span class=\"badge-skill\">{}</span>",
                escape_html(skill)
            ));
        }
    }
    html.push_str("</dd>\n      </dl>\n    </div></div>\n");

    for (title, entries) in [
        ("Work Experience", &record.work_experience),
        ("Certifications", &record.certifications),
        ("Achievements", &record.achievements),
        ("Extra-Curricular", &record.extra_curricular_activities),
        ("Publications", &record.research_publications),
    ] {
        html.push_str(&format!(
            "    <div class=\"card shadow-sm mb-4\"><div class=\"card-body\">\n      <h5 class=\"card-title\">{title}</h5>\n      <pre>{}</pre>\n    </div></div>\n",
            if entries.is_empty() {
                format!("No {} section detected.", title.to_lowercase())
            } else {
                escape_html(&entries.join("\n"))
            }
        ));
    }

    let json = serde_json::to_string_pretty(record)
        .unwrap_or_else(|_| "{}".to_string());
    html.push_str(&format!(
        "    <div class=\"card shadow-sm\"><div class=\"card-body\">\n      <h5 class=\"card-title\">Raw JSON</h5>\n      <pre>{}</pre>\n    </div></div>\n",
        escape_html(&json)
    ));
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        escape_html(value)
    }
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ResumeRecord;

    #[test]
    fn test_form_page_renders_without_result() {
        let html = render_page(None, None);
        assert!(html.contains("multipart/form-data"));
        assert!(!html.contains("Parsed Details"));
        assert!(!html.contains("alert-danger"));
    }

    #[test]
    fn test_error_is_escaped_into_alert() {
        let html = render_page(None, Some("bad <script> thing"));
        assert!(html.contains("alert-danger"));
        assert!(html.contains("bad &lt;script&gt; thing"));
        assert!(!html.contains("bad <script>"));
    }

    #[test]
    fn test_result_page_shows_identity_and_json() {
        let outcome = ParseOutcome {
            record: ResumeRecord {
                name: "Jane Doe".to_string(),
                email: "jane@x.dev".to_string(),
                skills: vec!["python".to_string()],
                ..ResumeRecord::default()
            },
            links: vec!["https://jane.dev".to_string()],
        };
        let html = render_page(Some(&outcome), None);
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("jane@x.dev"));
        assert!(html.contains("badge-skill"));
        assert!(html.contains("https://jane.dev"));
        assert!(html.contains("&quot;phoneNumber&quot;"));
    }
}
