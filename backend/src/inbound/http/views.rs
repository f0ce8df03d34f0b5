//! Server-rendered HTML pages for the portal.
//!
//! Pages are small enough to build with `format!`. Every user-controlled
//! value passes through [`escape_html`] before it is interpolated.

use actix_web::{HttpResponse, http::StatusCode, http::header::ContentType};

use crate::domain::GrievanceView;

/// Escape the five HTML-significant characters.
///
/// # Examples
/// ```
/// use backend::inbound::http::views::escape_html;
///
/// assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///     "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

/// Wrap a rendered page in a response with the given status.
pub(crate) fn html(status: StatusCode, page: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(page)
}

pub(crate) fn home_page() -> String {
    layout(
        "Grievance portal",
        "<h1>Grievance portal</h1>\n<p>Server is working!</p>\n<nav>\
         <a href=\"/register\">Register</a> | <a href=\"/login\">Log in</a> | \
         <a href=\"/submit-grievance\">Submit a grievance</a> | \
         <a href=\"/logout\">Log out</a></nav>",
    )
}

pub(crate) fn register_page() -> String {
    layout(
        "Register",
        "<h1>Register</h1>\n<form method=\"post\" action=\"/register\">\n\
         <label>Name <input name=\"Username\" required></label>\n\
         <label>Email <input name=\"Email\" type=\"email\" required></label>\n\
         <label>Password <input name=\"Password\" type=\"password\" required></label>\n\
         <label>Role <input name=\"Role\" required></label>\n\
         <button type=\"submit\">Register</button>\n</form>",
    )
}

pub(crate) fn login_page() -> String {
    layout(
        "Log in",
        "<h1>Log in</h1>\n<form method=\"post\" action=\"/login\">\n\
         <label>Email <input name=\"Email\" type=\"email\" required></label>\n\
         <label>Password <input name=\"Password\" type=\"password\" required></label>\n\
         <button type=\"submit\">Log in</button>\n</form>",
    )
}

pub(crate) fn submit_grievance_page() -> String {
    layout(
        "Submit a grievance",
        "<h1>Submit a grievance</h1>\n<form method=\"post\" action=\"/submit-grievance\">\n\
         <label>Name <input name=\"name\"></label>\n\
         <label>Email <input name=\"email\" type=\"email\"></label>\n\
         <label>Issue <textarea name=\"issue\" required></textarea></label>\n\
         <button type=\"submit\">Submit</button>\n</form>",
    )
}

pub(crate) fn grievance_page(view: &GrievanceView) -> String {
    let grievance = &view.grievance;
    let body = format!(
        "<h1>Grievance #{id}</h1>\n<dl>\n\
         <dt>Title</dt><dd>{title}</dd>\n\
         <dt>Description</dt><dd>{description}</dd>\n\
         <dt>Status</dt><dd>{status}</dd>\n\
         <dt>Submitted</dt><dd>{created_at}</dd>\n\
         <dt>Viewer</dt><dd>{viewer}</dd>\n</dl>",
        id = grievance.id,
        title = escape_html(&grievance.title),
        description = escape_html(&grievance.description),
        status = grievance.status,
        created_at = grievance.created_at.to_rfc3339(),
        viewer = escape_html(&view.viewer_id),
    );
    layout(&format!("Grievance #{}", grievance.id), &body)
}

pub(crate) fn not_found_page(message: &str) -> String {
    layout("Not found", &format!("<h2>{}</h2>", escape_html(message)))
}

pub(crate) fn error_page() -> String {
    layout(
        "Something broke",
        "<h2>Something broke</h2>\n<p>Please try again later.</p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Grievance, GrievanceId, IssueText};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("a & b", "a &amp; b")]
    #[case("<script>", "&lt;script&gt;")]
    fn escapes_markup(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape_html(raw), expected);
    }

    #[rstest]
    fn grievance_page_escapes_issue_and_viewer() {
        let created_at = Utc
            .with_ymd_and_hms(2026, 1, 5, 9, 0, 0)
            .single()
            .expect("timestamp");
        let view = GrievanceView {
            grievance: Grievance::open(
                GrievanceId::new(3).expect("id"),
                IssueText::new("<img src=x onerror=alert(1)>"),
                created_at,
            ),
            viewer_id: "<viewer>".to_owned(),
        };

        let page = grievance_page(&view);
        assert!(page.contains("Grievance #3"));
        assert!(page.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(page.contains("&lt;viewer&gt;"));
        assert!(page.contains("<dd>open</dd>"));
        assert!(!page.contains("<img"));
    }

    #[rstest]
    fn error_page_is_generic() {
        let page = error_page();
        assert!(page.contains("Something broke"));
        assert!(!page.contains("repository"));
    }
}
