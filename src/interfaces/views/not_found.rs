use actix_web::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

/// Minimal standalone error page. It does not depend on request state so it
/// can be produced from inside `ResponseError`.
pub fn render_not_found(status: StatusCode) -> Markup {
    let heading = match status {
        StatusCode::NOT_FOUND => "Page not found",
        StatusCode::BAD_REQUEST => "That request could not be understood",
        _ => "Something went wrong",
    };
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (status.as_u16()) " | " (heading) }
                link rel="stylesheet" href="/style.css";
            }
            body {
                main class="error-page" {
                    h1 { (status.as_u16()) }
                    p { (heading) }
                    a href="/" { "Back home" }
                    " · "
                    a href="/blog" { "Browse the blog" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_status() {
        let page = render_not_found(StatusCode::NOT_FOUND).into_string();
        assert!(page.contains("<h1>404</h1>"));
        assert!(page.contains("Page not found"));
    }
}
