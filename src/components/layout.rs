//! Page layout wrapper and report card chrome.

use maud::{DOCTYPE, Markup, html};

/// Wraps page content with standard HTML structure.
///
/// Provides DOCTYPE, head, stylesheet, and the filter script include.
/// The theme travels explicitly as a `data-theme` attribute consumed by
/// the bundled stylesheet; there is no ambient theme state.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `theme`: `"light"` or `"dark"`
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, theme: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" data-theme=(theme) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Farmanote" }
                link rel="stylesheet" href="assets/report.css";
            }
            body {
                div class="container" {
                    (body)
                }
                script src="assets/filter.js" {}
            }
        }
    }
}

/// Renders the report card: titled header with the generation badge, the
/// rendered blocks, and the reference section underneath.
pub fn report_card(title: &str, content: Markup, references: Markup) -> Markup {
    html! {
        div class="report-card" {
            div class="card-header" {
                h3 class="card-title" { (title) }
                span class="card-badge" { "AI GENERATED" }
            }
            div class="card-body" {
                div class="report-blocks" {
                    (content)
                }
                (references)
            }
        }
    }
}

/// Fixed disclaimer banner shown below the card.
pub fn disclaimer() -> Markup {
    html! {
        div class="disclaimer" {
            p {
                "Disclaimer AI: Alat ini membantu profesional tetapi tidak menggantikan "
                "penilaian klinis. Verifikasi semua rekomendasi DOWA/OTC dengan regulasi "
                "Kemenkes terbaru."
            }
        }
    }
}
