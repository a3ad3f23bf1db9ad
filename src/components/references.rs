//! Reference list component.
//!
//! Shows the deduplicated source list at the bottom of a report, or a
//! verification notice when no usable source exists. Display numbering is
//! sequential over the deduplicated list; inline citation markers keep
//! their original numbers and are not remapped here.

use maud::{Markup, html};

use crate::citation::{SourceEntry, unique_references};

/// Notice shown when the source list has no usable entries.
const NO_REFERENCES_NOTICE: &str = "Tidak ada link eksternal spesifik yang ditemukan \
untuk kueri ini. Pastikan untuk memverifikasi dengan pedoman resmi.";

/// Renders the "Validasi Referensi" section.
pub fn reference_section(sources: &[SourceEntry]) -> Markup {
    let references = unique_references(sources);

    html! {
        section class="reference-section" {
            h4 class="reference-heading" { "Validasi Referensi (Sitasi)" }
            @if references.is_empty() {
                div class="reference-empty" { (NO_REFERENCES_NOTICE) }
            } @else {
                ol class="reference-list" {
                    @for reference in &references {
                        li class="reference-entry" {
                            span class="reference-index" { (reference.display_index) }
                            a href=(reference.uri)
                                target="_blank"
                                rel="noreferrer"
                                title=(reference.display_title()) {
                                span class="reference-title" { (reference.anchor_text()) }
                                span class="reference-host" { (reference.host) }
                            }
                        }
                    }
                }
            }
        }
    }
}
