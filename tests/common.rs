//! Shared test utilities for integration tests.
//!
//! Provides builders for citation source descriptors and a realistic
//! response fixture used across multiple test files.

use farmanote::{SourceEntry, WebSource};

/// Builds a source entry with the given uri and title.
#[allow(dead_code)]
pub fn source(uri: &str, title: &str) -> SourceEntry {
    SourceEntry {
        web: Some(WebSource {
            uri: Some(uri.to_string()),
            title: Some(title.to_string()),
        }),
    }
}

/// Builds a source entry with a uri but no title.
#[allow(dead_code)]
pub fn untitled_source(uri: &str) -> SourceEntry {
    SourceEntry {
        web: Some(WebSource {
            uri: Some(uri.to_string()),
            title: None,
        }),
    }
}

/// A response in the shape the upstream assistant produces: headings,
/// prose with citations, color tags, and a drug table with stock tags.
#[allow(dead_code)]
pub fn sample_response() -> &'static str {
    "## Rekomendasi Obat Baru\n\
     Berdasarkan keluhan, berikut rekomendasi terapi [1].\n\
     \n\
     | Nama Obat | Kategori | Alasan & Indikasi |\n\
     | :--- | :--- | :--- |\n\
     | Paracetamol {{GREEN:[TERSEDIA DI STOK]}} | Obat Bebas (hijau) | Antipiretik lini pertama [1] |\n\
     | Ibuprofen | Obat Bebas Terbatas (biru) | Antiinflamasi [2] |\n\
     | Amoxicillin | Obat Keras / DOWA | Perlu konsultasi [2] |\n\
     \n\
     ## Red Flags (Segera ke Dokter Jika)\n\
     - {{RED:Demam}} di atas 3 hari [1]\n\
     - Nyeri **hebat** menetap [2]\n\
     1. Periksa kembali dosis maksimum\n"
}
