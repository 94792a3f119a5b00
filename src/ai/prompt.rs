use crate::models::DocumentKind;

pub const INTENT_SYSTEM_PROMPT: &str = "\
Anda adalah router untuk dua mode: (1) 'ktp' jika pengguna ingin membuat KTP baru, \
(2) 'tanya' jika pengguna bertanya tentang administrasi publik di Bandung. \
Jika ragu tapi mengarah ke pengumpulan dokumen KTP (KK, Akta Kelahiran, Surat Pengantar), pilih 'ktp'. \
Jika kalimat berisi upload/unggah dokumen KTP, tetap 'ktp'. Selain itu 'tanya'. \
Balas hanya salah satu kata: ktp atau tanya.";

pub const QA_SYSTEM_PROMPT: &str = "\
Anda adalah asisten administrasi publik wilayah Bandung. \
Jawab singkat, akurat, dengan langkah praktis dan rujukan instansi/layanan terkait \
(Disdukcapil, kecamatan, kelurahan). Gunakan Bahasa Indonesia. \
Jika informasi berbeda antar kecamatan, jelaskan variasinya secara umum.";

pub const DOC_CHECK_SYSTEM_PROMPT: &str = "\
Tugas Anda adalah memverifikasi apakah isi teks dari dokumen memenuhi jenis yang diminta. \
Jenis bisa: 'kk', 'akta', 'surat_pengantar'. \
Gunakan bukti berbasis teks (nama dokumen, frasa khas, nomor, kop surat). \
Jawab dalam JSON: {\"is_valid\": bool, \"reason\": str, \"confidence\": 0..1}.";

/// Cap on the document snippet sent to the semantic check, in characters.
pub const DOC_SNIPPET_MAX_CHARS: usize = 4000;

pub fn build_intent_prompt(message: &str) -> String {
    format!("User: {message}")
}

pub fn build_qa_prompt(question: &str) -> String {
    format!("Pertanyaan: {question}\nJawaban:")
}

/// Build the document-check prompt for one declared kind. The extracted
/// text is truncated to `DOC_SNIPPET_MAX_CHARS` characters.
pub fn build_doc_check_prompt(kind: DocumentKind, text: &str, filename: &str) -> String {
    let snippet: String = text.chars().take(DOC_SNIPPET_MAX_CHARS).collect();
    format!(
        "Jenis diminta: {}\nNama file: {}\nIsi (potongan):\n{}\n\nKeluarkan JSON.",
        kind.as_str(),
        filename,
        snippet
    )
}
