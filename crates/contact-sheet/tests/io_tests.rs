use contact_sheet::*;
use lopdf::{Dictionary, Document, Object, Stream};

fn create_test_pdf(num_pages: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");

    // Create page tree root ID
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    writer
}

#[test]
fn test_load_pdf_bytes() {
    let bytes = create_test_pdf(5);
    let doc = load_pdf_bytes(DocumentId(3), "report.pdf", &bytes).unwrap();

    assert_eq!(doc.id, DocumentId(3));
    assert_eq!(doc.name, "report.pdf");
    assert_eq!(doc.page_count, 5);
    assert_eq!(doc.byte_len, bytes.len());
}

#[test]
fn test_load_invalid_bytes() {
    let result = load_pdf_bytes(DocumentId(0), "junk.pdf", b"this is not a pdf");
    assert!(matches!(result, Err(ContactSheetError::Pdf(_))));
}

#[test]
fn test_load_oversized_bytes() {
    let bytes = vec![0u8; MAX_UPLOAD_BYTES + 1];
    match load_pdf_bytes(DocumentId(0), "huge.pdf", &bytes) {
        Err(ContactSheetError::FileTooLarge { size, limit }) => {
            assert_eq!(size, MAX_UPLOAD_BYTES as u64 + 1);
            assert_eq!(limit, MAX_UPLOAD_BYTES as u64);
        }
        _ => panic!("Expected FileTooLarge error"),
    }
}

#[tokio::test]
async fn test_load_pdf() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), create_test_pdf(4)).unwrap();

    let doc = load_pdf(DocumentId(1), temp.path()).await.unwrap();
    assert_eq!(doc.page_count, 4);
    assert_eq!(
        doc.name,
        temp.path().file_name().unwrap().to_string_lossy()
    );
}

#[tokio::test]
async fn test_load_oversized_file_reports_full_size() {
    use tempfile::NamedTempFile;

    // Sparse file larger than the limit; rejected from metadata before reading
    let temp = NamedTempFile::new().unwrap();
    let size = MAX_UPLOAD_BYTES as u64 * 3;
    temp.as_file().set_len(size).unwrap();

    match load_pdf(DocumentId(0), temp.path()).await {
        Err(ContactSheetError::FileTooLarge { size: reported, limit }) => {
            assert_eq!(reported, size);
            assert_eq!(limit, MAX_UPLOAD_BYTES as u64);
        }
        _ => panic!("Expected FileTooLarge error"),
    }
}

#[tokio::test]
async fn test_load_missing_file() {
    let result = load_pdf(DocumentId(0), "/nonexistent/contact-sheet/input.pdf").await;
    assert!(matches!(result, Err(ContactSheetError::Io(_))));
}

#[tokio::test]
async fn test_load_multiple_pdfs() {
    use tempfile::NamedTempFile;

    let temp1 = NamedTempFile::new().unwrap();
    let temp2 = NamedTempFile::new().unwrap();
    std::fs::write(temp1.path(), create_test_pdf(3)).unwrap();
    std::fs::write(temp2.path(), create_test_pdf(2)).unwrap();

    let paths = vec![temp1.path(), temp2.path()];
    let docs = load_multiple_pdfs(&paths).await.unwrap();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].id, DocumentId(0));
    assert_eq!(docs[0].page_count, 3);
    assert_eq!(docs[1].id, DocumentId(1));
    assert_eq!(docs[1].page_count, 2);

    let refs = extract_page_refs(&docs);
    assert_eq!(
        refs,
        vec![
            PageRef::new(DocumentId(0), 1),
            PageRef::new(DocumentId(0), 2),
            PageRef::new(DocumentId(0), 3),
            PageRef::new(DocumentId(1), 1),
            PageRef::new(DocumentId(1), 2),
        ]
    );
}

#[test]
fn test_empty_pdf_generates_nothing() {
    let doc = load_pdf_bytes(DocumentId(0), "empty.pdf", &create_test_pdf(0)).unwrap();
    assert_eq!(doc.page_count, 0);

    for mode in [LayoutMode::Standard, LayoutMode::CustomOrder, LayoutMode::Pair] {
        let options = ContactSheetOptions {
            mode,
            ..Default::default()
        };
        assert!(generate(std::slice::from_ref(&doc), &options).is_empty());
    }
}
