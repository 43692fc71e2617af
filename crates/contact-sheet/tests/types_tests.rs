use contact_sheet::*;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::A3.dimensions_mm(), (297.0, 420.0));
    assert_eq!(PaperSize::Letter.dimensions_mm(), (215.9, 279.4));
}

#[test]
fn test_paper_size_orientation() {
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Landscape),
        (297.0, 210.0)
    );
}

#[test]
fn test_paper_size_points() {
    let (w, h) = PaperSize::Letter.dimensions_pt(Orientation::Portrait);
    assert!((w - 612.0).abs() < 0.1);
    assert!((h - 792.0).abs() < 0.1);

    let (w, h) = PaperSize::A4.dimensions_pt(Orientation::Portrait);
    assert!((w - 595.28).abs() < 0.1);
    assert!((h - 841.89).abs() < 0.1);
}

#[test]
fn test_unit_conversion_round_trip() {
    assert!((pt_to_mm(mm_to_pt(25.4)) - 25.4).abs() < 1e-4);
    assert!((mm_to_pt(25.4) - 72.0).abs() < 1e-4);
}

#[test]
fn test_rect_fit_aspect() {
    let cell = Rect::new(0.0, 0.0, 100.0, 100.0);

    // Portrait page: full height, centered horizontally
    let fitted = cell.fit_aspect(50.0, 100.0);
    assert_eq!(fitted, Rect::new(25.0, 0.0, 50.0, 100.0));

    // Landscape page: full width, centered vertically
    let fitted = cell.fit_aspect(200.0, 100.0);
    assert_eq!(fitted, Rect::new(0.0, 25.0, 100.0, 50.0));

    // Degenerate content keeps the cell
    assert_eq!(cell.fit_aspect(0.0, 10.0), cell);
}
