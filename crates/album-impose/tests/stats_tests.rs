use album_impose::*;

fn pages(n: usize) -> Vec<Page> {
    (1..=n)
        .map(|order| Page::new(format!("img{}.jpg", order), order))
        .collect()
}

#[test]
fn test_stats_empty_album() {
    let stats = calculate_statistics(&[], 9).unwrap();
    assert_eq!(stats.source_pages, 0);
    assert_eq!(stats.front_sheets, 0);
    assert_eq!(stats.back_sheets, 0);
    assert_eq!(stats.total_sheets, 0);
}

#[test]
fn test_stats_ten_pages_capacity_nine() {
    let stats = calculate_statistics(&pages(10), 9).unwrap();
    assert_eq!(stats.front_sheets, 1);
    assert_eq!(stats.back_sheets, 1);
    assert_eq!(stats.total_sheets, 2);
}

#[test]
fn test_stats_legacy_capacity() {
    // 26 pages, C=6: odd stream 13 -> 3 chunks, even stream 13 -> 3 chunks
    let stats = calculate_statistics(&pages(26), LEGACY_SHEET_CAPACITY).unwrap();
    assert_eq!(stats.front_sheets, 3);
    assert_eq!(stats.back_sheets, 3);
    assert_eq!(stats.total_sheets, 6);
}

#[test]
fn test_stats_single_page() {
    let stats = calculate_statistics(&pages(1), 9).unwrap();
    assert_eq!(stats.front_sheets, 1);
    assert_eq!(stats.back_sheets, 0);
}

#[test]
fn test_stats_zero_capacity_rejected() {
    assert!(matches!(
        calculate_statistics(&pages(3), 0),
        Err(ImposeError::Config(_))
    ));
}

#[test]
fn test_stats_agree_with_impose() {
    for n in [0, 1, 5, 9, 10, 18, 19, 40] {
        let source = pages(n);
        let stats = calculate_statistics(&source, 9).unwrap();
        let layout = impose(&source, 9).unwrap();
        assert_eq!(stats.total_sheets, layout.total_sheets(), "N={}", n);
    }
}
