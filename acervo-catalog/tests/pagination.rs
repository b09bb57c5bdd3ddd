use acervo_catalog::{PAGE_SIZE, page_count, paginate};

#[test]
fn page_count_has_minimum_of_one() {
    assert_eq!(page_count(0, PAGE_SIZE), 1);
    assert_eq!(page_count(1, PAGE_SIZE), 1);
    assert_eq!(page_count(10, PAGE_SIZE), 1);
    assert_eq!(page_count(11, PAGE_SIZE), 2);
    assert_eq!(page_count(95, PAGE_SIZE), 10);
}

#[test]
fn empty_list_yields_single_empty_page() {
    let items: Vec<u32> = Vec::new();
    let page = paginate(&items, 1, PAGE_SIZE);
    assert_eq!(page.number, 1);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
}

#[test]
fn pages_slice_in_order() {
    let items: Vec<u32> = (0..25).collect();
    let second = paginate(&items, 2, PAGE_SIZE);
    assert_eq!(second.items, &items[10..20]);

    let last = paginate(&items, 3, PAGE_SIZE);
    assert_eq!(last.items, &items[20..25]);
    assert_eq!(last.total_items, 25);
}

#[test]
fn out_of_range_pages_are_clamped() {
    let items: Vec<u32> = (0..25).collect();

    let zero = paginate(&items, 0, PAGE_SIZE);
    assert_eq!(zero.number, 1);
    assert_eq!(zero.items, &items[0..10]);

    let beyond = paginate(&items, 99, PAGE_SIZE);
    assert_eq!(beyond.number, 3);
    assert_eq!(beyond.items, &items[20..25]);
}

#[test]
fn concatenated_pages_reconstruct_the_list() {
    for len in [0usize, 1, 9, 10, 11, 20, 37] {
        let items: Vec<usize> = (0..len).collect();
        let pages = page_count(len, PAGE_SIZE);
        let rebuilt: Vec<usize> = (1..=pages)
            .flat_map(|p| paginate(&items, p, PAGE_SIZE).items.to_vec())
            .collect();
        assert_eq!(rebuilt, items, "len {}", len);
    }
}

#[test]
fn zero_page_size_is_treated_as_one() {
    let items = [1, 2, 3];
    let page = paginate(&items, 2, 0);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items, &[2]);
}
