use super::category_filter;

#[test]
fn all_selection_means_no_filter() {
    assert_eq!(category_filter("all"), None);
}

#[test]
fn named_categories_pass_through() {
    assert_eq!(category_filter("safety"), Some("safety"));
    assert_eq!(category_filter("pregnancy"), Some("pregnancy"));
}
