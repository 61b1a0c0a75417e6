use super::*;

#[test]
fn maternity_path_nests_section_under_user() {
    assert_eq!(maternity_path(9, "kick-counter"), "/maternity/9/kick-counter");
}

#[test]
fn posts_path_without_category_has_no_query() {
    assert_eq!(posts_path(None), "/community/posts");
}

#[test]
fn posts_path_with_category_adds_query() {
    assert_eq!(posts_path(Some("Pregnancy")), "/community/posts?category=Pregnancy");
}

#[test]
fn comments_path_addresses_one_post() {
    assert_eq!(comments_path(42), "/community/posts/42/comments");
}
