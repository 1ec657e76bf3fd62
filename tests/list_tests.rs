use predicates::function::function;
use predicates::str::contains;

mod common;
use common::{init_db, setup_test_db, shl};

fn add_dated(db_path: &str, title: &str, date: &str) {
    let mut cmd = shl();
    cmd.args(["--db", db_path, "add", title]);
    if !date.is_empty() {
        cmd.args(["--date", date]);
    }
    cmd.assert().success();
}

/// True when `first` appears before `second` in the output.
fn ordered(first: &'static str, second: &'static str) -> impl Fn(&str) -> bool {
    move |out: &str| match (out.find(first), out.find(second)) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

#[test]
fn test_default_sort_is_date_desc_with_empty_last() {
    let db_path = setup_test_db("sort_default");
    init_db(&db_path);
    add_dated(&db_path, "舊書", "2024-01-01");
    add_dated(&db_path, "無日期", "");
    add_dated(&db_path, "新書", "2025-06-01");

    shl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(function(ordered("新書", "舊書")))
        .stdout(function(ordered("舊書", "無日期")));
}

#[test]
fn test_sort_date_asc_keeps_empty_last() {
    let db_path = setup_test_db("sort_asc");
    init_db(&db_path);
    add_dated(&db_path, "無日期", "");
    add_dated(&db_path, "舊書", "2024-01-01");
    add_dated(&db_path, "新書", "2025-06-01");

    shl()
        .args(["--db", &db_path, "list", "--sort", "date-asc"])
        .assert()
        .success()
        .stdout(function(ordered("舊書", "新書")))
        .stdout(function(ordered("新書", "無日期")));
}

#[test]
fn test_sort_added_is_newest_first() {
    let db_path = setup_test_db("sort_added");
    init_db(&db_path);
    add_dated(&db_path, "第一本", "");
    add_dated(&db_path, "第二本", "");

    shl()
        .args(["--db", &db_path, "list", "--sort", "added"])
        .assert()
        .success()
        .stdout(function(ordered("第二本", "第一本")));
}

#[test]
fn test_sort_author_puts_unclassified_last() {
    let db_path = setup_test_db("sort_author");
    init_db(&db_path);
    // no author: the 未分類作者 sentinel
    add_dated(&db_path, "無名書", "");
    shl()
        .args(["--db", &db_path, "add", "有名書", "--author", "曹雪芹"])
        .assert()
        .success();

    shl()
        .args(["--db", &db_path, "list", "--sort", "author"])
        .assert()
        .success()
        .stdout(function(ordered("有名書", "無名書")));
}

#[test]
fn test_unknown_category_filter_fails() {
    let db_path = setup_test_db("bad_filter");
    init_db(&db_path);

    shl()
        .args(["--db", &db_path, "list", "--category", "不存在"])
        .assert()
        .failure()
        .stderr(contains("Unknown category"));
}

#[test]
fn test_no_matches_message() {
    let db_path = setup_test_db("no_match");
    init_db(&db_path);
    add_dated(&db_path, "紅樓夢", "");

    shl()
        .args(["--db", &db_path, "list", "--search", "不存在的詞"])
        .assert()
        .success()
        .stdout(contains("No matching books"));
}

#[test]
fn test_page_past_end_is_empty_but_counted() {
    let db_path = setup_test_db("page_past_end");
    init_db(&db_path);
    add_dated(&db_path, "唯一的書", "");

    shl()
        .args(["--db", &db_path, "list", "--page", "9"])
        .assert()
        .success()
        .stdout(contains("Page 9/1 (1 records)"));
}
