//! Markdown formatter tests.
//!
//! Checks the literal paper template and the truncate-then-filter page rules.

use arxiv_author_pages::formatters::{format_paper_markdown, make_author_page, make_author_page_as_of};
use arxiv_author_pages::models::{AuthorList, PaperRecord};
use chrono::{Duration, Local, NaiveDate};

// =============================================================================
// Helper Functions
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_record(title: &str, published: NaiveDate, authors: &[&str]) -> PaperRecord {
    PaperRecord {
        title: title.to_string(),
        r#abstract: format!("Abstract of {title}."),
        published,
        updated: published,
        authors: AuthorList::new(authors.iter().map(|a| (*a).to_string()).collect()).unwrap(),
        pdf_link: None,
    }
}

fn fragment_count(page: &str) -> usize {
    page.matches("### **Title:**").count()
}

// =============================================================================
// Paper Fragment Tests
// =============================================================================

#[test]
fn test_format_paper_exact_template() {
    let record = make_record("Deep Nets", date(2024, 2, 29), &["Ada", "Bob", "Cy"]);
    let expected = "### **Title:** Deep Nets\n\n\
                    **Publish Date:** 2024-02-29\n\n\
                    **First Author:** Ada\n\n\
                    **Last Author:** Cy\n\n\
                    **Middle Authors:** Bob\n\n\
                    **Abstract:** Abstract of Deep Nets.\n\n\
                    ---------------\n\n\n";

    assert_eq!(format_paper_markdown(&record), expected);
}

#[test]
fn test_format_paper_two_authors_has_no_middle_line() {
    let record = make_record("Pair", date(2024, 1, 1), &["Ada", "Bob"]);
    let output = format_paper_markdown(&record);

    assert!(!output.contains("Middle Authors"));
    assert!(output.contains("**First Author:** Ada\n\n**Last Author:** Bob\n\n**Abstract:**"));
}

#[test]
fn test_format_paper_single_author_is_first_and_last() {
    let record = make_record("Solo", date(2024, 1, 1), &["Ada"]);
    let output = format_paper_markdown(&record);

    assert!(output.contains("**First Author:** Ada"));
    assert!(output.contains("**Last Author:** Ada"));
    assert!(!output.contains("Middle Authors"));
}

#[test]
fn test_format_paper_many_middle_authors() {
    let record = make_record("Crowd", date(2024, 1, 1), &["A", "B", "C", "D", "E"]);
    let output = format_paper_markdown(&record);

    assert!(output.contains("**Middle Authors:** B, C, D\n\n"));
}

// =============================================================================
// Author Page Tests
// =============================================================================

#[test]
fn test_page_header_and_bio() {
    let today = date(2024, 6, 1);
    let page = make_author_page_as_of("Works on sparse models.", "Jane Doe", &[], 10, 20.0, today);

    assert_eq!(
        page,
        "# Research Summary for **Jane Doe**\n\n\
         ## Jane Doe Bio\n\n\
         Works on sparse models.\n\n\
         ## Recent Papers\n\n"
    );
}

#[test]
fn test_page_max_papers_takes_leading_records() {
    let today = date(2024, 6, 1);
    let records = vec![
        make_record("Newest", date(2024, 5, 1), &["A"]),
        make_record("Older", date(2024, 4, 1), &["A"]),
    ];

    let page = make_author_page_as_of("bio", "A", &records, 1, 20.0, today);

    assert_eq!(fragment_count(&page), 1);
    assert!(page.contains("Newest"));
    assert!(!page.contains("Older"));
}

#[test]
fn test_page_truncates_before_filtering() {
    let today = date(2024, 6, 1);
    let records = vec![
        make_record("Ancient", date(1990, 1, 1), &["A"]),
        make_record("Recent", date(2024, 1, 1), &["A"]),
    ];

    // Only "Ancient" is considered, and it is too old.
    let page = make_author_page_as_of("bio", "A", &records, 1, 5.0, today);
    assert_eq!(fragment_count(&page), 0);
}

#[test]
fn test_page_does_not_resort() {
    let today = date(2024, 6, 1);
    let records = vec![
        make_record("Second", date(2023, 1, 1), &["A"]),
        make_record("First", date(2024, 1, 1), &["A"]),
    ];

    let page = make_author_page_as_of("bio", "A", &records, 10, 20.0, today);
    let second = page.find("Second").unwrap();
    let first = page.find("First").unwrap();
    assert!(second < first);
}

#[test]
fn test_page_age_filter_boundary() {
    let today = date(2024, 6, 1);
    let records = vec![
        make_record("TwoYears", date(2022, 6, 10), &["A"]),
        make_record("ThreeYears", date(2021, 5, 1), &["A"]),
    ];

    let page = make_author_page_as_of("bio", "A", &records, 10, 3.0, today);
    assert!(page.contains("TwoYears"));
    assert!(!page.contains("ThreeYears"));
}

#[test]
fn test_page_zero_years_keeps_only_bio() {
    let yesterday = Local::now().date_naive() - Duration::days(1);
    let records = vec![make_record("Yesterday", yesterday, &["A", "B"])];

    let page = make_author_page("Bio text here.", "A", &records, 10, 0.0);

    assert_eq!(fragment_count(&page), 0);
    assert!(page.contains("## A Bio\n\nBio text here.\n\n"));
    assert!(page.ends_with("## Recent Papers\n\n"));
}

#[test]
fn test_page_bio_verbatim() {
    let bio = "Line one\nLine **two** with _markdown_";
    let page = make_author_page_as_of(bio, "X", &[], 1, 1.0, date(2024, 1, 1));
    assert!(page.contains(bio));
}
