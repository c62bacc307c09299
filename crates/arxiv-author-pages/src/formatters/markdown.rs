//! Markdown output formatting.

use chrono::{Local, NaiveDate};

use crate::models::PaperRecord;

/// Days per year used for the paper age cutoff.
const DAYS_PER_YEAR: f64 = 365.25;

/// Separator closing every paper fragment.
const SEPARATOR: &str = "---------------";

/// Format a single paper as a Markdown fragment.
#[must_use]
pub fn format_paper_markdown(record: &PaperRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("### **Title:** {}\n\n", record.title));
    output.push_str(&format!("**Publish Date:** {}\n\n", record.published.format("%Y-%m-%d")));
    output.push_str(&format!("**First Author:** {}\n\n", record.authors.first()));
    output.push_str(&format!("**Last Author:** {}\n\n", record.authors.last()));

    let middle = record.authors.middle();
    if !middle.is_empty() {
        output.push_str(&format!("**Middle Authors:** {}\n\n", middle.join(", ")));
    }

    output.push_str(&format!("**Abstract:** {}\n\n", record.r#abstract));
    output.push_str(&format!("{SEPARATOR}\n\n\n"));

    output
}

/// Assemble an author page as of today's local date.
///
/// See [`make_author_page_as_of`].
#[must_use]
pub fn make_author_page(
    bio: &str,
    author: &str,
    records: &[PaperRecord],
    max_papers: usize,
    max_years: f64,
) -> String {
    make_author_page_as_of(bio, author, records, max_papers, max_years, Local::now().date_naive())
}

/// Assemble an author page: header, biography, then recent papers.
///
/// Only the first `max_papers` records are considered, in the given order.
/// Of those, a record is kept when its age in years (days / 365.25) relative
/// to `today` is strictly below `max_years`.
#[must_use]
pub fn make_author_page_as_of(
    bio: &str,
    author: &str,
    records: &[PaperRecord],
    max_papers: usize,
    max_years: f64,
    today: NaiveDate,
) -> String {
    let mut output = format!("# Research Summary for **{author}**\n\n");
    output.push_str(&format!("## {author} Bio\n\n"));
    output.push_str(&format!("{bio}\n\n"));
    output.push_str("## Recent Papers\n\n");

    for record in records.iter().take(max_papers) {
        if age_in_years(record.published, today) < max_years {
            output.push_str(&format_paper_markdown(record));
        }
    }

    output
}

fn age_in_years(published: NaiveDate, today: NaiveDate) -> f64 {
    (today - published).num_days() as f64 / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_in_years() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(age_in_years(today, today).abs() < f64::EPSILON);

        let four_years = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!((age_in_years(four_years, today) - 4.0).abs() < 0.01);

        let future = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(age_in_years(future, today) < 0.0);
    }
}
