use super::*;

const BASE: &str = "https://www.zaubacorp.com";

fn names(candidates: &[CompanyCandidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn keyword_anchor_is_included_and_resolved() {
    let html = r#"<html><body>
        <a href="/company/FOO-PRIVATE-LIMITED/U12345MH2001PTC123456">Foo Private Limited</a>
    </body></html>"#;
    let candidates = extract_candidates(html, BASE).unwrap();
    assert_eq!(
        candidates,
        vec![CompanyCandidate {
            name: "Foo Private Limited".to_string(),
            url: "https://www.zaubacorp.com/company/FOO-PRIVATE-LIMITED/U12345MH2001PTC123456"
                .to_string(),
        }]
    );
}

#[test]
fn short_text_without_keyword_is_excluded() {
    let html = r#"<a href="/foo">Foo Bar</a>"#;
    assert!(extract_candidates(html, BASE).unwrap().is_empty());
}

#[test]
fn long_text_without_keyword_is_excluded() {
    let html = r#"<a href="/about">About us and our data sources</a>"#;
    assert!(extract_candidates(html, BASE).unwrap().is_empty());
}

#[test]
fn keyword_text_of_five_chars_is_excluded_outside_tables() {
    // "Corp." is 5 chars: not longer than 5.
    let html = r#"<a href="/x">Corp.</a>"#;
    assert!(extract_candidates(html, BASE).unwrap().is_empty());
}

#[test]
fn keyword_match_is_case_insensitive() {
    let html = r#"<a href="/c/1">ACME TRADING PVT</a>"#;
    let candidates = extract_candidates(html, BASE).unwrap();
    assert_eq!(names(&candidates), vec!["ACME TRADING PVT"]);
}

#[test]
fn whitespace_only_text_is_skipped() {
    let html = r#"<a href="/c/1">     </a><a href="/c/2">
        Beta Limited
    </a>"#;
    let candidates = extract_candidates(html, BASE).unwrap();
    assert_eq!(names(&candidates), vec!["Beta Limited"]);
}

#[test]
fn empty_href_is_skipped() {
    let html = r#"<a href="">Gamma Private Limited</a>"#;
    assert!(extract_candidates(html, BASE).unwrap().is_empty());
}

#[test]
fn anchor_without_href_is_skipped() {
    let html = r#"<a name="top">Gamma Private Limited</a>"#;
    assert!(extract_candidates(html, BASE).unwrap().is_empty());
}

#[test]
fn table_row_accepts_shorter_names() {
    // "A Ltd" is 5 chars: rejected page-wide, accepted by the table pass (> 3).
    let html = r#"<table>
        <tr><th>Name</th></tr>
        <tr><td><a href="/company/A-LTD/1">A Ltd</a></td><td>Mumbai</td></tr>
    </table>"#;
    let candidates = extract_candidates(html, BASE).unwrap();
    assert_eq!(names(&candidates), vec!["A Ltd"]);
    assert_eq!(candidates[0].url, "https://www.zaubacorp.com/company/A-LTD/1");
}

#[test]
fn table_pass_uses_narrower_keywords() {
    // "corp" only counts in the page-wide pass, which needs > 5 chars.
    let html = r#"<table><tr><td><a href="/c/1">Corp</a></td></tr></table>"#;
    assert!(extract_candidates(html, BASE).unwrap().is_empty());
}

#[test]
fn table_pass_only_considers_first_anchor_in_row() {
    let html = r#"<table><tr>
        <td><a href="/profile">View</a></td>
        <td><a href="/c/2">Zed Ltd</a></td>
    </tr></table>"#;
    // "Zed Ltd" is 7 chars so the page-wide pass still finds it.
    let candidates = extract_candidates(html, BASE).unwrap();
    assert_eq!(names(&candidates), vec!["Zed Ltd"]);

    let html = r#"<table><tr>
        <td><a href="/profile">View</a></td>
        <td><a href="/c/2">Z Ltd</a></td>
    </tr></table>"#;
    // "Z Ltd" is 5 chars: too short page-wide, and not first in its row.
    assert!(extract_candidates(html, BASE).unwrap().is_empty());
}

#[test]
fn duplicates_are_removed_keeping_first_occurrence() {
    let html = r#"<html><body>
        <a href="/company/ONE">One Private Limited</a>
        <a href="/company/TWO">Two Private Limited</a>
        <a href="https://www.zaubacorp.com/company/ONE">One Pvt Ltd (again)</a>
        <table>
            <tr><td><a href="/company/TWO">Two Private Limited</a></td></tr>
            <tr><td><a href="/company/THREE">Three Ltd</a></td></tr>
        </table>
    </body></html>"#;
    let candidates = extract_candidates(html, BASE).unwrap();
    assert_eq!(
        names(&candidates),
        vec!["One Private Limited", "Two Private Limited", "Three Ltd"]
    );

    let mut urls: Vec<&str> = candidates.iter().map(|c| c.url.as_str()).collect();
    let before = urls.len();
    urls.sort_unstable();
    urls.dedup();
    assert_eq!(urls.len(), before, "output must not repeat a URL");
}

#[test]
fn fragment_and_javascript_links_still_resolve() {
    let html = r##"<a href="#list">Company listings</a>
        <a href="javascript:void(0)">Load more private companies</a>"##;
    let candidates = extract_candidates(html, BASE).unwrap();
    let urls: Vec<&str> = candidates.iter().map(|c| c.url.as_str()).collect();
    assert_eq!(
        urls,
        vec!["https://www.zaubacorp.com/#list", "javascript:void(0)"]
    );
}

#[test]
fn non_ascii_names_are_kept_intact() {
    let html = r#"<a href="/c/1">श्री गणेश Private Limited</a>"#;
    let candidates = extract_candidates(html, BASE).unwrap();
    assert_eq!(names(&candidates), vec!["श्री गणेश Private Limited"]);
}

#[test]
fn invalid_base_url_is_an_error() {
    let result = extract_candidates("<a href='/x'>X Private Limited</a>", "not a url");
    assert!(
        matches!(result, Err(ScraperError::InvalidUrl { .. })),
        "expected InvalidUrl, got: {result:?}"
    );
}

#[test]
fn empty_document_yields_no_candidates() {
    assert!(extract_candidates("", BASE).unwrap().is_empty());
}
