//! Small helpers over `scraper` shared by the table extractor and the
//! section parsers.

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::error::AppError;

/// Parses a CSS selector, mapping failures into `AppError::Selector`.
pub fn parse_selector(selector: &str) -> Result<Selector, AppError> {
    Selector::parse(selector).map_err(|e| AppError::selector(selector, e.to_string()))
}

/// Tries each selector in order below `scope`; the first one that matches
/// at least one element wins and all of its matches are returned.
///
/// An empty result means no alternative matched. A selector that does not
/// parse aborts the lookup with an error.
pub fn select_first_non_empty<'a>(
    scope: ElementRef<'a>,
    selectors: &[&str],
) -> Result<Vec<ElementRef<'a>>, AppError> {
    for css in selectors {
        let selector = parse_selector(css)?;
        let matches: Vec<ElementRef<'a>> = scope.select(&selector).collect();
        if !matches.is_empty() {
            return Ok(matches);
        }
    }
    Ok(Vec::new())
}

/// Like [`select_first_non_empty`] but only the first element of the winning alternative.
pub fn select_first<'a>(
    scope: ElementRef<'a>,
    selectors: &[&str],
) -> Result<Option<ElementRef<'a>>, AppError> {
    Ok(select_first_non_empty(scope, selectors)?.into_iter().next())
}

/// All visible text below the element, concatenated and trimmed.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// True if the element's class attribute matches `pattern` anywhere.
pub fn class_matches(element: ElementRef<'_>, pattern: &Regex) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|class| pattern.is_match(class))
}

/// Descendant elements in document order, excluding `element` itself.
pub fn descendant_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// First descendant whose class matches `pattern`.
pub fn find_descendant_by_class<'a>(
    element: ElementRef<'a>,
    pattern: &Regex,
) -> Option<ElementRef<'a>> {
    descendant_elements(element).find(|child| class_matches(*child, pattern))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const PAGE: &str = r#"
        <html><body>
            <span class="date">2024/01/15</span>
            <div class="box">
                <p class="home-score"> 110 </p>
                <p class="away-score">98</p>
            </div>
        </body></html>
    "#;

    #[test]
    fn test_first_non_empty_alternative_wins() {
        let document = Html::parse_document(PAGE);
        let root = document.root_element();

        let matches = select_first_non_empty(root, &["div.date", "span.date"]).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(element_text(matches[0]), "2024/01/15");

        let none = select_first_non_empty(root, &["div.date", "table.date"]).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        let document = Html::parse_document(PAGE);
        let result = select_first(document.root_element(), &["div[", "span.date"]);
        assert!(matches!(result, Err(AppError::Selector { .. })));
    }

    #[test]
    fn test_class_pattern_lookup_skips_self() {
        let document = Html::parse_document(PAGE);
        let box_div = select_first(document.root_element(), &["div.box"])
            .unwrap()
            .unwrap();

        let box_pattern = Regex::new("box").unwrap();
        assert!(class_matches(box_div, &box_pattern));
        assert!(find_descendant_by_class(box_div, &box_pattern).is_none());

        let home = find_descendant_by_class(box_div, &Regex::new("home").unwrap()).unwrap();
        assert_eq!(element_text(home), "110");
    }
}
